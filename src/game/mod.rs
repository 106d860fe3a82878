//! Core game logic module for Snake
//!
//! The engine talks to the outside world only through the [`Clock`],
//! [`Display`] and [`ScoreStore`](crate::persistence::ScoreStore) traits, so
//! it can be driven tick by tick without a terminal or a real timer.

pub mod action;
pub mod clock;
pub mod config;
pub mod display;
pub mod engine;
pub mod state;

// Re-export commonly used types
pub use action::Direction;
pub use clock::{Clock, ManualClock, TokioClock};
pub use config::{ConfigError, GameConfig};
pub use display::{Display, Fill, Region, TextField};
pub use engine::{GameEngine, TickOutcome};
pub use state::{CollisionType, GamePhase, GameState, Position, Snake};
