//! Grid Snake - the classic snake game on a fixed square board
//!
//! This library provides:
//! - Core game logic behind clock, display and score-store traits (game module)
//! - High-score persistence (persistence module)
//! - TUI rendering of the in-memory screen (render module)
//! - Keyboard mapping (input module)
//! - The interactive terminal mode (modes module)

pub mod game;
pub mod input;
pub mod modes;
pub mod persistence;
pub mod render;
