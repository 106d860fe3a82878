//! Repeating timers that drive the game tick
//!
//! The engine only ever starts and stops its clock. Whoever owns the engine
//! waits for the clock to fire and then calls [`GameEngine::tick`], so the
//! tick and the input handler never run at the same time.
//!
//! [`GameEngine::tick`]: super::GameEngine::tick

use std::time::Duration;
use tokio::time::{interval_at, Instant, Interval, MissedTickBehavior};

/// A repeating schedule the engine can start and stop
pub trait Clock {
    /// Start firing every `period`, replacing any previous schedule
    fn start(&mut self, period: Duration);

    /// Stop firing until started again
    fn stop(&mut self);
}

/// Real timer backed by `tokio::time::Interval`
#[derive(Debug, Default)]
pub struct TokioClock {
    interval: Option<Interval>,
}

impl TokioClock {
    pub fn new() -> Self {
        Self { interval: None }
    }

    pub fn is_running(&self) -> bool {
        self.interval.is_some()
    }

    /// Resolves at the next scheduled tick; never resolves while stopped
    pub async fn tick(&mut self) {
        match self.interval.as_mut() {
            Some(interval) => {
                interval.tick().await;
            }
            None => std::future::pending::<()>().await,
        }
    }
}

impl Clock for TokioClock {
    fn start(&mut self, period: Duration) {
        // First tick one full period from now, like a browser interval
        let mut interval = interval_at(Instant::now() + period, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        self.interval = Some(interval);
    }

    fn stop(&mut self) {
        self.interval = None;
    }
}

/// Clock that never fires on its own; records what the engine asked for
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ManualClock {
    /// Current period, `None` while stopped
    pub period: Option<Duration>,
    /// Every period passed to `start`, oldest first
    pub starts: Vec<Duration>,
    pub stops: usize,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_running(&self) -> bool {
        self.period.is_some()
    }
}

impl Clock for ManualClock {
    fn start(&mut self, period: Duration) {
        self.period = Some(period);
        self.starts.push(period);
    }

    fn stop(&mut self) {
        self.period = None;
        self.stops += 1;
    }
}
