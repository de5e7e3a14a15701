use std::time::Duration;

use super::config::GameConfig;

/// Tick interval that shrinks as the snake eats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Difficulty {
    initial_ms: u32,
    step_ms: u32,
    min_ms: u32,
    interval_ms: u32,
}

impl Difficulty {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            initial_ms: config.initial_interval_ms,
            step_ms: config.interval_step_ms,
            min_ms: config.min_interval_ms,
            interval_ms: config.initial_interval_ms,
        }
    }

    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms as u64)
    }

    pub fn reset(&mut self) {
        self.interval_ms = self.initial_ms;
    }

    /// Shorten the interval by one step, never below the floor.
    /// Returns true when the interval actually changed.
    pub fn ramp(&mut self) -> bool {
        let next = self.interval_ms.saturating_sub(self.step_ms).max(self.min_ms);
        let changed = next != self.interval_ms;
        self.interval_ms = next;
        changed
    }
}
