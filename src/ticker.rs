//! Cancellable periodic task driven by the frame clock.
//!
//! The frame loop has no timers of its own, so a [`Ticker`] is polled with the
//! current time and answers whether a tick is due. Changing the period means
//! dropping the ticker and arming a new one.

use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub struct Ticker {
    period: Duration,
    next_due: f64,
}

impl Ticker {
    /// Arm a ticker whose first tick falls one period after `now` (seconds)
    pub fn arm(now: f64, period: Duration) -> Self {
        Self {
            period,
            next_due: now + period.as_secs_f64(),
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Returns true at most once per call when a tick is due.
    /// Falling more than a period behind re-phases instead of bursting.
    pub fn poll(&mut self, now: f64) -> bool {
        if now < self.next_due {
            return false;
        }
        let period = self.period.as_secs_f64();
        self.next_due += period;
        if self.next_due <= now {
            self.next_due = now + period;
        }
        true
    }
}
