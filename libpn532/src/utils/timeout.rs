//! Timeout helpers used across the crate.
//!
//! Deadlines are measured against a `Clock` so tests can drive them with a
//! `MockClock` instead of real time.

use std::time::Duration;

use crate::clock::Clock;

/// Convert milliseconds to Duration.
pub fn ms(ms: u64) -> Duration {
    Duration::from_millis(ms)
}

/// A point in time `timeout_ms` after construction.
#[derive(Debug, Clone, Copy)]
pub struct Deadline {
    start_ms: u64,
    timeout_ms: u64,
}

impl Deadline {
    pub fn start(clock: &dyn Clock, timeout_ms: u64) -> Self {
        Self {
            start_ms: clock.now_ms(),
            timeout_ms,
        }
    }

    pub fn elapsed(&self, clock: &dyn Clock) -> u64 {
        clock.now_ms().saturating_sub(self.start_ms)
    }

    /// True once elapsed time reaches the timeout
    pub fn expired(&self, clock: &dyn Clock) -> bool {
        self.elapsed(clock) >= self.timeout_ms
    }
}
