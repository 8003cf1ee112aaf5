// libpn532/src/clock.rs

//! Monotonic millisecond clock used for readiness deadlines and delays.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Instant;

pub trait Clock {
    /// Milliseconds since an arbitrary fixed origin. Never goes backwards.
    fn now_ms(&self) -> u64;

    /// Block the calling thread for `ms` milliseconds
    fn delay_ms(&self, ms: u64);
}

/// Clock backed by `std::time::Instant`.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        self.origin.elapsed().as_millis() as u64
    }

    fn delay_ms(&self, ms: u64) {
        std::thread::sleep(crate::utils::ms(ms));
    }
}

/// Fake clock for tests. Clones share the same time. Every `now_ms` call
/// advances time by `tick_ms` after reading it, so spin loops terminate
/// without real waiting; `delay_ms` advances time by the requested amount.
#[derive(Debug, Clone, Default)]
pub struct MockClock {
    now: Rc<Cell<u64>>,
    tick_ms: u64,
}

impl MockClock {
    pub fn new(tick_ms: u64) -> Self {
        Self {
            now: Rc::new(Cell::new(0)),
            tick_ms,
        }
    }

    pub fn advance(&self, ms: u64) {
        self.now.set(self.now.get() + ms);
    }

    /// Current time without ticking
    pub fn peek(&self) -> u64 {
        self.now.get()
    }
}

impl Clock for MockClock {
    fn now_ms(&self) -> u64 {
        let t = self.now.get();
        self.now.set(t + self.tick_ms);
        t
    }

    fn delay_ms(&self, ms: u64) {
        self.advance(ms);
    }
}
