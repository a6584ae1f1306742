//! # Host Monotonic Clock
//!
//! `std::time::Instant` based clock. Thread sleeps alone overshoot by tens of
//! microseconds on a general-purpose OS, so the final stretch of every wait
//! is spun.

use std::thread;
use std::time::{Duration, Instant};

use super::Clock;

/// Waits shorter than this are spun entirely
pub const DEFAULT_SPIN_THRESHOLD_US: u64 = 200;

/// Monotonic microsecond clock backed by `Instant`
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    origin: Instant,
    spin_threshold_us: u64,
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
            spin_threshold_us: DEFAULT_SPIN_THRESHOLD_US,
        }
    }

    /// Adjust how much of each wait is spun instead of slept.
    pub fn with_spin_threshold(mut self, spin_threshold_us: u64) -> Self {
        self.spin_threshold_us = spin_threshold_us;
        self
    }
}

impl Clock for MonotonicClock {
    fn now_us(&self) -> u64 {
        self.origin.elapsed().as_micros() as u64
    }

    fn sleep_us(&mut self, us: u64) {
        let target = Instant::now() + Duration::from_micros(us);
        if us > self.spin_threshold_us {
            thread::sleep(Duration::from_micros(us - self.spin_threshold_us));
        }
        while Instant::now() < target {
            std::hint::spin_loop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sleep_is_never_short() {
        let mut clock = MonotonicClock::new();
        let start = clock.now_us();
        clock.sleep_us(1_500);
        assert!(clock.now_us() - start >= 1_500);
    }

    #[test]
    fn test_sleep_until_past_deadline_returns() {
        let mut clock = MonotonicClock::new();
        clock.sleep_us(10);
        let before = clock.now_us();
        clock.sleep_until_us(0);
        assert!(clock.now_us() - before < 50_000);
    }
}
