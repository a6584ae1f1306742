//! Simulated output line and clock
//!
//! This module provides a virtual-time clock and an output line that records
//! every level written to it, so the modulator's timing can be checked to the
//! microsecond without hardware. Sleeping advances virtual time instantly.
//!
//! Clones share state: keep a clone of the line and clock in the test and
//! move the originals into the controller.

use std::sync::{Arc, Mutex, MutexGuard};

use super::{Clock, HalError, OutputLine};

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[derive(Debug, Default)]
struct ClockState {
    now_us: u64,
    overshoot_us: u64,
    sleeps: usize,
    total_slept_us: u64,
}

/// Virtual-time clock
#[derive(Debug, Clone, Default)]
pub struct MockClock {
    state: Arc<Mutex<ClockState>>,
}

impl MockClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clock whose virtual time starts at `now_us`.
    pub fn starting_at(now_us: u64) -> Self {
        let clock = Self::new();
        lock(&clock.state).now_us = now_us;
        clock
    }

    /// Every sleep lasts `overshoot_us` longer than requested, like a
    /// scheduler waking the thread late.
    pub fn with_sleep_overshoot(self, overshoot_us: u64) -> Self {
        lock(&self.state).overshoot_us = overshoot_us;
        self
    }

    /// Move virtual time forward without counting it as a sleep.
    pub fn advance(&self, us: u64) {
        lock(&self.state).now_us += us;
    }

    /// Number of sleeps performed so far.
    pub fn sleep_count(&self) -> usize {
        lock(&self.state).sleeps
    }

    /// Total virtual time spent sleeping.
    pub fn total_slept_us(&self) -> u64 {
        lock(&self.state).total_slept_us
    }
}

impl Clock for MockClock {
    fn now_us(&self) -> u64 {
        lock(&self.state).now_us
    }

    fn sleep_us(&mut self, us: u64) {
        let mut state = lock(&self.state);
        let slept = us + state.overshoot_us;
        state.now_us += slept;
        state.total_slept_us += slept;
        state.sleeps += 1;
    }
}

/// One write to the simulated line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineEvent {
    /// Virtual time of the write
    pub at_us: u64,
    /// Level written
    pub high: bool,
}

/// A HIGH phase reconstructed from the recorded writes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pulse {
    pub rise_us: u64,
    pub width_us: u64,
}

#[derive(Debug, Default)]
struct LineState {
    configured: bool,
    configure_error: Option<u8>,
    high: bool,
    events: Vec<LineEvent>,
}

/// Output line recording every level change against a [`MockClock`]
#[derive(Debug, Clone)]
pub struct MockLine {
    clock: MockClock,
    state: Arc<Mutex<LineState>>,
}

impl MockLine {
    pub fn new(clock: &MockClock) -> Self {
        Self {
            clock: clock.clone(),
            state: Arc::new(Mutex::new(LineState::default())),
        }
    }

    /// Line whose configuration fails as if `pin` were already claimed.
    pub fn unavailable(clock: &MockClock, pin: u8) -> Self {
        let line = Self::new(clock);
        lock(&line.state).configure_error = Some(pin);
        line
    }

    pub fn is_configured(&self) -> bool {
        lock(&self.state).configured
    }

    pub fn is_high(&self) -> bool {
        lock(&self.state).high
    }

    /// Every write so far, including writes that did not change the level.
    pub fn events(&self) -> Vec<LineEvent> {
        lock(&self.state).events.clone()
    }

    pub fn clear_events(&self) {
        lock(&self.state).events.clear();
    }

    /// HIGH phases, each paired with the write that ended it.
    pub fn pulses(&self) -> Vec<Pulse> {
        let state = lock(&self.state);
        let mut pulses = Vec::new();
        let mut level = false;
        let mut rise = 0;

        for event in &state.events {
            match (level, event.high) {
                (false, true) => rise = event.at_us,
                (true, false) => pulses.push(Pulse {
                    rise_us: rise,
                    width_us: event.at_us - rise,
                }),
                _ => {}
            }
            level = event.high;
        }
        pulses
    }

    /// Rising edge timestamps.
    pub fn rising_edges(&self) -> Vec<u64> {
        self.pulses().iter().map(|p| p.rise_us).collect()
    }

    /// Classifies every pulse as the bit whose mark duration is nearest.
    pub fn decode_bits(&self, bit_one_us: u32, bit_zero_us: u32) -> Vec<bool> {
        self.pulses()
            .iter()
            .map(|p| {
                p.width_us.abs_diff(u64::from(bit_one_us)) < p.width_us.abs_diff(u64::from(bit_zero_us))
            })
            .collect()
    }

    fn write(&mut self, high: bool) {
        let at_us = self.clock.now_us();
        let mut state = lock(&self.state);
        state.high = high;
        state.events.push(LineEvent { at_us, high });
    }
}

impl OutputLine for MockLine {
    fn configure_as_output(&mut self) -> Result<(), HalError> {
        let mut state = lock(&self.state);
        if let Some(pin) = state.configure_error {
            return Err(HalError::PinUnavailable(pin));
        }
        state.configured = true;
        Ok(())
    }

    fn set_high(&mut self) {
        self.write(true);
    }

    fn set_low(&mut self) {
        self.write(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_sleep_advances_time() {
        let mut clock = MockClock::new();
        clock.sleep_us(366);
        clock.sleep_ms(2);
        assert_eq!(clock.now_us(), 2_366);
        assert_eq!(clock.sleep_count(), 2);
    }

    #[test]
    fn test_clock_overshoot() {
        let mut clock = MockClock::starting_at(1_000).with_sleep_overshoot(7);
        clock.sleep_us(100);
        assert_eq!(clock.now_us(), 1_107);
    }

    #[test]
    fn test_clones_share_time() {
        let clock = MockClock::new();
        let mut other = clock.clone();
        other.sleep_us(50);
        assert_eq!(clock.now_us(), 50);
    }

    #[test]
    fn test_line_pulses() {
        let mut clock = MockClock::new();
        let mut line = MockLine::new(&clock);
        line.set_high();
        clock.sleep_us(366);
        line.set_low();
        clock.sleep_us(854);
        line.set_high();
        clock.sleep_us(854);
        line.set_low();
        line.set_low();

        assert_eq!(
            line.pulses(),
            vec![
                Pulse { rise_us: 0, width_us: 366 },
                Pulse { rise_us: 1_220, width_us: 854 },
            ]
        );
        assert_eq!(line.decode_bits(366, 854), vec![true, false]);
        assert_eq!(line.events().len(), 5);
    }

    #[test]
    fn test_unavailable_line() {
        let clock = MockClock::new();
        let mut line = MockLine::unavailable(&clock, 17);
        assert!(matches!(line.configure_as_output(), Err(HalError::PinUnavailable(17))));
        assert!(!line.is_configured());
    }
}
