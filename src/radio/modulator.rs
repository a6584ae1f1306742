//! # Bit Modulator
//!
//! Turns single bits into pulses on the output line. Every bit occupies the
//! same period (`bit_one_us + bit_zero_us`); only the split between mark
//! (HIGH) and space (LOW) tells a one from a zero:
//!
//! ```text
//!          ┌─────┐           ┌────────────┐
//! bit 1    │ 366 │    854    │            │   bit 0: 854 high, 366 low
//!        ──┘     └───────────┘            └─────
//!          |<----- 1220 ---->|<----- 1220 ---->|
//! ```
//!
//! Scheduling is open loop. Before raising the line the modulator waits for
//! the deadline left by the previous bit, then sets the next deadline to
//! "now + period" and sleeps out the mark. A bit that starts late pushes all
//! following deadlines back; lost time is never made up.

use log::trace;

use crate::protocol::VariantParams;
use crate::radio::hal::{Clock, OutputLine};

/// Mark durations for the two bit values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitTiming {
    pub bit_one_us: u32,
    pub bit_zero_us: u32,
}

impl BitTiming {
    pub const fn period_us(&self) -> u32 {
        self.bit_one_us + self.bit_zero_us
    }

    pub const fn mark_us(&self, bit: bool) -> u32 {
        if bit {
            self.bit_one_us
        } else {
            self.bit_zero_us
        }
    }
}

impl From<&VariantParams> for BitTiming {
    fn from(params: &VariantParams) -> Self {
        Self {
            bit_one_us: params.bit_one_us,
            bit_zero_us: params.bit_zero_us,
        }
    }
}

/// Owns the output line, the clock and the edge schedule
#[derive(Debug)]
pub struct BitModulator<L, C> {
    line: L,
    clock: C,
    timing: BitTiming,
    next_edge_deadline: Option<u64>,
}

impl<L: OutputLine, C: Clock> BitModulator<L, C> {
    /// Takes over a configured line. No deadline is pending.
    pub fn new(line: L, clock: C, timing: BitTiming) -> Self {
        Self {
            line,
            clock,
            timing,
            next_edge_deadline: None,
        }
    }

    pub fn timing(&self) -> BitTiming {
        self.timing
    }

    /// Earliest time the next rising edge may happen.
    pub fn next_edge_deadline(&self) -> Option<u64> {
        self.next_edge_deadline
    }

    /// Forget the pending deadline; the next bit starts immediately.
    pub fn reset_schedule(&mut self) {
        self.next_edge_deadline = None;
    }

    /// Emit one bit, blocking for the wait and the mark duration.
    pub fn emit_bit(&mut self, bit: bool) {
        if let Some(deadline) = self.next_edge_deadline {
            let now = self.clock.now_us();
            if deadline > now {
                self.clock.sleep_until_us(deadline);
            } else if deadline < now {
                trace!("bit edge late by {} us", now - deadline);
            }
        }

        self.line.set_high();
        self.next_edge_deadline = Some(self.clock.now_us() + u64::from(self.timing.period_us()));

        self.clock.sleep_us(u64::from(self.timing.mark_us(bit)));
        self.line.set_low();
    }

    /// Drive the line LOW regardless of its state.
    pub fn force_low(&mut self) {
        self.line.set_low();
    }

    /// Blocking pause that leaves the edge schedule untouched.
    pub fn pause_ms(&mut self, ms: u64) {
        self.clock.sleep_ms(ms);
    }

    pub fn line(&self) -> &L {
        &self.line
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Give back the line and clock.
    pub fn into_parts(self) -> (L, C) {
        (self.line, self.clock)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::radio::hal::{MockClock, MockLine};

    const TIMING: BitTiming = BitTiming {
        bit_one_us: 366,
        bit_zero_us: 854,
    };

    #[test]
    fn test_first_bit_starts_immediately() {
        let clock = MockClock::starting_at(5_000);
        let line = MockLine::new(&clock);
        let mut modulator = BitModulator::new(line.clone(), clock.clone(), TIMING);

        modulator.emit_bit(true);

        assert_eq!(line.rising_edges(), vec![5_000]);
        assert_eq!(modulator.next_edge_deadline(), Some(6_220));
    }

    #[test]
    fn test_reset_schedule() {
        let clock = MockClock::new();
        let line = MockLine::new(&clock);
        let mut modulator = BitModulator::new(line, clock, TIMING);
        modulator.emit_bit(false);
        assert!(modulator.next_edge_deadline().is_some());
        modulator.reset_schedule();
        assert_eq!(modulator.next_edge_deadline(), None);
    }
}
