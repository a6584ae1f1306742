//! Duty Cycle Helpers
//!
//! The 868 MHz SRD sub-band used by these sensors allows 1 % transmit time.
//! Nothing here is enforced by the transmitter: `get_pause` is the policy the
//! caller follows, and these helpers let the caller check it.

use std::collections::VecDeque;
use std::time::Duration;

use log::debug;

/// Duty cycle limit of the 868.0-868.6 MHz sub-band
pub const SRD_868_DUTY_CYCLE_PERCENT: f32 = 1.0;

/// Observation window for duty cycle accounting
pub const DEFAULT_WINDOW: Duration = Duration::from_secs(3600);

/// Share of `interval` spent transmitting, in percent.
pub fn duty_cycle_percent(transmission_us: u64, interval: Duration) -> f32 {
    let interval_us = interval.as_micros() as f32;
    if interval_us == 0.0 {
        return 100.0;
    }
    (transmission_us as f32 / interval_us) * 100.0
}

/// Sliding-window record of past transmissions
#[derive(Debug, Clone)]
pub struct DutyCycleTracker {
    window_us: u64,
    limit_percent: f32,
    /// (start, airtime) in clock microseconds
    transmissions: VecDeque<(u64, u64)>,
}

impl Default for DutyCycleTracker {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW, SRD_868_DUTY_CYCLE_PERCENT)
    }
}

impl DutyCycleTracker {
    pub fn new(window: Duration, limit_percent: f32) -> Self {
        Self {
            window_us: window.as_micros() as u64,
            limit_percent,
            transmissions: VecDeque::new(),
        }
    }

    pub fn limit_percent(&self) -> f32 {
        self.limit_percent
    }

    /// Add a transmission that started at `start_us`.
    pub fn record(&mut self, start_us: u64, airtime_us: u64) {
        self.prune(start_us);
        self.transmissions.push_back((start_us, airtime_us));
    }

    /// Airtime within the window ending at `now_us`.
    pub fn airtime_in_window_us(&mut self, now_us: u64) -> u64 {
        self.prune(now_us);
        self.transmissions.iter().map(|&(_, airtime)| airtime).sum()
    }

    /// Current duty cycle percentage.
    pub fn utilization_percent(&mut self, now_us: u64) -> f32 {
        let airtime = self.airtime_in_window_us(now_us);
        duty_cycle_percent(airtime, Duration::from_micros(self.window_us))
    }

    /// Check if a transmission of `airtime_us` would stay within the limit.
    pub fn can_transmit(&mut self, now_us: u64, airtime_us: u64) -> bool {
        let projected = self.airtime_in_window_us(now_us) + airtime_us;
        let percent = duty_cycle_percent(projected, Duration::from_micros(self.window_us));
        if percent > self.limit_percent {
            debug!(
                "duty cycle {:.3}% would exceed limit {:.3}%",
                percent, self.limit_percent
            );
            return false;
        }
        true
    }

    fn prune(&mut self, now_us: u64) {
        let Some(cutoff) = now_us.checked_sub(self.window_us) else {
            return;
        };
        while self
            .transmissions
            .front()
            .is_some_and(|&(start, _)| start <= cutoff)
        {
            self.transmissions.pop_front();
        }
    }
}
