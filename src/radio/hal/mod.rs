//! # Hardware Abstraction Layer for the Transmitter Line
//!
//! The transmitter needs exactly two things from the platform: one digital
//! output keying the RF module, and a monotonic microsecond clock with
//! blocking sleeps. Both are traits so the modulator can run against real
//! GPIO or against the simulated line used in tests.

use thiserror::Error;

/// Errors that can occur during HAL operations
#[derive(Debug, Error)]
pub enum HalError {
    #[error("GPIO operation error: {0}")]
    Gpio(String),

    #[error("GPIO pin {0} is unavailable")]
    PinUnavailable(u8),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Highest GPIO number on the Raspberry Pi header (BCM numbering)
pub const MAX_BCM_PIN: u8 = 27;

/// Rejects pin numbers that are not on the 40-pin header.
pub fn check_bcm_pin(pin: u8) -> Result<(), HalError> {
    if pin > MAX_BCM_PIN {
        return Err(HalError::InvalidConfig(format!(
            "GPIO {} is not a header pin (expected 0..={})",
            pin, MAX_BCM_PIN
        )));
    }
    Ok(())
}

/// Digital output line driving the transmitter's data input
///
/// Level changes cannot fail once the line is configured.
pub trait OutputLine {
    /// Put the line into output mode.
    fn configure_as_output(&mut self) -> Result<(), HalError>;

    /// Drive the line HIGH (carrier on).
    fn set_high(&mut self);

    /// Drive the line LOW (carrier off).
    fn set_low(&mut self);
}

/// Monotonic clock with blocking sleeps
pub trait Clock {
    /// Microseconds since an arbitrary fixed origin.
    fn now_us(&self) -> u64;

    /// Block for `us` microseconds.
    fn sleep_us(&mut self, us: u64);

    /// Block for `ms` milliseconds.
    fn sleep_ms(&mut self, ms: u64) {
        self.sleep_us(ms * 1_000);
    }

    /// Block until `deadline_us`; returns immediately if it has passed.
    fn sleep_until_us(&mut self, deadline_us: u64) {
        let now = self.now_us();
        if deadline_us > now {
            self.sleep_us(deadline_us - now);
        }
    }
}

impl<T: OutputLine + ?Sized> OutputLine for &mut T {
    fn configure_as_output(&mut self) -> Result<(), HalError> {
        (**self).configure_as_output()
    }

    fn set_high(&mut self) {
        (**self).set_high()
    }

    fn set_low(&mut self) {
        (**self).set_low()
    }
}

impl<T: Clock + ?Sized> Clock for &mut T {
    fn now_us(&self) -> u64 {
        (**self).now_us()
    }

    fn sleep_us(&mut self, us: u64) {
        (**self).sleep_us(us)
    }
}

pub mod clock;
pub mod mock;

// Platform implementations
#[cfg(feature = "raspberry-pi")]
pub mod raspberry_pi;

pub use clock::MonotonicClock;
pub use mock::{LineEvent, MockClock, MockLine, Pulse};

#[cfg(feature = "raspberry-pi")]
pub use raspberry_pi::RpiOutputLine;
