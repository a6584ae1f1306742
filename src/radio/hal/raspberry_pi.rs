//! # Raspberry Pi HAL Implementation
//!
//! Output line implementation for Raspberry Pi 4 and 5 using the rppal crate.
//!
//! ## Hardware Setup
//!
//! ```text
//! Pi Pin │ BCM GPIO │ TX868 Pin │ Function
//! ───────┼──────────┼───────────┼─────────────
//! 1      │ 3V3      │ VCC       │ Supply
//! 6      │ GND      │ GND       │ Ground
//! 11     │ GPIO 17  │ TXD       │ Data (output, default)
//! ```
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use temphygro_tx::radio::hal::{MonotonicClock, RpiOutputLine};
//! use temphygro_tx::{ProtocolVariant, TransmitterController};
//!
//! let line = RpiOutputLine::new(17)?;
//! let mut tx = TransmitterController::setup(line, MonotonicClock::new(), ProtocolVariant::V1_2)?;
//! tx.send(21.4, 48.0);
//! # Ok::<(), temphygro_tx::TxError>(())
//! ```

use rppal::gpio::{Gpio, OutputPin};
use thiserror::Error;

use super::{HalError, OutputLine};

/// Errors specific to Raspberry Pi HAL implementation
#[derive(Error, Debug)]
pub enum RpiHalError {
    /// GPIO initialization failed
    #[error("GPIO initialization failed: {0}")]
    GpioInit(#[from] rppal::gpio::Error),
}

impl From<RpiHalError> for HalError {
    fn from(err: RpiHalError) -> Self {
        HalError::Gpio(err.to_string())
    }
}

/// TX868 data line on a Raspberry Pi GPIO pin (BCM numbering)
pub struct RpiOutputLine {
    gpio: Gpio,
    pin_number: u8,
    pin: Option<OutputPin>,
}

impl RpiOutputLine {
    /// Opens the GPIO peripheral; the pin is claimed by `configure_as_output`.
    pub fn new(pin_number: u8) -> Result<Self, HalError> {
        super::check_bcm_pin(pin_number)?;
        let gpio = Gpio::new().map_err(RpiHalError::from)?;
        log::debug!("Raspberry Pi GPIO opened for TX line on GPIO {}", pin_number);
        Ok(Self {
            gpio,
            pin_number,
            pin: None,
        })
    }

    pub fn pin_number(&self) -> u8 {
        self.pin_number
    }
}

impl OutputLine for RpiOutputLine {
    fn configure_as_output(&mut self) -> Result<(), HalError> {
        let pin = self.gpio.get(self.pin_number).map_err(|e| match e {
            rppal::gpio::Error::PinNotAvailable(_) | rppal::gpio::Error::PinUsed(_) => {
                HalError::PinUnavailable(self.pin_number)
            }
            other => HalError::from(RpiHalError::from(other)),
        })?;
        self.pin = Some(pin.into_output_low());
        log::info!("TX line configured: GPIO {} (output, low)", self.pin_number);
        Ok(())
    }

    fn set_high(&mut self) {
        debug_assert!(self.pin.is_some(), "TX line used before configure_as_output");
        if let Some(pin) = self.pin.as_mut() {
            pin.set_high();
        }
    }

    fn set_low(&mut self) {
        debug_assert!(self.pin.is_some(), "TX line used before configure_as_output");
        if let Some(pin) = self.pin.as_mut() {
            pin.set_low();
        }
    }
}
