//! # Transmitter Error Handling
//!
//! This module defines the TxError enum, which represents the different error
//! types that can occur in the temphygro-tx crate.
//!
//! Transmitting itself never fails: `send` masks the address and wraps
//! oversized readings exactly like the sensors it imitates. Errors only come
//! from acquiring hardware, loading configuration, and the strict
//! `try_encode`/`try_send` entry points.

use thiserror::Error;

use crate::radio::hal::HalError;

/// Represents the different error types that can occur in the transmitter crate.
#[derive(Debug, Error)]
pub enum TxError {
    /// Indicates the output line or clock could not be set up.
    #[error("Hardware error: {0}")]
    Hal(#[from] HalError),

    /// Indicates a temperature whose tenths do not fit in three decimal digits.
    #[error("Temperature out of range: {0} °C (encodable: -99.9..=99.9)")]
    TemperatureOutOfRange(f32),

    /// Indicates a humidity whose tenths do not fit in three decimal digits.
    #[error("Humidity out of range: {0} % (encodable: 0.0..=99.9)")]
    HumidityOutOfRange(f32),

    /// Indicates an address that does not fit in three bits.
    #[error("Invalid address: {0} (expected 0..=7)")]
    InvalidAddress(u8),

    /// Indicates the configuration file could not be read.
    #[error("Configuration I/O error: {0}")]
    ConfigIo(#[from] std::io::Error),

    /// Indicates the configuration file is not valid JSON for this crate.
    #[error("Configuration parse error: {0}")]
    ConfigParse(#[from] serde_json::Error),

    /// A catch‑all error for uncategorized cases.
    #[error("Other error: {0}")]
    Other(String),
}
