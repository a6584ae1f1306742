//! # Transmitter Configuration
//!
//! Settings a deployment fixes once: which GPIO keys the RF module, the
//! sensor address, and the protocol dialect. Stored as JSON:
//!
//! ```json
//! { "pin": 17, "address": 2, "variant": "v1.2" }
//! ```
//!
//! Missing fields take their defaults.

use std::fs;
use std::path::Path;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::constants::{ADDRESS_MASK, MAX_ADDRESS};
use crate::error::TxError;
use crate::protocol::ProtocolVariant;

/// Default BCM pin for the TX868 data line
pub const DEFAULT_PIN: u8 = 17;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransmitterConfig {
    /// GPIO pin (BCM numbering) wired to the transmitter data input
    pub pin: u8,
    /// Sensor address; only the low three bits are sent
    pub address: u8,
    /// Protocol dialect
    pub variant: ProtocolVariant,
}

impl Default for TransmitterConfig {
    fn default() -> Self {
        Self {
            pin: DEFAULT_PIN,
            address: 0,
            variant: ProtocolVariant::default(),
        }
    }
}

impl TransmitterConfig {
    pub fn from_json_str(json: &str) -> Result<Self, TxError> {
        let config: Self = serde_json::from_str(json)?;
        if config.address > MAX_ADDRESS {
            warn!(
                "Configured address {} exceeds 3 bits, {} will be sent",
                config.address,
                config.address & ADDRESS_MASK
            );
        }
        Ok(config)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, TxError> {
        let path = path.as_ref();
        debug!("Loading transmitter config from {}", path.display());
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Replaces the fields for which a value is given, keeping the rest.
    pub fn with_overrides(
        mut self,
        address: Option<u8>,
        variant: Option<ProtocolVariant>,
        pin: Option<u8>,
    ) -> Self {
        if let Some(address) = address {
            self.address = address;
        }
        if let Some(variant) = variant {
            self.variant = variant;
        }
        if let Some(pin) = pin {
            self.pin = pin;
        }
        self
    }

    pub fn to_json_string(&self) -> Result<String, TxError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
