//! The payload module builds the eight packed-decimal values carried by every
//! frame and computes the check nibbles derived from them.
//!
//! ```text
//! index │ 0    │ 1            │ 2  3  4           │ 5  6  7
//! ──────┼──────┼──────────────┼───────────────────┼──────────────────
//! value │ type │ addr | sign  │ temperature tenths│ humidity tenths
//!       │ = 1  │ (bit 3)      │ LSD first         │ LSD first
//! ```

pub mod digits;

use std::fmt;

use crate::constants::*;
use crate::error::TxError;
use digits::{pack_digits, to_tenths, unpack_digits};

/// One encoded reading, each element holding a value 0..=15
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Payload([u8; PAYLOAD_LEN]);

impl Payload {
    /// Encodes a reading exactly as the sensors do.
    ///
    /// The address is masked to three bits. Magnitudes of 100.0 and above
    /// wrap because only three digits of tenths are sent.
    pub fn encode(temperature: f32, humidity: f32, address: u8) -> Self {
        let mut data = [0u8; PAYLOAD_LEN];
        data[0] = SENSOR_TYPE_THERMO_HYGRO;
        data[1] = (address & ADDRESS_MASK) | if temperature < 0.0 { SIGN_FLAG } else { 0 };
        data[2..5].copy_from_slice(&pack_digits(to_tenths(temperature.abs())));
        data[5..8].copy_from_slice(&pack_digits(to_tenths(humidity)));
        Payload(data)
    }

    /// Encodes a reading, rejecting values the wire format cannot carry
    /// instead of wrapping them.
    pub fn try_encode(temperature: f32, humidity: f32, address: u8) -> Result<Self, TxError> {
        if address > MAX_ADDRESS {
            return Err(TxError::InvalidAddress(address));
        }
        if !temperature.is_finite() || to_tenths(temperature.abs()) > MAX_TENTHS {
            return Err(TxError::TemperatureOutOfRange(temperature));
        }
        if !humidity.is_finite() || humidity < 0.0 || to_tenths(humidity) > MAX_TENTHS {
            return Err(TxError::HumidityOutOfRange(humidity));
        }
        Ok(Self::encode(temperature, humidity, address))
    }

    /// Wraps already-packed values; each is masked to a nibble.
    pub fn from_nibbles(nibbles: [u8; PAYLOAD_LEN]) -> Self {
        Payload(nibbles.map(|n| n & NIBBLE_MASK))
    }

    pub fn as_bytes(&self) -> &[u8; PAYLOAD_LEN] {
        &self.0
    }

    pub fn sensor_type(&self) -> u8 {
        self.0[0]
    }

    pub fn address(&self) -> u8 {
        self.0[1] & ADDRESS_MASK
    }

    pub fn is_negative(&self) -> bool {
        self.0[1] & SIGN_FLAG != 0
    }

    /// Temperature as carried on the wire, in tenths of a degree.
    pub fn temperature_tenths(&self) -> i32 {
        let magnitude = unpack_digits(&self.0[2..5]) as i32;
        if self.is_negative() {
            -magnitude
        } else {
            magnitude
        }
    }

    /// Humidity as carried on the wire, in tenths of a percent.
    pub fn humidity_tenths(&self) -> u32 {
        unpack_digits(&self.0[5..8])
    }

    /// XOR over all eight values.
    pub fn checksum(&self) -> u8 {
        self.0.iter().fold(0, |acc, &b| acc ^ b) & NIBBLE_MASK
    }

    /// Additive check nibble sent by the two-checksum dialect:
    /// `(sum + checksum + 5) mod 16`.
    pub fn sum_check(&self) -> u8 {
        let sum: u32 = self.0.iter().map(|&b| u32::from(b)).sum();
        ((sum + u32::from(self.checksum()) + u32::from(SUM_CHECK_OFFSET)) & 0x0F) as u8
    }

    /// Hex rendering, two characters per value.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Display for Payload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let t = self.temperature_tenths();
        let h = self.humidity_tenths();
        write!(
            f,
            "addr {} {}{}.{} °C {}.{} %",
            self.address(),
            if self.is_negative() { "-" } else { "" },
            t.unsigned_abs() / 10,
            t.unsigned_abs() % 10,
            h / 10,
            h % 10
        )
    }
}

impl AsRef<[u8]> for Payload {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let payload = Payload::encode(-5.2, 41.0, 3);
        assert_eq!(payload.to_string(), "addr 3 -5.2 °C 41.0 %");
    }

    #[test]
    fn test_from_nibbles_masks() {
        let payload = Payload::from_nibbles([0x11, 0, 0, 0, 0, 0, 0, 0xFF]);
        assert_eq!(payload.as_bytes(), &[1, 0, 0, 0, 0, 0, 0, 15]);
    }

    #[test]
    fn test_to_hex() {
        let payload = Payload::encode(23.5, 55.0, 2);
        assert_eq!(payload.to_hex(), "0102050302000505");
    }
}
