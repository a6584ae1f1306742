//! # Protocol Dialects
//!
//! The two transmitter generations differ only in parameters: bit timing,
//! preamble length, number of checksum nibbles, and how often a frame is
//! repeated. Selecting a dialect is a table lookup.
//!
//! | Variant | bit=1 (µs) | bit=0 (µs) | preamble | checksum nibbles | repeats | gap |
//! |---------|-----------:|-----------:|---------:|-----------------:|--------:|----:|
//! | V1.2    | 366        | 854        | 10       | 2                | 1       | –   |
//! | V1.1    | 610        | 1221       | 16       | 1                | 3       | 100 ms |

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::TxError;

/// Timing and framing parameters of one dialect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariantParams {
    /// Human-readable dialect name
    pub name: &'static str,
    /// Mark (HIGH) duration of a one bit
    pub bit_one_us: u32,
    /// Mark (HIGH) duration of a zero bit
    pub bit_zero_us: u32,
    /// Zero bits sent before the start bit
    pub preamble_bits: usize,
    /// 1 = XOR nibble only, 2 = XOR nibble plus additive check nibble
    pub checksum_nibbles: usize,
    /// How many times each frame goes out
    pub repeat_count: u32,
    /// Pause between repeats
    pub inter_repeat_delay_ms: u32,
    /// Nominal carrier of the matching RF module (fixed by hardware)
    pub carrier_khz: u32,
}

impl VariantParams {
    /// Edge-to-edge period shared by both bit values.
    pub const fn bit_period_us(&self) -> u32 {
        self.bit_one_us + self.bit_zero_us
    }

    /// Mark duration for a bit value.
    pub const fn mark_us(&self, bit: bool) -> u32 {
        if bit {
            self.bit_one_us
        } else {
            self.bit_zero_us
        }
    }

    /// Bits in one frame: preamble, start bit, payload and checksum nibble groups.
    pub const fn frame_bits(&self) -> usize {
        self.preamble_bits + 1 + (PAYLOAD_LEN + self.checksum_nibbles) * NIBBLE_GROUP_BITS
    }

    /// Nominal airtime of one frame in microseconds.
    pub const fn frame_duration_us(&self) -> u64 {
        self.frame_bits() as u64 * self.bit_period_us() as u64
    }

    /// Time spent sending frames across all repeats, the silent gaps
    /// between repeats excluded.
    pub const fn airtime_us(&self) -> u64 {
        self.repeat_count as u64 * self.frame_duration_us()
    }

    /// Nominal time for all repeats including the gaps between them.
    pub const fn transmission_duration_us(&self) -> u64 {
        let repeats = self.repeat_count as u64;
        let gaps = repeats.saturating_sub(1) * self.inter_repeat_delay_ms as u64 * 1_000;
        repeats * self.frame_duration_us() + gaps
    }
}

static VARIANT_TABLE: [VariantParams; 2] = [
    VariantParams {
        name: "V1.2",
        bit_one_us: V1_2_BIT_ONE_US,
        bit_zero_us: V1_2_BIT_ZERO_US,
        preamble_bits: V1_2_PREAMBLE_BITS,
        checksum_nibbles: 2,
        repeat_count: 1,
        inter_repeat_delay_ms: 0,
        carrier_khz: V1_2_CARRIER_KHZ,
    },
    VariantParams {
        name: "V1.1",
        bit_one_us: V1_1_BIT_ONE_US,
        bit_zero_us: V1_1_BIT_ZERO_US,
        preamble_bits: V1_1_PREAMBLE_BITS,
        checksum_nibbles: 1,
        repeat_count: V1_1_REPEAT_COUNT,
        inter_repeat_delay_ms: V1_1_INTER_REPEAT_DELAY_MS,
        carrier_khz: V1_1_CARRIER_KHZ,
    },
];

/// Protocol dialect, selected once at setup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ProtocolVariant {
    /// Current generation, 868.35 MHz, single frame with two check nibbles
    #[default]
    #[serde(rename = "v1.2")]
    V1_2 = 0,
    /// Older generation, 433 MHz class, frame repeated three times
    #[serde(rename = "v1.1")]
    V1_1 = 1,
}

impl ProtocolVariant {
    pub const ALL: [ProtocolVariant; 2] = [ProtocolVariant::V1_2, ProtocolVariant::V1_1];

    /// Parameter row for this dialect.
    pub fn params(self) -> &'static VariantParams {
        &VARIANT_TABLE[self as usize]
    }
}

impl fmt::Display for ProtocolVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.params().name)
    }
}

impl FromStr for ProtocolVariant {
    type Err = TxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "v1.2" | "1.2" | "v12" => Ok(ProtocolVariant::V1_2),
            "v1.1" | "1.1" | "v11" => Ok(ProtocolVariant::V1_1),
            other => Err(TxError::Other(format!(
                "unknown protocol variant '{other}' (expected v1.2 or v1.1)"
            ))),
        }
    }
}
