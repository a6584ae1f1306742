//! # Frame Layout
//!
//! A frame is a flat sequence of bits, each later turned into one pulse:
//!
//! ```text
//! ┌──────────────┐ ┌───────┐ ┌──────────────────────┐ ┌──────────────────┐
//! │ Preamble     │ │ Start │ │ 8 payload nibble     │ │ 1-2 check nibble │
//! │ N zero bits  │ │ 1     │ │ groups               │ │ groups           │
//! └──────────────┘ └───────┘ └──────────────────────┘ └──────────────────┘
//! ```
//!
//! A nibble group is four data bits, least significant first, followed by a
//! stop bit of value 1.

use crate::constants::{NIBBLE_DATA_BITS, NIBBLE_GROUP_BITS, NIBBLE_MASK};
use crate::payload::Payload;
use crate::protocol::variant::ProtocolVariant;

/// Bits of one nibble group: four data bits LSB first, then the stop bit.
pub fn nibble_group(value: u8) -> [bool; NIBBLE_GROUP_BITS] {
    let value = value & NIBBLE_MASK;
    let mut group = [true; NIBBLE_GROUP_BITS];
    for (i, bit) in group.iter_mut().take(NIBBLE_DATA_BITS).enumerate() {
        *bit = (value >> i) & 1 == 1;
    }
    group
}

/// Complete bit sequence for one transmission of a payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    variant: ProtocolVariant,
    bits: Vec<bool>,
}

impl Frame {
    /// Lays out preamble, start bit, payload and check nibble groups.
    pub fn build(payload: &Payload, variant: ProtocolVariant) -> Self {
        let params = variant.params();
        let mut bits = Vec::with_capacity(params.frame_bits());

        bits.extend(std::iter::repeat(false).take(params.preamble_bits));
        bits.push(true);

        for &value in payload.as_bytes() {
            bits.extend_from_slice(&nibble_group(value));
        }

        bits.extend_from_slice(&nibble_group(payload.checksum()));
        if params.checksum_nibbles == 2 {
            bits.extend_from_slice(&nibble_group(payload.sum_check()));
        }

        Frame { variant, bits }
    }

    pub fn variant(&self) -> ProtocolVariant {
        self.variant
    }

    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// The nibble groups following the start bit, payload first.
    pub fn nibble_groups(&self) -> impl Iterator<Item = &[bool]> {
        self.bits[self.variant.params().preamble_bits + 1..].chunks(NIBBLE_GROUP_BITS)
    }

    /// Edge-to-edge airtime of the frame.
    pub fn duration_us(&self) -> u64 {
        self.bits.len() as u64 * u64::from(self.variant.params().bit_period_us())
    }

    /// Time the carrier is keyed on, the sum of all mark durations.
    pub fn mark_time_us(&self) -> u64 {
        let params = self.variant.params();
        self.bits.iter().map(|&b| u64::from(params.mark_us(b))).sum()
    }

    /// Bits as `0`/`1` characters, preamble, start bit and each nibble group
    /// separated by a space.
    pub fn to_bit_string(&self) -> String {
        let preamble = self.variant.params().preamble_bits;
        let mut out = String::with_capacity(self.bits.len() * 2);
        let digit = |b: &bool| if *b { '1' } else { '0' };

        out.extend(self.bits[..preamble].iter().map(digit));
        out.push(' ');
        out.push(digit(&self.bits[preamble]));
        for group in self.nibble_groups() {
            out.push(' ');
            out.extend(group.iter().map(digit));
        }
        out
    }
}
