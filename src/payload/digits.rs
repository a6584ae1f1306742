//! # Digit Packing
//!
//! Measurements travel as one decimal digit per nibble, least-significant
//! digit first. Only three digits are available per value; anything larger
//! silently loses its upper digits.

use crate::constants::DIGITS_PER_VALUE;

/// Converts a reading to tenths, rounding to the nearest tenth.
///
/// Negative and NaN inputs yield 0, infinities saturate.
pub fn to_tenths(value: f32) -> u32 {
    (value * 10.0).round() as u32
}

/// Splits a value into its three lowest decimal digits, least significant first.
///
/// Higher digits are dropped: `1234` packs as `[4, 3, 2]`.
pub fn pack_digits(mut value: u32) -> [u8; DIGITS_PER_VALUE] {
    let mut digits = [0u8; DIGITS_PER_VALUE];
    for digit in digits.iter_mut() {
        *digit = (value % 10) as u8;
        value /= 10;
    }
    digits
}

/// Reassembles digits packed by [`pack_digits`].
pub fn unpack_digits(digits: &[u8]) -> u32 {
    digits
        .iter()
        .rev()
        .fold(0u32, |acc, &d| acc * 10 + u32::from(d))
}
