//! TX868 / S300 Protocol Constants
//!
//! This module defines constants used by the temperature/humidity radio
//! protocol spoken by ELV-compatible receivers (USB-WDE 1, WS 200/300, IPWE 1).

/// Number of packed-decimal values in every payload
pub const PAYLOAD_LEN: usize = 8;

/// Sensor type tag for a combined thermo/hygro sensor (S 300, ASH 2200)
pub const SENSOR_TYPE_THERMO_HYGRO: u8 = 1;

/// Mask for the 3-bit transmitter address
pub const ADDRESS_MASK: u8 = 0x07;

/// Highest encodable transmitter address
pub const MAX_ADDRESS: u8 = 7;

/// Sign flag in the address byte, set for temperatures below zero
pub const SIGN_FLAG: u8 = 0x08;

/// Mask for the data bits of a nibble group
pub const NIBBLE_MASK: u8 = 0x0F;

/// Data bits per nibble group (sent LSB first)
pub const NIBBLE_DATA_BITS: usize = 4;

/// Data bits plus the trailing stop bit
pub const NIBBLE_GROUP_BITS: usize = NIBBLE_DATA_BITS + 1;

/// Number of decimal digits per measurement
pub const DIGITS_PER_VALUE: usize = 3;

/// Largest magnitude (in tenths) that fits in three decimal digits
pub const MAX_TENTHS: u32 = 999;

/// Offset added to the additive check nibble
pub const SUM_CHECK_OFFSET: u8 = 5;

// ----------------------------------------------------------------------------
// Pause heuristic
// ----------------------------------------------------------------------------

/// Base pause between transmissions in seconds; the address is subtracted
/// so co-channel sensors drift apart instead of colliding repeatedly
pub const PAUSE_BASE_SECS: u32 = 177;

// ----------------------------------------------------------------------------
// V1.2 timing (868.35 MHz, default)
// ----------------------------------------------------------------------------

pub const V1_2_BIT_ONE_US: u32 = 366;
pub const V1_2_BIT_ZERO_US: u32 = 854;
pub const V1_2_PREAMBLE_BITS: usize = 10;
pub const V1_2_CARRIER_KHZ: u32 = 868_350;

// ----------------------------------------------------------------------------
// V1.1 timing (433 MHz class modules)
// ----------------------------------------------------------------------------

pub const V1_1_BIT_ONE_US: u32 = 610;
pub const V1_1_BIT_ZERO_US: u32 = 1221;
pub const V1_1_PREAMBLE_BITS: usize = 16;
pub const V1_1_REPEAT_COUNT: u32 = 3;
pub const V1_1_INTER_REPEAT_DELAY_MS: u32 = 100;
pub const V1_1_CARRIER_KHZ: u32 = 433_920;
