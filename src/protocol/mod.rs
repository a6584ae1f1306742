//! # Protocol Module
//!
//! Wire-level description of the thermo/hygro radio protocol: the dialect
//! parameter table and the frame layout built from a payload.

pub mod frame;
pub mod variant;

pub use frame::{nibble_group, Frame};
pub use variant::{ProtocolVariant, VariantParams};
