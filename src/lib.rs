//! # temphygro-tx - Temperature/Humidity Radio Transmitter
//!
//! The temphygro-tx crate encodes temperature and humidity readings into the
//! on-off-keyed frame format of the ELV S 300 / ASH 2200 family of weather
//! sensors and keys a TX868 (or 433 MHz class) RF module through one GPIO
//! line with microsecond timing. Receivers such as the USB-WDE 1, WS 200/300
//! and IPWE 1 pick the readings up like those of an original sensor.
//!
//! ## Features
//!
//! - Packed-decimal payload encoding with XOR and additive check nibbles
//! - Both protocol generations (V1.2 at 868.35 MHz, V1.1 with triple repeats)
//! - Open-loop, fixed-period bit scheduling on a single output line
//! - Hardware abstraction with a Raspberry Pi backend and a simulated line
//! - Duty cycle helpers and the address-staggered pause heuristic
//! - Support for logging and error handling
//!
//! ## Usage
//!
//! ```toml
//! [dependencies]
//! temphygro-tx = "1.0.0"
//! ```
//!
//! ```rust
//! use temphygro_tx::{Payload, ProtocolVariant, Frame};
//!
//! let payload = Payload::encode(23.5, 55.0, 2);
//! let frame = Frame::build(&payload, ProtocolVariant::V1_2);
//! assert_eq!(frame.len(), 61);
//! ```

pub mod config;
pub mod constants;
pub mod controller;
pub mod error;
pub mod logging;
pub mod payload;
pub mod protocol;
pub mod radio;

pub use crate::config::TransmitterConfig;
pub use crate::controller::TransmitterController;
pub use crate::error::TxError;
pub use crate::logging::{init_logger, log_info};
pub use crate::payload::Payload;
pub use crate::protocol::{Frame, ProtocolVariant, VariantParams};
pub use crate::radio::hal::{Clock, HalError, OutputLine};
