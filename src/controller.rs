//! # Transmitter Controller
//!
//! Public face of the crate. One controller owns one output line and its
//! edge schedule for the lifetime of the process; the address may change
//! between sends, the dialect is fixed at setup.
//!
//! ```rust
//! use temphygro_tx::radio::hal::{MockClock, MockLine};
//! use temphygro_tx::{ProtocolVariant, TransmitterController};
//!
//! let clock = MockClock::new();
//! let line = MockLine::new(&clock);
//! let mut tx = TransmitterController::setup(line, clock, ProtocolVariant::V1_2)?;
//! tx.set_address(2);
//! let payload = tx.send(23.5, 55.0);
//! assert_eq!(payload.as_bytes(), &[1, 2, 5, 3, 2, 0, 5, 5]);
//! assert_eq!(tx.get_pause(), 175);
//! # Ok::<(), temphygro_tx::TxError>(())
//! ```

use std::time::Duration;

use log::{debug, info, warn};

use crate::constants::{ADDRESS_MASK, MAX_ADDRESS, PAUSE_BASE_SECS};
use crate::error::TxError;
use crate::payload::Payload;
use crate::protocol::ProtocolVariant;
use crate::radio::hal::{Clock, OutputLine};
use crate::radio::modulator::{BitModulator, BitTiming};
use crate::radio::transmitter::FrameTransmitter;

/// Recommended pause in seconds for a sensor address: `177 - (address & 7)`.
pub fn pause_for_address(address: u8) -> u32 {
    PAUSE_BASE_SECS - u32::from(address & ADDRESS_MASK)
}

/// Encodes readings and keys them out on the configured line
#[derive(Debug)]
pub struct TransmitterController<L, C> {
    modulator: BitModulator<L, C>,
    transmitter: FrameTransmitter,
    address: u8,
}

impl<L: OutputLine, C: Clock> TransmitterController<L, C> {
    /// Configures `line` as an output driven LOW and loads the timing of
    /// `variant`. The address starts at 0 and no edge deadline is pending.
    pub fn setup(mut line: L, clock: C, variant: ProtocolVariant) -> Result<Self, TxError> {
        line.configure_as_output()?;
        line.set_low();

        let params = variant.params();
        info!(
            "Transmitter ready: {} ({} kHz), bit 1/0 = {}/{} us, {} repeat(s)",
            params.name, params.carrier_khz, params.bit_one_us, params.bit_zero_us, params.repeat_count
        );

        Ok(Self {
            modulator: BitModulator::new(line, clock, BitTiming::from(params)),
            transmitter: FrameTransmitter::new(variant),
            address: 0,
        })
    }

    /// Sets the address sent with subsequent readings.
    ///
    /// Not validated: only the low three bits reach the wire.
    pub fn set_address(&mut self, address: u8) {
        if address > MAX_ADDRESS {
            warn!(
                "Address {} exceeds 3 bits, {} will be sent",
                address,
                address & ADDRESS_MASK
            );
        }
        debug!("Transmitter address set to {}", address);
        self.address = address;
    }

    pub fn address(&self) -> u8 {
        self.address
    }

    pub fn variant(&self) -> ProtocolVariant {
        self.transmitter.variant()
    }

    /// Payload `send` would transmit for this reading.
    pub fn encode(&self, temperature: f32, humidity: f32) -> Payload {
        Payload::encode(temperature, humidity, self.address)
    }

    /// Encodes and transmits one reading, blocking for the whole
    /// transmission including repeats and gaps.
    ///
    /// Out-of-range values wrap as on the original sensors.
    pub fn send(&mut self, temperature: f32, humidity: f32) -> Payload {
        let payload = self.encode(temperature, humidity);
        self.transmit(&payload);
        payload
    }

    /// Sends a reading with humidity 0.
    pub fn send_temperature(&mut self, temperature: f32) -> Payload {
        self.send(temperature, 0.0)
    }

    /// Like [`send`](Self::send) but refuses readings or an address the
    /// wire format cannot carry. Nothing is transmitted on error.
    pub fn try_send(&mut self, temperature: f32, humidity: f32) -> Result<Payload, TxError> {
        let payload = Payload::try_encode(temperature, humidity, self.address)?;
        self.transmit(&payload);
        Ok(payload)
    }

    /// Recommended pause before the next send, in seconds: `177 - address`.
    ///
    /// Staggers co-channel sensors and keeps the duty cycle low. Advisory,
    /// nothing here enforces it.
    pub fn get_pause(&self) -> u32 {
        pause_for_address(self.address)
    }

    /// [`get_pause`](Self::get_pause) as a `Duration`.
    pub fn pause(&self) -> Duration {
        Duration::from_secs(u64::from(self.get_pause()))
    }

    /// Earliest time the next rising edge may happen.
    pub fn next_edge_deadline(&self) -> Option<u64> {
        self.modulator.next_edge_deadline()
    }

    pub fn line(&self) -> &L {
        self.modulator.line()
    }

    pub fn clock(&self) -> &C {
        self.modulator.clock()
    }

    /// Release the line and clock.
    pub fn into_parts(self) -> (L, C) {
        self.modulator.into_parts()
    }

    fn transmit(&mut self, payload: &Payload) {
        debug!("Sending payload {} [{}]", payload, payload.to_hex());
        self.transmitter.transmit(&mut self.modulator, payload);
    }
}

#[cfg(feature = "raspberry-pi")]
impl TransmitterController<crate::radio::hal::RpiOutputLine, crate::radio::hal::MonotonicClock> {
    /// Sets up a transmitter on a Raspberry Pi GPIO pin (BCM numbering).
    pub fn setup_gpio(pin: u8, variant: ProtocolVariant) -> Result<Self, TxError> {
        let line = crate::radio::hal::RpiOutputLine::new(pin)?;
        Self::setup(line, crate::radio::hal::MonotonicClock::new(), variant)
    }
}
