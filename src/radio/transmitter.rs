//! # Frame Transmitter
//!
//! Sends a frame bit by bit through the [`BitModulator`] and applies the
//! dialect's repeat policy. Between repeats the transmitter sleeps for the
//! inter-repeat gap; after each frame the line is forced LOW.

use log::{debug, trace};

use crate::payload::Payload;
use crate::protocol::{Frame, ProtocolVariant};
use crate::radio::hal::{Clock, OutputLine};
use crate::radio::modulator::BitModulator;

/// Frame assembly and repeat policy for one dialect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameTransmitter {
    variant: ProtocolVariant,
}

impl FrameTransmitter {
    pub fn new(variant: ProtocolVariant) -> Self {
        Self { variant }
    }

    pub fn variant(&self) -> ProtocolVariant {
        self.variant
    }

    /// Builds the frame for `payload` and sends it `repeat_count` times.
    ///
    /// Blocks until the last repeat is out. Returns the frame that was sent.
    pub fn transmit<L: OutputLine, C: Clock>(
        &self,
        modulator: &mut BitModulator<L, C>,
        payload: &Payload,
    ) -> Frame {
        let frame = Frame::build(payload, self.variant);
        self.transmit_frame(modulator, &frame);
        frame
    }

    /// Sends an already built frame with the repeat policy of this dialect.
    pub fn transmit_frame<L: OutputLine, C: Clock>(
        &self,
        modulator: &mut BitModulator<L, C>,
        frame: &Frame,
    ) {
        let params = self.variant.params();
        debug!(
            "Transmitting {} frame: {} bits x {} repeat(s)",
            params.name,
            frame.len(),
            params.repeat_count
        );

        for repeat in 0..params.repeat_count {
            if repeat > 0 {
                modulator.pause_ms(u64::from(params.inter_repeat_delay_ms));
            }
            trace!("frame repeat {}/{}", repeat + 1, params.repeat_count);

            for &bit in frame.bits() {
                modulator.emit_bit(bit);
            }
            modulator.force_low();
        }
    }
}
