pub mod duty_cycle;
pub mod hal;
pub mod modulator;
pub mod transmitter;

pub use duty_cycle::DutyCycleTracker;
pub use modulator::{BitModulator, BitTiming};
pub use transmitter::FrameTransmitter;
