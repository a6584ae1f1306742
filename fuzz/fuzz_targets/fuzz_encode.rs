#![no_main]

use libfuzzer_sys::fuzz_target;
use temphygro_tx::{Frame, Payload, ProtocolVariant};

fuzz_target!(|data: &[u8]| {
    if data.len() < 9 {
        return;
    }
    let temperature = f32::from_le_bytes([data[0], data[1], data[2], data[3]]);
    let humidity = f32::from_le_bytes([data[4], data[5], data[6], data[7]]);
    let address = data[8];

    let payload = Payload::encode(temperature, humidity, address);
    assert!(payload.as_bytes().iter().all(|&n| n <= 0x0F));
    assert_eq!(payload.address(), address & 0x07);

    if let Ok(strict) = Payload::try_encode(temperature, humidity, address) {
        assert_eq!(strict, payload);
    }

    for variant in ProtocolVariant::ALL {
        let frame = Frame::build(&payload, variant);
        assert_eq!(frame.len(), variant.params().frame_bits());
        // stop bits
        assert!(frame.nibble_groups().all(|g| g[4]));
    }
});
