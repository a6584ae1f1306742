//! Unit tests for frame layout across both protocol dialects.

use temphygro_tx::protocol::nibble_group;
use temphygro_tx::{Frame, Payload, ProtocolVariant};

fn reference_payload() -> Payload {
    Payload::encode(23.5, 55.0, 2)
}

fn group_value(group: &[bool]) -> u8 {
    group[..4]
        .iter()
        .enumerate()
        .fold(0, |acc, (i, &b)| acc | (u8::from(b) << i))
}

/// Tests the bit count of a V1.2 frame: 10 + 1 + 10 groups of 5.
#[test]
fn test_v1_2_frame_length() {
    let frame = Frame::build(&reference_payload(), ProtocolVariant::V1_2);
    assert_eq!(frame.len(), 61);
    assert_eq!(frame.len(), ProtocolVariant::V1_2.params().frame_bits());
    assert!(!frame.is_empty());
}

/// Tests the bit count of a V1.1 frame: 16 + 1 + 9 groups of 5.
#[test]
fn test_v1_1_frame_length() {
    let frame = Frame::build(&reference_payload(), ProtocolVariant::V1_1);
    assert_eq!(frame.len(), 62);
    assert_eq!(frame.variant(), ProtocolVariant::V1_1);
}

/// Tests that the frame opens with zero preamble bits followed by a one.
#[test]
fn test_preamble_and_start_bit() {
    for variant in ProtocolVariant::ALL {
        let preamble = variant.params().preamble_bits;
        let frame = Frame::build(&reference_payload(), variant);
        assert!(frame.bits()[..preamble].iter().all(|&b| !b));
        assert!(frame.bits()[preamble]);
    }
}

/// Tests that every nibble group ends with a stop bit of 1.
#[test]
fn test_every_group_has_stop_bit() {
    for variant in ProtocolVariant::ALL {
        let frame = Frame::build(&Payload::encode(-0.0, 0.0, 0), variant);
        for group in frame.nibble_groups() {
            assert_eq!(group.len(), 5);
            assert!(group[4]);
        }
    }
}

/// Tests that the groups carry the payload then the check nibbles.
#[test]
fn test_group_contents_v1_2() {
    let payload = reference_payload();
    let frame = Frame::build(&payload, ProtocolVariant::V1_2);
    let values: Vec<u8> = frame.nibble_groups().map(group_value).collect();

    assert_eq!(values, vec![1, 2, 5, 3, 2, 0, 5, 5, 7, 3]);
}

/// Tests that V1.1 omits the additive check nibble.
#[test]
fn test_group_contents_v1_1() {
    let payload = reference_payload();
    let frame = Frame::build(&payload, ProtocolVariant::V1_1);
    let values: Vec<u8> = frame.nibble_groups().map(group_value).collect();

    assert_eq!(values, vec![1, 2, 5, 3, 2, 0, 5, 5, 7]);
}

/// Tests the exact bit sequence of the reference frame.
#[test]
fn test_reference_frame_bits() {
    let frame = Frame::build(&reference_payload(), ProtocolVariant::V1_2);
    assert_eq!(
        frame.to_bit_string(),
        "0000000000 1 10001 01001 10101 11001 01001 00001 10101 10101 11101 11001"
    );
}

/// Tests that the frame bits are exactly the concatenated nibble groups.
#[test]
fn test_bits_match_nibble_groups() {
    let payload = Payload::encode(-5.2, 0.0, 0);
    let frame = Frame::build(&payload, ProtocolVariant::V1_2);

    let mut expected = vec![false; 10];
    expected.push(true);
    for &value in payload.as_bytes() {
        expected.extend_from_slice(&nibble_group(value));
    }
    expected.extend_from_slice(&nibble_group(payload.checksum()));
    expected.extend_from_slice(&nibble_group(payload.sum_check()));

    assert_eq!(frame.bits(), expected.as_slice());
}

/// Tests frame airtime: every bit lasts one full period.
#[test]
fn test_frame_duration() {
    let v12 = Frame::build(&reference_payload(), ProtocolVariant::V1_2);
    assert_eq!(v12.duration_us(), 61 * 1_220);

    let v11 = Frame::build(&reference_payload(), ProtocolVariant::V1_1);
    assert_eq!(v11.duration_us(), 62 * 1_831);
}

/// Tests that carrier-on time counts short marks for ones and long marks for zeros.
#[test]
fn test_mark_time() {
    let frame = Frame::build(&reference_payload(), ProtocolVariant::V1_2);
    let ones = frame.bits().iter().filter(|&&b| b).count() as u64;
    let zeros = frame.len() as u64 - ones;
    assert_eq!(frame.mark_time_us(), ones * 366 + zeros * 854);
}

/// Tests the total transmission length including repeats and gaps.
#[test]
fn test_transmission_duration() {
    assert_eq!(ProtocolVariant::V1_2.params().transmission_duration_us(), 61 * 1_220);
    assert_eq!(
        ProtocolVariant::V1_1.params().transmission_duration_us(),
        3 * 62 * 1_831 + 2 * 100_000
    );
}
