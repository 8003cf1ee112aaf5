use libpn532::protocol::frame::{Direction, Frame, validate_ack};
use libpn532::{Error, FramingError};

use crate::common::fixtures::wire;

#[test]
fn decode_firmware_response_capture() {
    let frame = Frame::decode(&wire("00 00 FF 06 FA D5 03 32 01 06 07 E8 00")).unwrap();
    assert_eq!(frame.direction, Direction::ControllerToHost);
    assert_eq!(frame.code, 0x03);
    assert_eq!(frame.data, vec![0x32, 0x01, 0x06, 0x07]);
}

#[test]
fn encode_matches_capture() {
    let frame = Frame::response(0x03, &[0x32, 0x01, 0x06, 0x07]);
    assert_eq!(
        frame.encode().unwrap(),
        wire("00 00 FF 06 FA D5 03 32 01 06 07 E8 00")
    );
}

#[test]
fn corrupt_dcs_is_rejected() {
    let err = Frame::decode(&wire("00 00 FF 06 FA D5 03 32 01 06 07 E9 00")).unwrap_err();
    assert!(matches!(
        err,
        Error::Framing(FramingError::DataChecksum {
            expected: 0xE8,
            actual: 0xE9
        })
    ));
}

#[test]
fn bad_length_checksum_is_rejected() {
    let err = Frame::decode(&wire("00 00 FF 06 FB D5 03 32 01 06 07 E8 00")).unwrap_err();
    assert_eq!(
        err.framing(),
        Some(&FramingError::LengthChecksum {
            len: 0x06,
            lcs: 0xFB
        })
    );
}

#[test]
fn error_frame_is_reported() {
    let err = Frame::decode(&wire("00 00 FF 01 FF 7F 81 00")).unwrap_err();
    assert_eq!(err.framing(), Some(&FramingError::ErrorFrame));
}

#[test]
fn wrong_start_sequence() {
    let err = Frame::decode(&wire("00 FF 00 02 FE D5 03 28 00")).unwrap_err();
    assert!(matches!(
        err.framing(),
        Some(FramingError::StartSequence(_))
    ));
}

#[test]
fn ack_sentinel() {
    assert!(validate_ack(&wire("00 00 FF 00 FF 00")).is_ok());
    // NACK
    let err = validate_ack(&wire("00 00 FF FF 00 00")).unwrap_err();
    assert!(matches!(err.framing(), Some(FramingError::AckMismatch(_))));
}
