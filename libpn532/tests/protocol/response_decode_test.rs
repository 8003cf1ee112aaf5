use libpn532::protocol::codec::decode_response_frame;
use libpn532::protocol::{Command, Response};
use libpn532::{Error, FramingError, SamConfig};

use crate::common::fixtures::{
    no_target_response, sample_uid_bytes, target_response, wire,
};

#[test]
fn decode_target_uid() {
    let bytes = target_response(&sample_uid_bytes()).encode().unwrap();
    match decode_response_frame(&Command::in_list_passive_target_a(), &bytes, 10).unwrap() {
        Response::InListPassiveTarget(Some(target)) => {
            assert_eq!(target.uid().as_bytes(), &sample_uid_bytes());
            assert_eq!(target.sak(), 0x08);
            assert_eq!(target.atqa().as_u16(), 0x0004);
        }
        other => panic!("unexpected response: {:?}", other),
    }
}

#[test]
fn decode_no_target() {
    let bytes = no_target_response().encode().unwrap();
    assert_eq!(
        decode_response_frame(&Command::in_list_passive_target_a(), &bytes, 10).unwrap(),
        Response::InListPassiveTarget(None)
    );
}

#[test]
fn seven_byte_uid_into_small_capacity() {
    let uid = [0x04, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66];
    let bytes = target_response(&uid).encode().unwrap();
    assert!(matches!(
        decode_response_frame(&Command::in_list_passive_target_a(), &bytes, 4),
        Err(Error::BufferTooSmall {
            needed: 7,
            capacity: 4
        })
    ));
}

#[test]
fn sam_response_capture() {
    let resp = decode_response_frame(
        &Command::SamConfiguration(SamConfig::default()),
        &wire("00 00 FF 02 FE D5 15 16 00"),
        10,
    )
    .unwrap();
    assert_eq!(resp, Response::SamConfiguration);
}

#[test]
fn host_frame_is_not_a_response() {
    let bytes = wire("00 00 FF 02 FE D4 03 29 00");
    let err = decode_response_frame(&Command::GetFirmwareVersion, &bytes, 10).unwrap_err();
    assert!(matches!(
        err.framing(),
        Some(FramingError::Direction { .. })
    ));
}
