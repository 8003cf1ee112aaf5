use libpn532::clock::MockClock;
use libpn532::device::{Device, DriverConfig};
use libpn532::protocol::{Command, Frame, Response};
use libpn532::test_support::{SharedTransport, seed_exchange, seed_exchange_raw};
use libpn532::transport::MockTransport;
use libpn532::{Error, FramingError};

use crate::common::fixtures::{firmware_response, sample_firmware_data, wire};
use crate::common::helpers::mock_device;

#[test]
fn firmware_version_via_mock_device() {
    let mut mock = MockTransport::new();
    seed_exchange(&mut mock, &firmware_response());
    let mut dev = mock_device(mock);

    let v = dev.get_firmware_version().unwrap();
    assert_eq!(v.ic, 0x32);
    assert_eq!(v.version, 0x01);
    assert_eq!(v.revision, 0x06);
    assert_eq!(v.support, 0x07);
    assert_eq!(u32::from(v), u32::from_be_bytes(sample_firmware_data()));
}

#[test]
fn execute_returns_typed_response() {
    let mut mock = MockTransport::new();
    seed_exchange(&mut mock, &firmware_response());
    let mut dev = mock_device(mock);
    let resp = dev.execute(&Command::GetFirmwareVersion, 100).unwrap();
    assert!(matches!(resp, Response::FirmwareVersion(_)));
}

#[test]
fn read_transactions_follow_status_protocol() {
    let shared = SharedTransport::default();
    seed_exchange(&mut shared.inner.borrow_mut(), &firmware_response());
    let mut dev = Device::new(
        Box::new(shared.clone()),
        Box::new(MockClock::new(0)),
        DriverConfig::default(),
    );
    dev.get_firmware_version().unwrap();

    // status, status + ACK, status, status + header, LEN + DCS + postamble
    assert_eq!(shared.inner.borrow().read_requests, vec![1, 7, 1, 6, 8]);
    assert!(shared.inner.borrow().reads.is_empty());
}

#[test]
fn corrupt_response_checksum() {
    let mut mock = MockTransport::new();
    seed_exchange_raw(&mut mock, &wire("00 00 FF 06 FA D5 03 32 01 06 07 00 00"));
    let mut dev = mock_device(mock);
    let err = dev.get_firmware_version().unwrap_err();
    assert!(matches!(
        err,
        Error::Framing(FramingError::DataChecksum { .. })
    ));
}

#[test]
fn error_frame_from_controller() {
    let mut mock = MockTransport::new();
    seed_exchange_raw(&mut mock, &wire("00 00 FF 01 FF 7F 81 00"));
    let mut dev = mock_device(mock);
    assert_eq!(
        dev.get_firmware_version().unwrap_err().framing(),
        Some(&FramingError::ErrorFrame)
    );
}

#[test]
fn oversize_declared_length_rejected_before_body_read() {
    let mut mock = MockTransport::new();
    // LEN=0x30 declares 50 bytes after the header; firmware capacity is 40
    seed_exchange_raw(&mut mock, &wire("00 00 FF 30 D0"));
    let mut dev = mock_device(mock);
    assert!(matches!(
        dev.get_firmware_version(),
        Err(Error::BufferTooSmall {
            needed: 50,
            capacity: 40
        })
    ));
}

#[test]
fn write_failure_is_transport_error() {
    let mut mock = MockTransport::new();
    mock.set_write_failures(1);
    let mut dev = mock_device(mock);
    assert!(matches!(
        dev.get_firmware_version(),
        Err(Error::Transport(_))
    ));
}

#[test]
fn busy_status_before_ack_is_tolerated() {
    let mut mock = MockTransport::new();
    mock.push_read(vec![0x00]);
    mock.push_read(vec![0x00]);
    seed_exchange(&mut mock, &Frame::response(0x03, &sample_firmware_data()));
    let mut dev = mock_device(mock);
    assert!(dev.get_firmware_version().is_ok());
}
