use libpn532::clock::MockClock;
use libpn532::device::{DeviceBuilder, DriverConfig};
use libpn532::test_support::{SharedTransport, seed_wake_and_sam};
use libpn532::transport::MockTransport;
use libpn532::Error;

use crate::common::helpers::{init_logging, initialized_mock_device};

#[test]
fn begin_transitions_to_initialized() {
    let dev = initialized_mock_device(MockTransport::new()).unwrap();
    assert_eq!(dev.config().uid_capacity, 10);
}

#[test]
fn begin_writes_wake_then_sam() {
    init_logging();
    let shared = SharedTransport::default();
    seed_wake_and_sam(&mut shared.inner.borrow_mut());

    DeviceBuilder::new()
        .with_transport(Box::new(shared.clone()))
        .with_clock(Box::new(MockClock::new(0)))
        .begin()
        .unwrap();

    let inner = shared.inner.borrow();
    assert_eq!(inner.written.len(), 2);
    assert_eq!(inner.written[0][6], 0x02);
    assert_eq!(inner.written[1][6], 0x14);
}

#[test]
fn begin_applies_configured_sam() {
    init_logging();
    let shared = SharedTransport::default();
    seed_wake_and_sam(&mut shared.inner.borrow_mut());
    let sam = libpn532::SamConfig {
        use_irq: false,
        ..Default::default()
    };

    DeviceBuilder::new()
        .with_transport(Box::new(shared.clone()))
        .with_clock(Box::new(MockClock::new(0)))
        .with_config(DriverConfig::default().with_sam(sam))
        .begin()
        .unwrap();

    let inner = shared.inner.borrow();
    assert_eq!(&inner.written[1][7..10], &[0x01, 0x14, 0x00]);
}

#[test]
fn builder_requires_transport() {
    assert!(matches!(
        DeviceBuilder::new().begin(),
        Err(Error::DeviceNotFound)
    ));
}

#[test]
fn failed_sam_configuration_fails_begin() {
    let mut mock = MockTransport::new();
    libpn532::test_support::seed_exchange(
        &mut mock,
        &crate::common::fixtures::firmware_response(),
    );
    // SAMConfiguration answered with the wrong code
    libpn532::test_support::seed_exchange(
        &mut mock,
        &libpn532::protocol::Frame::response(0x03, &[0x32, 0x01, 0x06, 0x07]),
    );
    let err = crate::common::helpers::mock_device(mock).begin().unwrap_err();
    assert!(matches!(
        err,
        Error::ProtocolMismatch {
            expected: 0x15,
            actual: 0x03
        }
    ));
}
