use libpn532::clock::MockClock;
use libpn532::device::{Device, DriverConfig};
use libpn532::test_support::SharedTransport;
use libpn532::transport::MockTransport;
use libpn532::Error;

use crate::common::helpers::{init_logging, initialized_mock_device, mock_device};

#[test]
fn never_ready_firmware_times_out() {
    let mut mock = MockTransport::new();
    for _ in 0..200 {
        mock.push_read(vec![0x00]);
    }
    let mut dev = mock_device(mock);
    assert!(matches!(dev.get_firmware_version(), Err(Error::Timeout)));
}

#[test]
fn silent_bus_times_out_every_operation() {
    // No queued reads: every status read fails and counts as busy
    let mut dev = mock_device(MockTransport::new());
    assert!(matches!(dev.get_firmware_version(), Err(Error::Timeout)));
    assert!(matches!(dev.configure_sam(), Err(Error::Timeout)));
    assert!(matches!(
        mock_device(MockTransport::new()).begin(),
        Err(Error::Timeout)
    ));
}

#[test]
fn silent_bus_times_out_target_operations() {
    // begin succeeds, then the controller never reports ready again
    let mut dev = initialized_mock_device(MockTransport::new()).unwrap();
    assert!(matches!(dev.read_passive_target_a(30), Err(Error::Timeout)));
    assert!(matches!(dev.detect_target_a(30), Err(Error::Timeout)));
}

#[test]
fn ack_wait_is_bounded_by_ack_timeout() {
    init_logging();
    let clock = MockClock::new(0);
    let shared = SharedTransport::default();
    let mut dev = Device::new(
        Box::new(shared.clone()),
        Box::new(clock.clone()),
        DriverConfig::default()
            .with_ack_timeout_ms(20)
            .with_poll_interval_ms(1),
    );
    assert!(matches!(dev.get_firmware_version(), Err(Error::Timeout)));
    assert_eq!(clock.peek(), 20);
    // one frame written, then 21 status samples
    let inner = shared.inner.borrow();
    assert_eq!(inner.written.len(), 1);
    assert_eq!(inner.read_requests.len(), 21);
}
