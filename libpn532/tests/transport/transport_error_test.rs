use libpn532::transport::{MockTransport, Transport};
use libpn532::Error;

#[test]
fn empty_queue_is_timeout() {
    let mut m = MockTransport::new();
    let mut b = [0u8; 1];
    assert!(matches!(m.read(&mut b, 10), Err(Error::Timeout)));
}

#[test]
fn short_queued_read_is_transport_error() {
    let mut m = MockTransport::new();
    m.push_read(vec![0x01]);
    let mut b = [0u8; 7];
    match m.read(&mut b, 10) {
        Err(Error::Transport(msg)) => assert!(msg.contains("short read")),
        other => panic!("expected transport error, got: {:?}", other),
    }
}

#[test]
fn simulated_failures_are_consumed() {
    let mut m = MockTransport::new();
    m.set_write_failures(1);
    m.set_read_failures(1);
    m.push_read(vec![0x01]);

    assert!(matches!(m.write(&[0x00], 10), Err(Error::Transport(_))));
    assert!(m.write(&[0x00], 10).is_ok());

    let mut b = [0u8; 1];
    assert!(matches!(m.read(&mut b, 10), Err(Error::Transport(_))));
    m.read(&mut b, 10).unwrap();
    assert_eq!(b, [0x01]);
}
