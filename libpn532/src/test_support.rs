//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize common MockTransport seeding so tests across
//! the crate and the tests/ directory script the same bus transactions.
#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use crate::constants::{PN532_ACK_FRAME, PN532_HEADER_LEN, PN532_STATUS_READY};
use crate::protocol::Frame;
use crate::transport::Transport;
use crate::transport::mock::MockTransport;
use crate::Result;

/// Read transactions the controller serves for one ACK: a ready status
/// sample followed by status + ACK sentinel.
#[doc(hidden)]
pub fn ack_reads() -> Vec<Vec<u8>> {
    let mut ack = vec![PN532_STATUS_READY];
    ack.extend_from_slice(&PN532_ACK_FRAME);
    vec![vec![PN532_STATUS_READY], ack]
}

/// Read transactions for one response frame: a ready status sample, the
/// header (status + start sequence + LEN + LCS) and the remaining bytes.
#[doc(hidden)]
pub fn response_reads(wire: &[u8]) -> Vec<Vec<u8>> {
    let split = PN532_HEADER_LEN.min(wire.len());
    let mut header = vec![PN532_STATUS_READY];
    header.extend_from_slice(&wire[..split]);
    vec![vec![PN532_STATUS_READY], header, wire[split..].to_vec()]
}

/// Queue a full exchange (ACK then the encoded `response`).
#[doc(hidden)]
pub fn seed_exchange(mock: &mut MockTransport, response: &Frame) {
    // Test frames are always small enough to encode
    let wire = response.encode().unwrap_or_default();
    seed_exchange_raw(mock, &wire);
}

/// Queue an ACK followed by arbitrary response bytes (possibly corrupt).
#[doc(hidden)]
pub fn seed_exchange_raw(mock: &mut MockTransport, wire: &[u8]) {
    for r in ack_reads().into_iter().chain(response_reads(wire)) {
        mock.push_read(r);
    }
}

/// Queue the transactions `Device::begin` consumes: the wake
/// GetFirmwareVersion exchange and the SAMConfiguration exchange.
#[doc(hidden)]
pub fn seed_wake_and_sam(mock: &mut MockTransport) {
    seed_exchange(mock, &Frame::response(0x03, &[0x32, 0x01, 0x06, 0x07]));
    seed_exchange(mock, &Frame::response(0x15, &[]));
}

/// Transport delegating into a shared MockTransport so tests can inspect
/// written frames after a Device has taken ownership of the transport.
#[doc(hidden)]
#[derive(Debug, Default, Clone)]
pub struct SharedTransport {
    pub inner: Rc<RefCell<MockTransport>>,
}

impl Transport for SharedTransport {
    fn write(&mut self, data: &[u8], timeout_ms: u64) -> Result<()> {
        self.inner.borrow_mut().write(data, timeout_ms)
    }

    fn read(&mut self, buf: &mut [u8], timeout_ms: u64) -> Result<()> {
        self.inner.borrow_mut().read(buf, timeout_ms)
    }
}
