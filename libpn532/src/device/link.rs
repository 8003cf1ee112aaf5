// libpn532/src/device/link.rs

//! Frame-level I/O on the polled bus: write a command frame, then read and
//! validate the ACK and the response once the controller reports ready.

use crate::clock::Clock;
use crate::constants::{PN532_ACK_FRAME, PN532_HEADER_LEN, PN532_STATUS_READY};
use crate::device::config::DriverConfig;
use crate::device::ready::{Readiness, poll_until_ready, read_status};
use crate::protocol::frame::{self, Frame};
use crate::transport::Transport;
use crate::utils::bytes_to_hex_spaced;
use crate::{Error, FramingError, Result};

/// Write an encoded command frame in one bus transaction.
pub fn send_frame(transport: &mut dyn Transport, wire: &[u8], config: &DriverConfig) -> Result<()> {
    log::debug!("=> {}", bytes_to_hex_spaced(wire));
    transport.write(wire, config.io_timeout_ms)
}

/// Wait for the status byte to report ready, or fail with `Error::Timeout`.
pub fn wait_ready(
    transport: &mut dyn Transport,
    clock: &dyn Clock,
    config: &DriverConfig,
    timeout_ms: u64,
) -> Result<()> {
    let io_timeout_ms = config.io_timeout_ms;
    match poll_until_ready(clock, timeout_ms, config.poll_interval_ms, || {
        read_status(&mut *transport, io_timeout_ms)
    }) {
        Readiness::Ready => Ok(()),
        Readiness::Timeout => Err(Error::Timeout),
    }
}

fn check_status(status: u8) -> Result<()> {
    if status != PN532_STATUS_READY {
        return Err(FramingError::NotReady(status).into());
    }
    Ok(())
}

/// Wait for and validate the ACK frame (status byte + 6 sentinel bytes).
pub fn read_ack(transport: &mut dyn Transport, clock: &dyn Clock, config: &DriverConfig) -> Result<()> {
    wait_ready(transport, clock, config, config.ack_timeout_ms)?;

    let mut buf = [0u8; 1 + PN532_ACK_FRAME.len()];
    transport.read(&mut buf, config.io_timeout_ms)?;
    log::trace!("<= ack {}", bytes_to_hex_spaced(&buf));

    check_status(buf[0])?;
    frame::validate_ack(&buf[1..])
}

/// Wait for a response and read it in two transactions: the header
/// (status + start sequence + LEN + LCS), then LEN bytes, DCS and the
/// postamble. A declared length beyond `capacity` is rejected before the
/// second read.
pub fn read_response(
    transport: &mut dyn Transport,
    clock: &dyn Clock,
    config: &DriverConfig,
    timeout_ms: u64,
    capacity: usize,
) -> Result<Frame> {
    wait_ready(transport, clock, config, timeout_ms)?;

    let mut header = [0u8; 1 + PN532_HEADER_LEN];
    transport.read(&mut header, config.io_timeout_ms)?;
    check_status(header[0])?;
    let len = frame::parse_header(&header[1..])?;

    let needed = frame::body_len(len);
    if needed > capacity {
        return Err(Error::BufferTooSmall { needed, capacity });
    }

    let mut body = vec![0u8; needed];
    transport.read(&mut body, config.io_timeout_ms)?;
    log::debug!(
        "<= {} {}",
        bytes_to_hex_spaced(&header[1..]),
        bytes_to_hex_spaced(&body)
    );
    frame::parse_body(len, &body)
}
