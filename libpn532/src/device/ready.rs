// libpn532/src/device/ready.rs

//! Readiness polling over the in-band status byte.

use crate::clock::Clock;
use crate::constants::PN532_STATUS_READY;
use crate::transport::Transport;
use crate::utils::Deadline;
use crate::Result;

/// Outcome of a readiness wait. Neither variant is an error by itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Readiness {
    Ready,
    Timeout,
}

/// Sample `sample` until it yields the ready status or `timeout_ms` has
/// elapsed on `clock`. At least one sample is always taken. A failed
/// sample counts as "not ready": the controller does not acknowledge its
/// address while it is busy.
pub fn poll_until_ready<F>(
    clock: &dyn Clock,
    timeout_ms: u64,
    interval_ms: u64,
    mut sample: F,
) -> Readiness
where
    F: FnMut() -> Result<u8>,
{
    let deadline = Deadline::start(clock, timeout_ms);
    loop {
        match sample() {
            Ok(PN532_STATUS_READY) => return Readiness::Ready,
            Ok(status) => log::trace!("status {:#04x}, not ready", status),
            Err(e) => log::trace!("status read failed: {}", e),
        }
        if deadline.expired(clock) {
            return Readiness::Timeout;
        }
        if interval_ms > 0 {
            clock.delay_ms(interval_ms);
        }
    }
}

/// Read the single status byte.
pub fn read_status(transport: &mut dyn Transport, io_timeout_ms: u64) -> Result<u8> {
    let mut status = [0u8; 1];
    transport.read(&mut status, io_timeout_ms)?;
    Ok(status[0])
}
