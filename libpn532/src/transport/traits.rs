// libpn532/src/transport/traits.rs

use crate::Result;

/// Transport trait abstracts bus I/O away from protocol/device logic.
///
/// Each call is one complete bus transaction. On the PN532 polled bus
/// every read transaction starts with the status byte.
pub trait Transport {
    /// Write raw bytes to the controller
    fn write(&mut self, data: &[u8], timeout_ms: u64) -> Result<()>;

    /// Fill `buf` with bytes read from the controller
    fn read(&mut self, buf: &mut [u8], timeout_ms: u64) -> Result<()>;
}

impl<T: Transport + ?Sized> Transport for &mut T {
    fn write(&mut self, data: &[u8], timeout_ms: u64) -> Result<()> {
        (**self).write(data, timeout_ms)
    }

    fn read(&mut self, buf: &mut [u8], timeout_ms: u64) -> Result<()> {
        (**self).read(buf, timeout_ms)
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn write(&mut self, data: &[u8], timeout_ms: u64) -> Result<()> {
        (**self).write(data, timeout_ms)
    }

    fn read(&mut self, buf: &mut [u8], timeout_ms: u64) -> Result<()> {
        (**self).read(buf, timeout_ms)
    }
}
