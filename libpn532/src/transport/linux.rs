// libpn532/src/transport/linux.rs
#![cfg(feature = "i2cdev")]

use std::path::Path;

use i2cdev::core::I2CDevice;
use i2cdev::linux::LinuxI2CDevice;

use crate::constants::PN532_I2C_ADDRESS;
use crate::transport::traits::Transport;
use crate::{Error, Result};

/// PN532 behind a Linux `/dev/i2c-N` character device.
pub struct LinuxI2cTransport {
    dev: LinuxI2CDevice,
}

impl LinuxI2cTransport {
    /// Open the bus at `path` using the default controller address.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::open_with_address(path, PN532_I2C_ADDRESS)
    }

    pub fn open_with_address<P: AsRef<Path>>(path: P, address: u8) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::DeviceNotFound);
        }
        let dev = LinuxI2CDevice::new(path, u16::from(address))
            .map_err(|e| Error::Transport(format!("open {}: {}", path.display(), e)))?;
        log::debug!("opened {} at address {:#04x}", path.display(), address);
        Ok(Self { dev })
    }
}

impl Transport for LinuxI2cTransport {
    fn write(&mut self, data: &[u8], _timeout_ms: u64) -> Result<()> {
        self.dev
            .write(data)
            .map_err(|e| Error::Transport(format!("i2c write: {}", e)))
    }

    fn read(&mut self, buf: &mut [u8], _timeout_ms: u64) -> Result<()> {
        self.dev
            .read(buf)
            .map_err(|e| Error::Transport(format!("i2c read: {}", e)))
    }
}
