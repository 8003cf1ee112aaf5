// libpn532/src/transport/hal.rs
#![cfg(feature = "embedded-hal")]

//! Adapter over any `embedded-hal` 1.0 blocking I2C bus.

use embedded_hal::i2c::{Error as _, I2c};

use crate::constants::PN532_I2C_ADDRESS;
use crate::transport::traits::Transport;
use crate::{Error, Result};

/// PN532 on an `embedded-hal` I2C bus. Timeouts are left to the bus
/// implementation.
pub struct HalTransport<I2C> {
    i2c: I2C,
    address: u8,
}

impl<I2C: I2c> HalTransport<I2C> {
    pub fn new(i2c: I2C) -> Self {
        Self::with_address(i2c, PN532_I2C_ADDRESS)
    }

    pub fn with_address(i2c: I2C, address: u8) -> Self {
        Self { i2c, address }
    }

    /// Give the bus back to the caller
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C: I2c> Transport for HalTransport<I2C> {
    fn write(&mut self, data: &[u8], _timeout_ms: u64) -> Result<()> {
        self.i2c
            .write(self.address, data)
            .map_err(|e| Error::Transport(format!("i2c write: {:?}", e.kind())))
    }

    fn read(&mut self, buf: &mut [u8], _timeout_ms: u64) -> Result<()> {
        self.i2c
            .read(self.address, buf)
            .map_err(|e| Error::Transport(format!("i2c read: {:?}", e.kind())))
    }
}
