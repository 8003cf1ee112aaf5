// libpn532/src/device/builder.rs

use crate::clock::{Clock, SystemClock};
use crate::device::config::DriverConfig;
use crate::device::handle::{Device, Initialized, Uninitialized};
use crate::transport::Transport;
use crate::{Error, Result};

/// Helper to construct a Device with optional clock and configuration.
#[derive(Default)]
pub struct DeviceBuilder {
    transport: Option<Box<dyn Transport>>,
    clock: Option<Box<dyn Clock>>,
    config: DriverConfig,
}

impl DeviceBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Provide an already-created transport instance (e.g. MockTransport)
    pub fn with_transport(mut self, transport: Box<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Replace the system clock (tests use `MockClock`)
    pub fn with_clock(mut self, clock: Box<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    pub fn with_config(mut self, config: DriverConfig) -> Self {
        self.config = config;
        self
    }

    /// Consume the builder and return an uninitialized Device.
    /// Requires a transport to be provided; otherwise returns DeviceNotFound.
    pub fn build_uninitialized(self) -> Result<Device<Uninitialized>> {
        let transport = self.transport.ok_or(Error::DeviceNotFound)?;
        let clock = self
            .clock
            .unwrap_or_else(|| Box::new(SystemClock::new()));
        Ok(Device::new(transport, clock, self.config))
    }

    /// Build and run the `begin` sequence.
    pub fn begin(self) -> Result<Device<Initialized>> {
        self.build_uninitialized()?.begin()
    }
}
