// libpn532/src/device/config.rs

use crate::constants::UID_MAX_LEN;
use crate::types::SamConfig;

/// Timing and sizing knobs for a `Device`. Defaults match the controller's
/// datasheet timings on a 100 kHz I2C bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DriverConfig {
    /// Readiness bound while waiting for the ACK frame
    pub ack_timeout_ms: u64,
    /// Readiness bound for responses of GetFirmwareVersion/SAMConfiguration
    pub response_timeout_ms: u64,
    /// Per-transaction timeout handed to the transport
    pub io_timeout_ms: u64,
    /// Pause between two status samples; 0 spins without delay
    pub poll_interval_ms: u64,
    /// Delay before the wake command in `begin`
    pub wake_delay_ms: u64,
    /// Largest command parameter block the bus accepts
    pub max_payload_len: usize,
    /// Largest UID accepted from a target record
    pub uid_capacity: usize,
    pub sam: SamConfig,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            ack_timeout_ms: 50,
            response_timeout_ms: 100,
            io_timeout_ms: 50,
            poll_interval_ms: 1,
            wake_delay_ms: 10,
            max_payload_len: 60,
            uid_capacity: UID_MAX_LEN,
            sam: SamConfig::default(),
        }
    }
}

impl DriverConfig {
    pub fn with_ack_timeout_ms(mut self, ms: u64) -> Self {
        self.ack_timeout_ms = ms;
        self
    }

    pub fn with_response_timeout_ms(mut self, ms: u64) -> Self {
        self.response_timeout_ms = ms;
        self
    }

    pub fn with_io_timeout_ms(mut self, ms: u64) -> Self {
        self.io_timeout_ms = ms;
        self
    }

    pub fn with_poll_interval_ms(mut self, ms: u64) -> Self {
        self.poll_interval_ms = ms;
        self
    }

    pub fn with_wake_delay_ms(mut self, ms: u64) -> Self {
        self.wake_delay_ms = ms;
        self
    }

    pub fn with_max_payload_len(mut self, len: usize) -> Self {
        self.max_payload_len = len;
        self
    }

    /// Clamped to the UID container capacity
    pub fn with_uid_capacity(mut self, capacity: usize) -> Self {
        self.uid_capacity = capacity.min(UID_MAX_LEN);
        self
    }

    pub fn with_sam(mut self, sam: SamConfig) -> Self {
        self.sam = sam;
        self
    }
}
