// libpn532/src/prelude.rs

pub use crate::card::TargetA;
pub use crate::clock::{Clock, MockClock, SystemClock};
pub use crate::device::{Device, DeviceBuilder, DriverConfig, Initialized, Uninitialized};
pub use crate::protocol::{Command, Frame, Response};
pub use crate::transport::{MockTransport, Transport};
pub use crate::{
    Atqa, BaudRate, Error, FirmwareVersion, FramingError, Result, SamConfig, SamMode, Uid,
};

// Re-export small utilities for convenience
pub use crate::utils::{Deadline, bytes_to_hex, bytes_to_hex_spaced, ms, parse_hex};
