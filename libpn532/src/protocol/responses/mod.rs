// libpn532/src/protocol/responses/mod.rs

pub mod system;
pub mod target;

pub use system::decode_firmware_version;
pub use target::parse_target_a;

use crate::card::TargetA;
use crate::protocol::commands::Command;
use crate::protocol::frame::Frame;
use crate::types::FirmwareVersion;

/// High-level Response enum. Per-command decoders live in
/// `protocol::responses::<name>.rs` and are dispatched here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    FirmwareVersion(FirmwareVersion),
    SamConfiguration,
    /// `None` when the controller found no target
    InListPassiveTarget(Option<TargetA>),
}

impl Response {
    /// Decode a validated response frame for the given command. The frame
    /// direction and response code are checked before the data is parsed.
    /// `uid_capacity` bounds UID bytes accepted from target records.
    pub fn decode(cmd: &Command, frame: &Frame, uid_capacity: usize) -> crate::Result<Self> {
        let data = frame.expect_response(cmd.command_code())?;

        match cmd {
            Command::GetFirmwareVersion => {
                Ok(Self::FirmwareVersion(system::decode_firmware_version(data)?))
            }
            Command::SamConfiguration(_) => Ok(Self::SamConfiguration),
            Command::InListPassiveTarget { .. } => Ok(Self::InListPassiveTarget(
                target::parse_target_a(data, uid_capacity)?,
            )),
        }
    }

    /// Return the response code byte associated with this response variant.
    pub fn response_code(&self) -> u8 {
        match self {
            Response::FirmwareVersion(_) => 0x03,
            Response::SamConfiguration => 0x15,
            Response::InListPassiveTarget(_) => 0x4B,
        }
    }
}
