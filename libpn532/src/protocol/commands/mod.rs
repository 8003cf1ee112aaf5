// libpn532/src/protocol/commands/mod.rs

pub mod system;
pub mod target;

pub use system::{encode_get_firmware_version, encode_sam_configuration};
pub use target::encode_in_list_passive_target;

use crate::constants::{
    PN532_CMD_GET_FIRMWARE_VERSION, PN532_CMD_INLIST_PASSIVE_TARGET, PN532_CMD_SAM_CONFIGURATION,
};
use crate::types::{BaudRate, SamConfig};

/// High-level Command enum. New commands should be added here and
/// their per-command encoder placed in `protocol::commands::<name>.rs`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    GetFirmwareVersion,
    SamConfiguration(SamConfig),
    InListPassiveTarget { max_targets: u8, baud: BaudRate },
}

impl Command {
    /// Single ISO14443-A target at 106 kbps
    pub fn in_list_passive_target_a() -> Self {
        Self::InListPassiveTarget {
            max_targets: 1,
            baud: BaudRate::TypeA106,
        }
    }

    /// Return the PN532 command code.
    pub fn command_code(&self) -> u8 {
        match self {
            Self::GetFirmwareVersion => PN532_CMD_GET_FIRMWARE_VERSION,
            Self::SamConfiguration(_) => PN532_CMD_SAM_CONFIGURATION,
            Self::InListPassiveTarget { .. } => PN532_CMD_INLIST_PASSIVE_TARGET,
        }
    }

    /// Code the controller answers with (command + 1).
    pub fn response_code(&self) -> u8 {
        self.command_code().wrapping_add(1)
    }

    /// Encode the command parameters (everything after the command code).
    pub fn encode(&self) -> Vec<u8> {
        match self {
            Self::GetFirmwareVersion => encode_get_firmware_version(),
            Self::SamConfiguration(config) => encode_sam_configuration(*config),
            Self::InListPassiveTarget { max_targets, baud } => {
                encode_in_list_passive_target(*max_targets, *baud)
            }
        }
    }

    /// Upper bound on the bytes following a response header (LEN bytes,
    /// DCS and postamble). Responses declaring more are rejected before
    /// the body is read.
    pub fn response_capacity(&self) -> usize {
        match self {
            Self::GetFirmwareVersion => 40,
            Self::SamConfiguration(_) => 16,
            Self::InListPassiveTarget { .. } => 64,
        }
    }
}
