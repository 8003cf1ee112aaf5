use crate::types::SamConfig;

/// GetFirmwareVersion carries no parameters.
pub fn encode_get_firmware_version() -> Vec<u8> {
    Vec::new()
}

/// SAMConfiguration parameters: Mode, Timeout, IRQ
pub fn encode_sam_configuration(config: SamConfig) -> Vec<u8> {
    config.encode().to_vec()
}
