// libpn532/src/constants.rs
//! Common protocol constants used across the crate

/// Frame preamble and start code: 0x00 0x00 0xFF
pub const PN532_START_SEQUENCE: [u8; 3] = [0x00, 0x00, 0xFF];

/// Frame postamble: 0x00
pub const PN532_POSTAMBLE: u8 = 0x00;

/// ACK frame sent by the controller after accepting a command frame
pub const PN532_ACK_FRAME: [u8; 6] = [0x00, 0x00, 0xFF, 0x00, 0xFF, 0x00];

/// Status byte value meaning "a frame is ready to be read"
pub const PN532_STATUS_READY: u8 = 0x01;

/// Header bytes following the status byte: start sequence + LEN + LCS
pub const PN532_HEADER_LEN: usize = 5;

/// Largest parameter block a normal information frame can carry
/// (LEN is one byte and already includes TFI and the command code).
pub const PN532_MAX_PAYLOAD_LEN: usize = 253;

/// Smallest LEN of a normal frame: TFI + command/response code
pub const PN532_MIN_FRAME_LEN: u8 = 2;

/// TFI host->controller (D4) and controller->host (D5)
pub const PN532_TFI_HOST: u8 = 0xD4;
pub const PN532_TFI_DEVICE: u8 = 0xD5;

/// TFI of the controller's application-level error frame
pub const PN532_TFI_ERROR: u8 = 0x7F;

/// Command codes
pub const PN532_CMD_GET_FIRMWARE_VERSION: u8 = 0x02;
pub const PN532_CMD_SAM_CONFIGURATION: u8 = 0x14;
pub const PN532_CMD_INLIST_PASSIVE_TARGET: u8 = 0x4A;

/// Default 7-bit I2C address of the controller
pub const PN532_I2C_ADDRESS: u8 = 0x24;

/// Number of UID bytes a triple-size ISO14443-A UID can carry
pub const UID_MAX_LEN: usize = 10;
// libpn532/src/constants.rs
