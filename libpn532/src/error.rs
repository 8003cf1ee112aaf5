// libpn532/src/error.rs

use thiserror::Error;

/// Structural problems found while validating a frame or a target record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FramingError {
    #[error("status byte {0:#04x} is not ready")]
    NotReady(u8),

    #[error("ack mismatch: got {0:02x?}")]
    AckMismatch([u8; 6]),

    #[error("invalid start sequence: {0:02x?}")]
    StartSequence([u8; 3]),

    #[error("length checksum mismatch: len={len:#04x}, lcs={lcs:#04x}")]
    LengthChecksum { len: u8, lcs: u8 },

    #[error("invalid postamble {0:#04x}")]
    Postamble(u8),

    #[error("controller reported an application error frame")]
    ErrorFrame,

    #[error("frame too short: len={0}")]
    TooShort(u8),

    #[error("unknown frame identifier {0:#04x}")]
    UnknownDirection(u8),

    #[error("unexpected frame direction: expected {expected:#04x}, got {actual:#04x}")]
    Direction { expected: u8, actual: u8 },

    #[error("data checksum mismatch: expected {expected:#04x}, got {actual:#04x}")]
    DataChecksum { expected: u8, actual: u8 },

    #[error("truncated data: expected {expected} bytes, got {actual}")]
    Truncated { expected: usize, actual: usize },

    #[error("unexpected trailing bytes: expected {expected} bytes, got {actual}")]
    TrailingBytes { expected: usize, actual: usize },

    #[error("target reported an empty uid")]
    EmptyUid,

    #[error("uid length {declared} exceeds remaining {remaining} bytes")]
    UidOverrun { declared: usize, remaining: usize },
}

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("device not found")]
    DeviceNotFound,

    #[error("transport error: {0}")]
    Transport(String),

    #[error("operation timed out")]
    Timeout,

    #[error("framing error: {0}")]
    Framing(#[from] FramingError),

    #[error("unexpected response code: expected {expected:#04x}, got {actual:#04x}")]
    ProtocolMismatch { expected: u8, actual: u8 },

    #[error("buffer too small: need {needed} bytes, capacity {capacity}")]
    BufferTooSmall { needed: usize, capacity: usize },
}

impl Error {
    /// Return the framing subtype when this is a framing error.
    pub fn framing(&self) -> Option<&FramingError> {
        match self {
            Error::Framing(f) => Some(f),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
