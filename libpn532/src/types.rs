// libpn532/src/types.rs

use crate::constants::UID_MAX_LEN;
use crate::Error;
use derive_more::Display;
use std::convert::TryFrom;

/// UID of an ISO14443-A target. Bounded container: fixed storage plus an
/// explicit length, never longer than `Uid::CAPACITY`.
///
/// Serialized as a plain byte sequence; deserialization goes through
/// `TryFrom<Vec<u8>>` so the capacity bound holds for decoded values too.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<u8>", into = "Vec<u8>"))]
pub struct Uid {
    bytes: [u8; UID_MAX_LEN],
    len: u8,
}

impl Uid {
    pub const CAPACITY: usize = UID_MAX_LEN;

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len as usize]
    }

    pub fn len(&self) -> usize {
        self.len as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex(self.as_bytes())
    }

    /// Copy the UID into a caller-owned buffer and return the number of
    /// bytes written.
    pub fn copy_to(&self, out: &mut [u8]) -> Result<usize, Error> {
        let n = self.len();
        if out.len() < n {
            return Err(Error::BufferTooSmall {
                needed: n,
                capacity: out.len(),
            });
        }
        out[..n].copy_from_slice(self.as_bytes());
        Ok(n)
    }
}

impl TryFrom<&[u8]> for Uid {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if bytes.len() > Self::CAPACITY {
            return Err(Error::BufferTooSmall {
                needed: bytes.len(),
                capacity: Self::CAPACITY,
            });
        }
        let mut arr = [0u8; UID_MAX_LEN];
        arr[..bytes.len()].copy_from_slice(bytes);
        Ok(Self {
            bytes: arr,
            len: bytes.len() as u8,
        })
    }
}

impl TryFrom<Vec<u8>> for Uid {
    type Error = Error;

    fn try_from(bytes: Vec<u8>) -> Result<Self, Self::Error> {
        Self::try_from(bytes.as_slice())
    }
}

impl From<Uid> for Vec<u8> {
    fn from(uid: Uid) -> Self {
        uid.as_bytes().to_vec()
    }
}

impl AsRef<[u8]> for Uid {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

/// ATQA (SENS_RES) as sent on the wire, two bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Atqa([u8; 2]);

impl Atqa {
    pub fn from_bytes(bytes: [u8; 2]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 2] {
        &self.0
    }

    pub fn as_u16(&self) -> u16 {
        u16::from_be_bytes(self.0)
    }
}

impl std::fmt::Display for Atqa {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&crate::utils::bytes_to_hex(&self.0))
    }
}

/// Firmware identity reported by GetFirmwareVersion.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[display(
    fmt = "PN5{:02x} v{}.{} (support {:#04x})",
    ic,
    version,
    revision,
    support
)]
pub struct FirmwareVersion {
    pub ic: u8,
    pub version: u8,
    pub revision: u8,
    pub support: u8,
}

impl FirmwareVersion {
    pub fn new(ic: u8, version: u8, revision: u8, support: u8) -> Self {
        Self {
            ic,
            version,
            revision,
            support,
        }
    }

    pub fn as_tuple(&self) -> (u8, u8, u8, u8) {
        (self.ic, self.version, self.revision, self.support)
    }
}

/// Packed form `ic << 24 | version << 16 | revision << 8 | support`.
impl From<FirmwareVersion> for u32 {
    fn from(v: FirmwareVersion) -> u32 {
        u32::from_be_bytes([v.ic, v.version, v.revision, v.support])
    }
}

impl From<u32> for FirmwareVersion {
    fn from(packed: u32) -> Self {
        let [ic, version, revision, support] = packed.to_be_bytes();
        Self::new(ic, version, revision, support)
    }
}

/// SAM operating mode
#[repr(u8)]
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SamMode {
    #[default]
    #[display(fmt = "normal")]
    Normal = 0x01,
    #[display(fmt = "virtual-card")]
    VirtualCard = 0x02,
    #[display(fmt = "wired-card")]
    WiredCard = 0x03,
    #[display(fmt = "dual-card")]
    DualCard = 0x04,
}

/// SAMConfiguration parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SamConfig {
    pub mode: SamMode,
    /// Virtual card timeout in units of 50 ms
    pub timeout: u8,
    pub use_irq: bool,
}

impl SamConfig {
    /// Encode as the three SAMConfiguration parameter bytes
    pub fn encode(&self) -> [u8; 3] {
        [self.mode as u8, self.timeout, self.use_irq as u8]
    }
}

impl Default for SamConfig {
    fn default() -> Self {
        Self {
            mode: SamMode::Normal,
            timeout: 0x14,
            use_irq: true,
        }
    }
}

/// InListPassiveTarget baud rate / modulation (BrTy)
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaudRate {
    TypeA106 = 0x00,
    FeliCa212 = 0x01,
    FeliCa424 = 0x02,
    TypeB106 = 0x03,
    Jewel106 = 0x04,
}
