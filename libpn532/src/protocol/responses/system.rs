use crate::protocol::parser::array_at;
use crate::types::FirmwareVersion;
use crate::Result;

/// Decode GetFirmwareVersion response data: IC, Ver, Rev, Support
pub fn decode_firmware_version(data: &[u8]) -> Result<FirmwareVersion> {
    let [ic, version, revision, support] = array_at::<4>(data, 0)?;
    Ok(FirmwareVersion::new(ic, version, revision, support))
}
