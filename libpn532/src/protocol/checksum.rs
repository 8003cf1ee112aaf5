// libpn532/src/protocol/checksum.rs

/// Compute Length Checksum (LCS)
/// LCS = 0x100 - length (mod 256)
pub fn lcs(len: u8) -> u8 {
    0u8.wrapping_sub(len)
}

/// Compute Data Checksum (DCS) over TFI, command/response code and data
/// DCS = 0x100 - (sum(bytes) & 0xff)
pub fn dcs(bytes: &[u8]) -> u8 {
    0u8.wrapping_sub(sum(bytes))
}

/// Additive sum of all bytes modulo 256.
pub fn sum(bytes: &[u8]) -> u8 {
    bytes.iter().fold(0u8, |acc, &b| acc.wrapping_add(b))
}
