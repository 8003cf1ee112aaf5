// libpn532/src/protocol/parser.rs

use crate::{FramingError, Result};

/// Ensure the slice has at least `min` bytes.
pub fn ensure_len(data: &[u8], min: usize) -> Result<()> {
    if data.len() < min {
        return Err(FramingError::Truncated {
            expected: min,
            actual: data.len(),
        }
        .into());
    }
    Ok(())
}

/// Return a subslice with bounds checking.
pub fn slice_at(data: &[u8], idx: usize, len: usize) -> Result<&[u8]> {
    ensure_len(data, idx + len)?;
    Ok(&data[idx..idx + len])
}

/// Read a single byte at `idx` with bounds checking.
pub fn byte_at(data: &[u8], idx: usize) -> Result<u8> {
    ensure_len(data, idx + 1)?;
    Ok(data[idx])
}

/// Read a fixed-size array starting at `idx` with bounds checking.
pub fn array_at<const N: usize>(data: &[u8], idx: usize) -> Result<[u8; N]> {
    let s = slice_at(data, idx, N)?;
    let mut out = [0u8; N];
    out.copy_from_slice(s);
    Ok(out)
}
