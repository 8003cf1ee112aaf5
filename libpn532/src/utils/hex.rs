//! Hexadecimal helpers for frame dumps and UID display.
//!
//! Dumps use the datasheet notation (`D5 4B 01`), compact form is lowercase
//! for identifiers (`04a1b2c3`).

use std::fmt::Write;

/// Lowercase hex without separators: `&[0xde, 0xad]` -> `"dead"`
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    bytes.iter().fold(String::with_capacity(bytes.len() * 2), |mut s, b| {
        // writing to a String cannot fail
        let _ = write!(s, "{:02x}", b);
        s
    })
}

/// Uppercase hex with one space between bytes: `&[0xd5, 0x4b]` -> `"D5 4B"`
pub fn bytes_to_hex_spaced(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 3);
    for (i, b) in bytes.iter().enumerate() {
        if i != 0 {
            s.push(' ');
        }
        let _ = write!(s, "{:02X}", b);
    }
    s
}

/// Parse a hex dump such as `"D5 4B 00"` or `"d54b00"` into bytes.
/// ASCII whitespace is ignored.
pub fn parse_hex(s: &str) -> Result<Vec<u8>, String> {
    let digits: Vec<u8> = s.bytes().filter(|c| !c.is_ascii_whitespace()).collect();
    if digits.len() % 2 != 0 {
        return Err("hex string has odd length".to_string());
    }

    digits
        .chunks(2)
        .map(|pair| {
            let text = std::str::from_utf8(pair).map_err(|e| e.to_string())?;
            u8::from_str_radix(text, 16).map_err(|e| format!("invalid hex pair '{}': {}", text, e))
        })
        .collect()
}
