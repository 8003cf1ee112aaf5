// libpn532/src/protocol/frame.rs

use crate::constants::{
    PN532_ACK_FRAME, PN532_HEADER_LEN, PN532_MAX_PAYLOAD_LEN, PN532_MIN_FRAME_LEN, PN532_POSTAMBLE,
    PN532_START_SEQUENCE, PN532_TFI_DEVICE, PN532_TFI_ERROR, PN532_TFI_HOST,
};
use crate::protocol::checksum::{dcs, lcs, sum};
use crate::{Error, FramingError, Result};

/// Frame identifier (TFI): who sent the frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    HostToController,
    ControllerToHost,
}

impl Direction {
    pub fn tfi(self) -> u8 {
        match self {
            Self::HostToController => PN532_TFI_HOST,
            Self::ControllerToHost => PN532_TFI_DEVICE,
        }
    }

    pub fn from_tfi(tfi: u8) -> Option<Self> {
        match tfi {
            PN532_TFI_HOST => Some(Self::HostToController),
            PN532_TFI_DEVICE => Some(Self::ControllerToHost),
            _ => None,
        }
    }
}

/// PN532 normal information frame.
/// Format: [00 00 FF] [LEN] [LCS] [TFI] [CODE] [DATA(n)] [DCS] [00]
/// LEN counts TFI + CODE + DATA; DCS covers the same bytes.
///
/// `data` never contains TFI, the code or DCS.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub direction: Direction,
    pub code: u8,
    pub data: Vec<u8>,
}

impl Frame {
    /// Host-to-controller command frame
    pub fn command(code: u8, data: &[u8]) -> Self {
        Self {
            direction: Direction::HostToController,
            code,
            data: data.to_vec(),
        }
    }

    /// Controller-to-host response frame
    pub fn response(code: u8, data: &[u8]) -> Self {
        Self {
            direction: Direction::ControllerToHost,
            code,
            data: data.to_vec(),
        }
    }

    /// Encode the frame into its wire representation
    pub fn encode(&self) -> Result<Vec<u8>> {
        if self.data.len() > PN532_MAX_PAYLOAD_LEN {
            return Err(Error::BufferTooSmall {
                needed: self.data.len(),
                capacity: PN532_MAX_PAYLOAD_LEN,
            });
        }

        let len = (2 + self.data.len()) as u8;
        let mut out = Vec::with_capacity(PN532_HEADER_LEN + body_len(len));
        out.extend_from_slice(&PN532_START_SEQUENCE);
        out.push(len);
        out.push(lcs(len));
        out.push(self.direction.tfi());
        out.push(self.code);
        out.extend_from_slice(&self.data);
        out.push(dcs(&out[PN532_HEADER_LEN..]));
        out.push(PN532_POSTAMBLE);
        Ok(out)
    }

    /// Decode a complete frame held in memory, starting at the start sequence.
    pub fn decode(frame: &[u8]) -> Result<Self> {
        if frame.len() < PN532_HEADER_LEN {
            return Err(FramingError::Truncated {
                expected: PN532_HEADER_LEN,
                actual: frame.len(),
            }
            .into());
        }
        let len = parse_header(&frame[..PN532_HEADER_LEN])?;
        parse_body(len, &frame[PN532_HEADER_LEN..])
    }

    /// Check this is the controller's answer to `command_code` and return
    /// the response data.
    pub fn expect_response(&self, command_code: u8) -> Result<&[u8]> {
        if self.direction != Direction::ControllerToHost {
            return Err(FramingError::Direction {
                expected: PN532_TFI_DEVICE,
                actual: self.direction.tfi(),
            }
            .into());
        }
        let expected = command_code.wrapping_add(1);
        if self.code != expected {
            return Err(Error::ProtocolMismatch {
                expected,
                actual: self.code,
            });
        }
        Ok(&self.data)
    }
}

/// Number of bytes following the header for a frame of the given LEN:
/// LEN bytes, DCS and postamble.
pub fn body_len(len: u8) -> usize {
    len as usize + 2
}

fn check_exact_len(expected: usize, actual: usize) -> Result<()> {
    if actual < expected {
        return Err(FramingError::Truncated { expected, actual }.into());
    }
    if actual > expected {
        return Err(FramingError::TrailingBytes { expected, actual }.into());
    }
    Ok(())
}

/// Validate the 5 header bytes (start sequence, LEN, LCS) and return LEN.
pub fn parse_header(header: &[u8]) -> Result<u8> {
    check_exact_len(PN532_HEADER_LEN, header.len())?;

    if header[..3] != PN532_START_SEQUENCE {
        return Err(FramingError::StartSequence([header[0], header[1], header[2]]).into());
    }

    let len = header[3];
    let lcs = header[4];
    if len.wrapping_add(lcs) != 0 {
        return Err(FramingError::LengthChecksum { len, lcs }.into());
    }
    Ok(len)
}

/// Validate the bytes following the header of a frame with the given LEN.
pub fn parse_body(len: u8, body: &[u8]) -> Result<Frame> {
    let required = body_len(len);
    check_exact_len(required, body.len())?;

    let postamble = body[required - 1];
    if postamble != PN532_POSTAMBLE {
        return Err(FramingError::Postamble(postamble).into());
    }

    if len == 1 && body[0] == PN532_TFI_ERROR {
        return Err(FramingError::ErrorFrame.into());
    }

    if len < PN532_MIN_FRAME_LEN {
        return Err(FramingError::TooShort(len).into());
    }

    let covered = &body[..len as usize];
    let dcs_actual = body[len as usize];
    if sum(covered).wrapping_add(dcs_actual) != 0 {
        return Err(FramingError::DataChecksum {
            expected: dcs(covered),
            actual: dcs_actual,
        }
        .into());
    }

    let direction =
        Direction::from_tfi(covered[0]).ok_or(FramingError::UnknownDirection(covered[0]))?;

    Ok(Frame {
        direction,
        code: covered[1],
        data: covered[2..].to_vec(),
    })
}

/// Compare six bytes against the ACK sentinel.
pub fn validate_ack(bytes: &[u8]) -> Result<()> {
    check_exact_len(PN532_ACK_FRAME.len(), bytes.len())?;
    if bytes != PN532_ACK_FRAME {
        let mut got = [0u8; 6];
        got.copy_from_slice(bytes);
        return Err(FramingError::AckMismatch(got).into());
    }
    Ok(())
}
