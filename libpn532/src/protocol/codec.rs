// libpn532/src/protocol/codec.rs

use crate::Result;

use super::Frame;
use super::commands::Command;
use super::responses::Response;

/// Encode a Command into a full wire frame (start sequence/LCS/TFI/DCS/postamble).
pub fn encode_command_frame(cmd: &Command) -> Result<Vec<u8>> {
    Frame::command(cmd.command_code(), &cmd.encode()).encode()
}

/// Decode a full response frame held in memory and parse it for the
/// given command.
pub fn decode_response_frame(cmd: &Command, frame: &[u8], uid_capacity: usize) -> Result<Response> {
    let frame = Frame::decode(frame)?;
    Response::decode(cmd, &frame, uid_capacity)
}
