// libpn532/src/protocol/responses/target.rs

use crate::card::TargetA;
use crate::protocol::parser::{array_at, byte_at, slice_at};
use crate::types::{Atqa, Uid};
use crate::{Error, FramingError, Result};

const NB_TG_OFFSET: usize = 0;
const TG_OFFSET: usize = 1;
const ATQA_OFFSET: usize = 2;
const SAK_OFFSET: usize = 4;
const UID_LEN_OFFSET: usize = 5;
const UID_OFFSET: usize = 6;

/// Parse the first ISO14443-A target record from InListPassiveTarget
/// response data (the bytes after the response code):
/// [NbTg] [Tg] [ATQA(2)] [SAK] [UIDLen] [UID...]
///
/// Returns `Ok(None)` when NbTg is zero. `capacity` bounds the number of
/// UID bytes the caller accepts.
pub fn parse_target_a(data: &[u8], capacity: usize) -> Result<Option<TargetA>> {
    let count = byte_at(data, NB_TG_OFFSET)?;
    if count == 0 {
        return Ok(None);
    }

    let target_number = byte_at(data, TG_OFFSET)?;
    let atqa = Atqa::from_bytes(array_at::<2>(data, ATQA_OFFSET)?);
    let sak = byte_at(data, SAK_OFFSET)?;
    let uid_len = byte_at(data, UID_LEN_OFFSET)? as usize;

    if uid_len == 0 {
        return Err(FramingError::EmptyUid.into());
    }
    let remaining = data.len().saturating_sub(UID_OFFSET);
    if uid_len > remaining {
        return Err(FramingError::UidOverrun {
            declared: uid_len,
            remaining,
        }
        .into());
    }
    let capacity = capacity.min(Uid::CAPACITY);
    if uid_len > capacity {
        return Err(Error::BufferTooSmall {
            needed: uid_len,
            capacity,
        });
    }

    let uid = Uid::try_from(slice_at(data, UID_OFFSET, uid_len)?)?;
    Ok(Some(TargetA::new(target_number, atqa, sak, uid)))
}
