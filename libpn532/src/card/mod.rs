// libpn532/src/card/mod.rs

use crate::types::{Atqa, Uid};

/// ISO14443-A target found by InListPassiveTarget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetA {
    target_number: u8,
    atqa: Atqa,
    sak: u8,
    uid: Uid,
}

impl TargetA {
    pub fn new(target_number: u8, atqa: Atqa, sak: u8, uid: Uid) -> Self {
        Self {
            target_number,
            atqa,
            sak,
            uid,
        }
    }

    /// Logical number (Tg) the controller assigned to the target
    pub fn target_number(&self) -> u8 {
        self.target_number
    }

    pub fn atqa(&self) -> Atqa {
        self.atqa
    }

    pub fn sak(&self) -> u8 {
        self.sak
    }

    pub fn uid(&self) -> &Uid {
        &self.uid
    }

    pub fn into_uid(self) -> Uid {
        self.uid
    }
}
