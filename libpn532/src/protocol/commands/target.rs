use crate::types::BaudRate;

/// InListPassiveTarget parameters: MaxTg, BrTy.
pub fn encode_in_list_passive_target(max_targets: u8, baud: BaudRate) -> Vec<u8> {
    vec![max_targets, baud as u8]
}
