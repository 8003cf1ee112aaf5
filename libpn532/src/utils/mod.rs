//! Utilities for libpn532: small, reusable helpers used across the crate.
//!
//! Hex formatting for frame dumps and clock-based deadlines.

pub mod hex;
pub mod timeout;

pub use hex::*;
pub use timeout::*;
