// libpn532/src/device/mod.rs

pub mod builder;
pub mod config;
pub mod handle;
pub mod link;
pub mod ready;

pub use builder::DeviceBuilder;
pub use config::DriverConfig;
pub use handle::{Device, Initialized, Phase, Uninitialized};
pub use ready::{Readiness, poll_until_ready};
