// libpn532/src/transport/mod.rs

pub mod mock;
pub mod traits;
#[cfg(feature = "embedded-hal")]
pub mod hal;
#[cfg(feature = "i2cdev")]
pub mod linux;

pub use mock::MockTransport;
pub use traits::Transport;
#[cfg(feature = "embedded-hal")]
pub use hal::HalTransport;
#[cfg(feature = "i2cdev")]
pub use linux::LinuxI2cTransport;
