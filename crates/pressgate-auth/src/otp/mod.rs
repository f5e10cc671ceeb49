//! One-time-password issue, verification, and resend cooldown.

pub mod cooldown;
pub mod service;

pub use cooldown::ResendCooldown;
pub use service::OtpService;
