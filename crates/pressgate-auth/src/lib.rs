//! # pressgate-auth
//!
//! Session and authorization logic for the Pressgate admin panel.
//!
//! ## Modules
//!
//! - `jwt` — session token creation and validation
//! - `permissions` — permission map derivation from token claims
//! - `gate` — the session gate deciding allow/redirect per route
//! - `session` — session context, active-session registry, expiry watcher
//! - `otp` — one-time-password issue/verify and resend cooldown
//! - `password` — Argon2id hashing and password policy

pub mod gate;
pub mod jwt;
pub mod otp;
pub mod password;
pub mod permissions;
pub mod session;

pub use gate::{GateOutcome, SessionGate};
pub use jwt::{Claims, JwtDecoder, JwtEncoder};
pub use otp::{OtpService, ResendCooldown};
pub use password::{PasswordHasher, PasswordPolicy};
pub use permissions::PermissionMap;
pub use session::{SessionContext, SessionRegistry, SessionWatcher};
