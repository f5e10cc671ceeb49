//! Authentication configuration.

use serde::{Deserialize, Serialize};

/// Authentication and credential configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for JWT signing (HMAC-SHA256).
    #[serde(default = "default_jwt_secret")]
    pub jwt_secret: String,
    /// Session token TTL in hours.
    #[serde(default = "default_token_ttl")]
    pub jwt_ttl_hours: u64,
    /// One-time-password lifetime in minutes.
    #[serde(default = "default_otp_ttl")]
    pub otp_ttl_minutes: u64,
    /// Cooldown between OTP resend requests, in seconds.
    #[serde(default = "default_otp_cooldown")]
    pub otp_resend_cooldown_seconds: u32,
    /// Minimum password length.
    #[serde(default = "default_password_min")]
    pub password_min_length: usize,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: default_jwt_secret(),
            jwt_ttl_hours: default_token_ttl(),
            otp_ttl_minutes: default_otp_ttl(),
            otp_resend_cooldown_seconds: default_otp_cooldown(),
            password_min_length: default_password_min(),
        }
    }
}

fn default_jwt_secret() -> String {
    "CHANGE_ME_IN_PRODUCTION".to_string()
}

fn default_token_ttl() -> u64 {
    24
}

fn default_otp_ttl() -> u64 {
    10
}

fn default_otp_cooldown() -> u32 {
    60
}

fn default_password_min() -> usize {
    8
}
