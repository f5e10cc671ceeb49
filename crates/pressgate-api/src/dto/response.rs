//! Response DTOs.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use pressgate_entity::role::Role;
use pressgate_entity::user::{SubjectKind, User};

/// Simple message response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Human-readable message.
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Public view of a user account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    #[serde(rename = "type")]
    pub kind: SubjectKind,
    pub is_verified: bool,
    pub roles: Vec<Role>,
    pub created_at: DateTime<Utc>,
    pub last_login_at: Option<DateTime<Utc>>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            kind: user.kind,
            is_verified: user.is_verified,
            roles: user.roles,
            created_at: user.created_at,
            last_login_at: user.last_login_at,
        }
    }
}

/// Successful login/verification response. The session token itself is
/// delivered via the cookie, not the body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionResponse {
    /// The authenticated user.
    pub user: UserResponse,
    /// When the session token expires.
    pub expires_at: DateTime<Utc>,
}

/// Registration response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterResponse {
    /// The created (unverified) user.
    pub user: UserResponse,
    /// Seconds until the verification code may be resent.
    pub resend_available_in: u32,
}

/// OTP resend response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResendOtpResponse {
    pub message: String,
    /// Seconds until the next resend is allowed.
    pub resend_available_in: u32,
}

/// Current-session response for `/api/auth/me`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeResponse {
    /// The authenticated user, as embedded in the token.
    pub user: UserResponse,
    /// Module name → allowed actions, derived from the token's roles.
    pub permissions: HashMap<String, Vec<String>>,
    /// Whether the subject bypasses permission checks.
    pub is_super_admin: bool,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    /// Number of active sessions.
    pub active_sessions: usize,
}
