//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::role::Role;

use super::subject::SubjectKind;

/// A registered account in the admin panel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Unique email address (login identifier).
    pub email: String,
    /// Argon2 password hash.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Subject kind; `company` bypasses permission checks.
    pub kind: SubjectKind,
    /// Whether the email address has been verified via OTP.
    pub is_verified: bool,
    /// Assigned roles, embedded into issued session tokens.
    pub roles: Vec<Role>,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
    /// When the user was last updated.
    pub updated_at: DateTime<Utc>,
    /// Last successful login time.
    pub last_login_at: Option<DateTime<Utc>>,
}

impl User {
    /// Check if this user bypasses permission checks.
    pub fn is_super_admin(&self) -> bool {
        self.kind.is_super_admin()
    }
}

/// Data required to create a new user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Pre-hashed password.
    pub password_hash: String,
    /// Subject kind.
    pub kind: SubjectKind,
    /// Initial roles.
    pub roles: Vec<Role>,
}
