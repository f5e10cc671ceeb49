//! JWT claims structure carried in session tokens.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use pressgate_entity::role::Role;
use pressgate_entity::user::SubjectKind;

/// Claims payload embedded in every session token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject — the user ID.
    pub sub: Uuid,
    /// Email address of the subject.
    pub email: String,
    /// Subject kind; `"company"` is an implicit super-admin.
    #[serde(rename = "type")]
    pub kind: SubjectKind,
    /// Whether the email address has been verified.
    pub is_verified: bool,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
    /// Token ID, keying the active-session registry.
    pub jti: Uuid,
    /// Role assignments at issuance time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roles: Option<Vec<Role>>,
}

impl Claims {
    /// Whether this subject bypasses the permission map.
    pub fn is_super_admin(&self) -> bool {
        self.kind.is_super_admin()
    }
}
