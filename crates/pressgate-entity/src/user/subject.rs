//! Subject kind enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of subject a session token represents.
///
/// A `Company` subject is the account owner and is treated as an implicit
/// super-admin: permission checks never consult its role data. Every other
/// subject is an `Employee` and is governed by its role grants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubjectKind {
    /// Account-owning company; bypasses the permission map entirely.
    Company,
    /// Regular employee subject; access derives from role grants.
    #[serde(other)]
    Employee,
}

impl SubjectKind {
    /// Whether this subject bypasses permission checks.
    pub fn is_super_admin(&self) -> bool {
        matches!(self, Self::Company)
    }

    /// Return the kind as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Company => "company",
            Self::Employee => "employee",
        }
    }
}

impl fmt::Display for SubjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
