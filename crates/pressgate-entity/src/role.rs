//! Role and permission-grant models.
//!
//! These mirror the role claims embedded in session tokens: a role carries
//! a list of per-module grants, and a grant may nest submodule grants with
//! their own action lists.

use serde::{Deserialize, Serialize};

/// A named role with its permission grants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    /// Role name (e.g. `"Employee"`).
    pub name: String,
    /// Per-module permission grants.
    pub permissions: Vec<PermissionGrant>,
}

/// Allowed actions for one module, with optional nested submodules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionGrant {
    /// Module name (e.g. `"blog"`, `"category"`).
    pub module: String,
    /// Allowed actions (e.g. `"read"`, `"write"`, `"delete"`).
    pub permissions: Vec<String>,
    /// Nested submodule grants.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub submodules: Vec<SubmoduleGrant>,
}

/// Allowed actions for a nested submodule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmoduleGrant {
    /// Submodule name.
    pub module: String,
    /// Allowed actions.
    pub permissions: Vec<String>,
}

impl Role {
    /// Build a role from module/action pairs, without submodules.
    pub fn new(name: impl Into<String>, grants: Vec<PermissionGrant>) -> Self {
        Self {
            name: name.into(),
            permissions: grants,
        }
    }
}

impl PermissionGrant {
    /// Build a flat grant for one module.
    pub fn new(module: impl Into<String>, actions: &[&str]) -> Self {
        Self {
            module: module.into(),
            permissions: actions.iter().map(|a| a.to_string()).collect(),
            submodules: Vec::new(),
        }
    }

    /// Whether this grant directly allows the given action.
    pub fn allows(&self, action: &str) -> bool {
        self.permissions.iter().any(|p| p == action)
    }
}
