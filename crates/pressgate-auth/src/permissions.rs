//! Permission map derivation from session token claims.
//!
//! The map is a pure function of the claims and is recomputed on every
//! token change; it is never persisted.

use std::collections::HashMap;

use crate::jwt::Claims;

/// Name of the role whose submodule grants are consulted as a fallback.
pub const EMPLOYEE_ROLE: &str = "Employee";

/// Module → allowed-action lookup derived from a token's roles.
///
/// Built by folding over all roles in order; when two roles grant the same
/// module, the later role's action list replaces the earlier one (last
/// write wins, not a union). A `company` subject bypasses the map entirely.
#[derive(Debug, Clone, Default)]
pub struct PermissionMap {
    /// Whether the subject bypasses all checks.
    super_admin: bool,
    /// Module name → allowed actions.
    modules: HashMap<String, Vec<String>>,
}

impl PermissionMap {
    /// An empty map that denies everything.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Derive the map from decoded claims.
    pub fn from_claims(claims: &Claims) -> Self {
        if claims.is_super_admin() {
            return Self {
                super_admin: true,
                modules: HashMap::new(),
            };
        }

        let mut modules = HashMap::new();
        if let Some(roles) = &claims.roles {
            for role in roles {
                for grant in &role.permissions {
                    modules.insert(grant.module.clone(), grant.permissions.clone());
                }
            }
        }

        Self {
            super_admin: false,
            modules,
        }
    }

    /// Whether the subject bypasses permission checks.
    pub fn is_super_admin(&self) -> bool {
        self.super_admin
    }

    /// Allowed actions for a module, if any grant exists.
    pub fn actions(&self, module: &str) -> Option<&[String]> {
        self.modules.get(module).map(|v| v.as_slice())
    }

    /// Whether the map allows the given module/action pair.
    pub fn allows(&self, module: &str, action: &str) -> bool {
        if self.super_admin {
            return true;
        }
        self.modules
            .get(module)
            .map(|actions| actions.iter().any(|a| a == action))
            .unwrap_or(false)
    }

    /// The full module → actions mapping.
    pub fn as_map(&self) -> &HashMap<String, Vec<String>> {
        &self.modules
    }
}

/// Checks the `"Employee"` role's grants for one module/action pair.
///
/// Allows when the module's direct grant carries the action, or when any
/// of the module's nested submodules does (logical OR).
pub fn employee_submodule_allows(claims: &Claims, module: &str, action: &str) -> bool {
    let Some(roles) = &claims.roles else {
        return false;
    };
    let Some(employee) = roles.iter().find(|r| r.name == EMPLOYEE_ROLE) else {
        return false;
    };
    let Some(grant) = employee.permissions.iter().find(|g| g.module == module) else {
        return false;
    };

    if grant.allows(action) {
        return true;
    }

    grant
        .submodules
        .iter()
        .any(|sub| sub.permissions.iter().any(|p| p == action))
}
