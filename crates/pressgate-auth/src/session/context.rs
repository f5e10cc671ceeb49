//! Explicit session context passed to the gate and permission checks.

use crate::jwt::Claims;
use crate::permissions::{self, PermissionMap};

/// The current session as seen by one request.
///
/// Holds the decoded claims (if any) and the permission map derived from
/// them. `update` is the single entry point for changing the session; it
/// recomputes the map so the map is always a pure function of the claims.
#[derive(Debug, Clone, Default)]
pub struct SessionContext {
    claims: Option<Claims>,
    permissions: PermissionMap,
}

impl SessionContext {
    /// An unauthenticated context with an empty permission map.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// A context for a validated session.
    pub fn authenticated(claims: Claims) -> Self {
        let mut ctx = Self::default();
        ctx.update(Some(claims));
        ctx
    }

    /// Replace the session. The permission map is recomputed; passing
    /// `None` clears the session and empties the map.
    pub fn update(&mut self, claims: Option<Claims>) {
        self.permissions = match &claims {
            Some(c) => PermissionMap::from_claims(c),
            None => PermissionMap::empty(),
        };
        self.claims = claims;
    }

    /// Decoded claims, if authenticated.
    pub fn claims(&self) -> Option<&Claims> {
        self.claims.as_ref()
    }

    /// The derived permission map.
    pub fn permissions(&self) -> &PermissionMap {
        &self.permissions
    }

    /// Whether this session bypasses permission checks.
    pub fn is_super_admin(&self) -> bool {
        self.permissions.is_super_admin()
    }

    /// Whether this session may perform `action` on `module`.
    ///
    /// True when the permission map allows the pair, or when the
    /// `"Employee"` role's direct or submodule grants allow it.
    pub fn allows(&self, module: &str, action: &str) -> bool {
        if self.permissions.allows(module, action) {
            return true;
        }
        match &self.claims {
            Some(claims) => permissions::employee_submodule_allows(claims, module, action),
            None => false,
        }
    }
}
