//! The session gate decision logic.

use pressgate_core::config::session::SessionConfig;

use crate::jwt::{Claims, JwtDecoder};

use super::routes::RouteSet;

/// Outcome of gating one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateOutcome {
    /// Render/serve the requested route.
    Allow,
    /// Redirect to the unauthenticated entry route.
    RedirectToEntry {
        /// Whether the stored token must be cleared (invalid or expired).
        clear_token: bool,
    },
    /// Redirect an authenticated visitor away from a public route.
    RedirectToLanding,
}

/// A gate decision together with the decoded claims, when the token was valid.
#[derive(Debug, Clone)]
pub struct GateResolution {
    /// The decision.
    pub outcome: GateOutcome,
    /// Decoded claims for a valid token, `None` otherwise.
    pub claims: Option<Claims>,
}

/// Decides, per request, whether to serve the route or redirect.
///
/// Pure over its inputs: the same pathname and token always produce the
/// same outcome (token expiry is part of token validity).
#[derive(Debug, Clone)]
pub struct SessionGate {
    decoder: JwtDecoder,
    public_routes: RouteSet,
    entry_route: String,
    landing_route: String,
}

impl SessionGate {
    /// Build the gate from session configuration.
    pub fn new(decoder: JwtDecoder, config: &SessionConfig) -> Self {
        Self {
            decoder,
            public_routes: RouteSet::new(&config.public_routes),
            entry_route: config.entry_route.clone(),
            landing_route: config.landing_route.clone(),
        }
    }

    /// The unauthenticated entry route (redirect target).
    pub fn entry_route(&self) -> &str {
        &self.entry_route
    }

    /// The authenticated landing route (redirect target).
    pub fn landing_route(&self) -> &str {
        &self.landing_route
    }

    /// Whether the pathname is reachable without a session.
    pub fn is_public(&self, pathname: &str) -> bool {
        self.public_routes.contains(pathname)
    }

    /// Resolve the gate decision for one request.
    ///
    /// 1. no token and route not public — redirect to entry;
    /// 2. token present but invalid or expired — clear it, redirect to entry;
    /// 3. token valid and route public — redirect to landing;
    /// 4. otherwise — allow.
    pub fn resolve(&self, pathname: &str, token: Option<&str>) -> GateResolution {
        let is_public = self.is_public(pathname);

        let Some(token) = token else {
            let outcome = if is_public {
                GateOutcome::Allow
            } else {
                GateOutcome::RedirectToEntry { clear_token: false }
            };
            return GateResolution {
                outcome,
                claims: None,
            };
        };

        match self.decoder.decode(token) {
            Err(_) => GateResolution {
                outcome: GateOutcome::RedirectToEntry { clear_token: true },
                claims: None,
            },
            Ok(claims) => {
                let outcome = if is_public {
                    GateOutcome::RedirectToLanding
                } else {
                    GateOutcome::Allow
                };
                GateResolution {
                    outcome,
                    claims: Some(claims),
                }
            }
        }
    }
}
