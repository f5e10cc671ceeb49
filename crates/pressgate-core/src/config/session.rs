//! Session gate and cookie configuration.

use serde::{Deserialize, Serialize};

/// Session cookie, route surface, and watcher configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Name of the session cookie.
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,
    /// Path scope of the session cookie.
    #[serde(default = "default_cookie_path")]
    pub cookie_path: String,
    /// Route an unauthenticated visitor is redirected to.
    #[serde(default = "default_entry_route")]
    pub entry_route: String,
    /// Route an authenticated visitor lands on.
    #[serde(default = "default_landing_route")]
    pub landing_route: String,
    /// Routes reachable without a valid session.
    #[serde(default = "default_public_routes")]
    pub public_routes: Vec<String>,
    /// Interval for the session registry expiry sweep, in milliseconds.
    #[serde(default = "default_sweep_interval")]
    pub sweep_interval_ms: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cookie_name: default_cookie_name(),
            cookie_path: default_cookie_path(),
            entry_route: default_entry_route(),
            landing_route: default_landing_route(),
            public_routes: default_public_routes(),
            sweep_interval_ms: default_sweep_interval(),
        }
    }
}

fn default_cookie_name() -> String {
    "token".to_string()
}

fn default_cookie_path() -> String {
    "/".to_string()
}

fn default_entry_route() -> String {
    "/login".to_string()
}

fn default_landing_route() -> String {
    "/blog".to_string()
}

fn default_public_routes() -> Vec<String> {
    vec![
        "/login".to_string(),
        "/register".to_string(),
        "/verify-email".to_string(),
    ]
}

fn default_sweep_interval() -> u64 {
    1000
}
