//! Response types for API endpoints.

use serde::{Deserialize, Serialize};

/// Standard API error response body.
///
/// `detail` carries the server-provided text a client surfaces to the user;
/// clients fall back to a generic message when it is absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// Machine-readable error code.
    pub error: String,
    /// Human-readable detail text.
    pub detail: String,
}
