//! Session token creation with configurable signing and TTL.

use chrono::Utc;
use jsonwebtoken::{EncodingKey, Header, encode};
use uuid::Uuid;

use pressgate_core::config::auth::AuthConfig;
use pressgate_core::error::AppError;
use pressgate_entity::user::User;

use super::claims::Claims;

/// A freshly signed session token together with its claims.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    /// The signed compact JWT.
    pub token: String,
    /// The claims embedded in the token.
    pub claims: Claims,
}

/// Creates signed session tokens.
#[derive(Clone)]
pub struct JwtEncoder {
    /// HMAC secret key for signing.
    encoding_key: EncodingKey,
    /// Token TTL in hours.
    ttl_hours: i64,
}

impl std::fmt::Debug for JwtEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtEncoder")
            .field("ttl_hours", &self.ttl_hours)
            .finish()
    }
}

impl JwtEncoder {
    /// Creates a new encoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            ttl_hours: config.jwt_ttl_hours as i64,
        }
    }

    /// Issues a session token for the given user.
    ///
    /// The token carries the user's subject kind, verification state, and
    /// current roles; a fresh `jti` keys it in the session registry.
    pub fn issue(&self, user: &User) -> Result<IssuedToken, AppError> {
        let now = Utc::now();
        let exp = now + chrono::Duration::hours(self.ttl_hours);

        let claims = Claims {
            sub: user.id,
            email: user.email.clone(),
            kind: user.kind,
            is_verified: user.is_verified,
            iat: now.timestamp(),
            exp: exp.timestamp(),
            jti: Uuid::new_v4(),
            roles: if user.roles.is_empty() {
                None
            } else {
                Some(user.roles.clone())
            },
        };

        self.sign(claims)
    }

    /// Signs pre-built claims. Used by tests and token rotation.
    pub fn sign(&self, claims: Claims) -> Result<IssuedToken, AppError> {
        let token = encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to encode session token: {e}")))?;
        Ok(IssuedToken { token, claims })
    }
}
