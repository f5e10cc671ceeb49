//! `CurrentUser` extractor — pulls the session cookie, validates the token
//! against the decoder and the active-session registry, and injects the
//! session context.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::extract::CookieJar;

use pressgate_auth::{Claims, SessionContext};
use pressgate_core::AppError;

use crate::error::ApiError;
use crate::state::AppState;

/// Extracted authenticated user context available in handlers.
///
/// Rejects with 401 when the cookie is missing, the token invalid or
/// expired, or the session no longer active; rejects with 403 when the
/// email address has not been verified yet.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    /// Decoded token claims.
    pub claims: Claims,
    /// Session context with the derived permission map.
    pub context: SessionContext,
}

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        // The jar's rejection is Infallible.
        let jar = match CookieJar::from_request_parts(parts, state).await {
            Ok(jar) => jar,
            Err(never) => match never {},
        };

        let token = jar
            .get(&state.config.session.cookie_name)
            .map(|c| c.value().to_string())
            .ok_or_else(|| AppError::authentication("Missing session cookie"))?;

        let claims = state.jwt_decoder.decode(&token)?;

        if !state.session_registry.contains(&claims.jti) {
            return Err(AppError::authentication("Session is no longer active").into());
        }

        if !claims.is_verified {
            return Err(AppError::authorization("Email address is not verified").into());
        }

        let context = SessionContext::authenticated(claims.clone());
        Ok(CurrentUser { claims, context })
    }
}
