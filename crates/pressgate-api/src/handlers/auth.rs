//! Auth handlers — register, login, OTP verification, logout, me.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use chrono::{DateTime, Utc};
use validator::Validate;

use pressgate_auth::session::SessionRecord;
use pressgate_core::AppError;
use pressgate_entity::user::{CreateUser, SubjectKind, User};

use crate::dto::request::{LoginRequest, RegisterRequest, ResendOtpRequest, VerifyOtpRequest};
use crate::dto::response::{
    MeResponse, MessageResponse, RegisterResponse, ResendOtpResponse, SessionResponse,
};
use crate::error::ApiError;
use crate::extractors::CurrentUser;
use crate::state::AppState;

/// POST /api/auth/register
///
/// Creates an unverified account and issues a verification code. The first
/// account ever registered becomes the company (super admin) subject.
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<RegisterResponse>), ApiError> {
    req.validate()?;
    state.password_policy.validate(&req.password, &req.email)?;

    let kind = if state.user_repo.count() == 0 {
        SubjectKind::Company
    } else {
        SubjectKind::Employee
    };

    let user = state.user_repo.create(CreateUser {
        name: req.name,
        email: req.email,
        password_hash: state.password_hasher.hash(&req.password)?,
        kind,
        roles: vec![],
    })?;

    let code = state.otp_service.issue(&user.email).await;
    deliver_code(&user.email, &code);

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            user: user.into(),
            resend_available_in: state.config.auth.otp_resend_cooldown_seconds,
        }),
    ))
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(req): Json<LoginRequest>,
) -> Result<(CookieJar, Json<SessionResponse>), ApiError> {
    req.validate()?;

    let user = state
        .user_repo
        .find_by_email(&req.email)
        .ok_or_else(invalid_credentials)?;
    if !state
        .password_hasher
        .verify(&req.password, &user.password_hash)?
    {
        return Err(invalid_credentials().into());
    }

    let user = state.user_repo.record_login(&user.id)?;
    start_session(&state, jar, &user)
}

/// POST /api/auth/verify-otp
///
/// Verifies the emailed code, marks the account verified, and starts a
/// fresh session. Any sessions issued before verification are terminated
/// so stale tokens stop carrying `is_verified: false`.
pub async fn verify_otp(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(req): Json<VerifyOtpRequest>,
) -> Result<(CookieJar, Json<SessionResponse>), ApiError> {
    req.validate()?;
    state.otp_service.verify(&req.email, &req.code).await?;

    let user = state
        .user_repo
        .find_by_email(&req.email)
        .ok_or_else(|| AppError::not_found("No account for this email"))?;
    let user = state.user_repo.set_verified(&user.id)?;
    state.session_registry.remove_for_user(&user.id);

    start_session(&state, jar, &user)
}

/// POST /api/auth/resend-otp
///
/// No-op while the resend countdown is running; once it reaches zero a new
/// code is issued and the countdown restarts.
pub async fn resend_otp(
    State(state): State<AppState>,
    Json(req): Json<ResendOtpRequest>,
) -> Result<Json<ResendOtpResponse>, ApiError> {
    req.validate()?;

    let user = state
        .user_repo
        .find_by_email(&req.email)
        .ok_or_else(|| AppError::not_found("No account for this email"))?;
    if user.is_verified {
        return Err(AppError::validation("Email address is already verified").into());
    }

    let code = state.otp_service.resend(&user.email).await?;
    deliver_code(&user.email, &code);

    Ok(Json(ResendOtpResponse {
        message: "Verification code sent".to_string(),
        resend_available_in: state.config.auth.otp_resend_cooldown_seconds,
    }))
}

/// POST /api/auth/logout
///
/// Ends the session and clears the cookie. Other tabs holding the same
/// token are gated out on their next request.
pub async fn logout(
    State(state): State<AppState>,
    jar: CookieJar,
) -> (CookieJar, Json<MessageResponse>) {
    if let Some(cookie) = jar.get(&state.config.session.cookie_name) {
        if let Ok(claims) = state.jwt_decoder.decode(cookie.value()) {
            state.session_registry.remove(&claims.jti);
        }
    }

    let jar = jar.remove(clear_cookie(&state));
    (jar, Json(MessageResponse::new("Logged out")))
}

/// GET /api/auth/me
pub async fn me(
    State(state): State<AppState>,
    user: CurrentUser,
) -> Result<Json<MeResponse>, ApiError> {
    let account = state
        .user_repo
        .find_by_id(&user.claims.sub)
        .ok_or_else(|| AppError::not_found("Account no longer exists"))?;

    Ok(Json(MeResponse {
        user: account.into(),
        permissions: user.context.permissions().as_map().clone(),
        is_super_admin: user.context.is_super_admin(),
    }))
}

/// Issue a token, register the session, and set the cookie.
fn start_session(
    state: &AppState,
    jar: CookieJar,
    user: &User,
) -> Result<(CookieJar, Json<SessionResponse>), ApiError> {
    let issued = state.jwt_encoder.issue(user)?;
    state
        .session_registry
        .insert(SessionRecord::from_claims(&issued.claims));

    let expires_at =
        DateTime::from_timestamp(issued.claims.exp, 0).unwrap_or_else(Utc::now);
    let jar = jar.add(session_cookie(state, issued.token));

    Ok((
        jar,
        Json(SessionResponse {
            user: user.clone().into(),
            expires_at,
        }),
    ))
}

fn session_cookie(state: &AppState, token: String) -> Cookie<'static> {
    Cookie::build((state.config.session.cookie_name.clone(), token))
        .path(state.config.session.cookie_path.clone())
        .http_only(true)
        .same_site(SameSite::Lax)
        .build()
}

fn clear_cookie(state: &AppState) -> Cookie<'static> {
    Cookie::build((state.config.session.cookie_name.clone(), ""))
        .path(state.config.session.cookie_path.clone())
        .build()
}

fn invalid_credentials() -> AppError {
    AppError::authentication("Invalid email or password")
}

/// Stand-in for outbound email delivery: the code is logged so operators
/// (and integration tests) can pick it up.
fn deliver_code(email: &str, code: &str) {
    tracing::info!(email, code, "Verification code issued");
}
