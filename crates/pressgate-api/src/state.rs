//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use pressgate_auth::{
    JwtDecoder, JwtEncoder, OtpService, PasswordHasher, PasswordPolicy, SessionGate,
    SessionRegistry,
};
use pressgate_core::config::AppConfig;
use pressgate_store::{BlogRepository, CategoryRepository, UserRepository};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,

    /// JWT token encoder.
    pub jwt_encoder: Arc<JwtEncoder>,
    /// JWT token decoder and validator.
    pub jwt_decoder: Arc<JwtDecoder>,
    /// Password hasher (Argon2).
    pub password_hasher: Arc<PasswordHasher>,
    /// Password acceptance policy.
    pub password_policy: Arc<PasswordPolicy>,
    /// OTP issue/verify service.
    pub otp_service: Arc<OtpService>,
    /// Active-session registry.
    pub session_registry: Arc<SessionRegistry>,
    /// Session gate for page routes.
    pub session_gate: Arc<SessionGate>,

    /// User repository.
    pub user_repo: Arc<UserRepository>,
    /// Category repository.
    pub category_repo: Arc<CategoryRepository>,
    /// Blog post repository.
    pub blog_repo: Arc<BlogRepository>,
}
