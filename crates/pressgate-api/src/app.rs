//! Application builder — wires state, background tasks, and the server.

use std::sync::Arc;

use axum::Router;
use tokio::sync::watch;

use pressgate_auth::{
    JwtDecoder, JwtEncoder, OtpService, PasswordHasher, PasswordPolicy, SessionGate,
    SessionRegistry, SessionWatcher,
};
use pressgate_core::config::AppConfig;
use pressgate_core::AppError;
use pressgate_store::{BlogRepository, CategoryRepository, UserRepository};

use crate::router::build_router;
use crate::state::AppState;

/// Construct the application state from configuration.
pub fn build_state(config: AppConfig) -> AppState {
    let jwt_decoder = JwtDecoder::new(&config.auth);

    AppState {
        jwt_encoder: Arc::new(JwtEncoder::new(&config.auth)),
        jwt_decoder: Arc::new(jwt_decoder.clone()),
        password_hasher: Arc::new(PasswordHasher::new()),
        password_policy: Arc::new(PasswordPolicy::new(&config.auth)),
        otp_service: Arc::new(OtpService::new(&config.auth)),
        session_registry: Arc::new(SessionRegistry::new()),
        session_gate: Arc::new(SessionGate::new(jwt_decoder, &config.session)),
        user_repo: Arc::new(UserRepository::new()),
        category_repo: Arc::new(CategoryRepository::new()),
        blog_repo: Arc::new(BlogRepository::new()),
        config: Arc::new(config),
    }
}

/// Builds the complete Axum application.
pub fn build_app(state: AppState) -> Router {
    build_router(state)
}

/// Runs the Pressgate server with the given configuration.
///
/// Spawns the session expiry watcher and the OTP cooldown ticker next to
/// the HTTP server; all three stop on the shutdown signal.
pub async fn run_server(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting Pressgate server...");

    let state = build_state(config);
    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    let watcher = SessionWatcher::new(Arc::clone(&state.session_registry), &state.config.session);
    tokio::spawn(watcher.run(shutdown_rx.clone()));
    tokio::spawn(Arc::clone(&state.otp_service).run_ticker(shutdown_rx));

    let addr = format!("{}:{}", state.config.server.host, state.config.server.port);
    let app = build_app(state);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("Pressgate server listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            shutdown_signal().await;
            let _ = shutdown_tx.send(true);
        })
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to install Ctrl+C handler: {e}");
    }
}
