//! Route definitions for the Pressgate HTTP surface.
//!
//! REST endpoints are organized by domain and mounted under `/api`. The
//! admin panel page routes sit next to them and carry the session gate
//! middleware.

use axum::{
    middleware as axum_middleware,
    routing::{delete, get, post, put},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(auth_routes())
        .merge(category_routes())
        .merge(blog_routes())
        .merge(health_routes());

    let cors = build_cors_layer(&state);

    Router::new()
        .nest("/api", api_routes)
        .merge(page_routes(state.clone()))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Auth endpoints: register, login, verify-otp, resend-otp, logout, me
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(handlers::auth::register))
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/verify-otp", post(handlers::auth::verify_otp))
        .route("/auth/resend-otp", post(handlers::auth::resend_otp))
        .route("/auth/logout", post(handlers::auth::logout))
        .route("/auth/me", get(handlers::auth::me))
}

/// Category CRUD
fn category_routes() -> Router<AppState> {
    Router::new()
        .route("/categories", get(handlers::category::list))
        .route("/categories", post(handlers::category::create))
        .route("/categories/{id}", get(handlers::category::get))
        .route("/categories/{id}", put(handlers::category::update))
        .route("/categories/{id}", delete(handlers::category::delete))
}

/// Blog post CRUD and filtered listing
fn blog_routes() -> Router<AppState> {
    Router::new()
        .route("/blogs", get(handlers::blog::list))
        .route("/blogs", post(handlers::blog::create))
        .route("/blogs/{id}", get(handlers::blog::get))
        .route("/blogs/{id}", put(handlers::blog::update))
        .route("/blogs/{id}", delete(handlers::blog::delete))
}

/// Health check endpoint (no auth required)
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health_check))
}

/// Admin panel pages, all behind the session gate.
fn page_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/login", get(handlers::pages::login))
        .route("/register", get(handlers::pages::register))
        .route("/verify-email", get(handlers::pages::verify_email))
        .route("/category", get(handlers::pages::category_list))
        .route("/category/add", get(handlers::pages::category_add))
        .route("/category/edit/{id}", get(handlers::pages::category_edit))
        .route("/blog", get(handlers::pages::blog_list))
        .route("/blog/add", get(handlers::pages::blog_add))
        .route("/blog/edit/{id}", get(handlers::pages::blog_edit))
        .route_layer(axum_middleware::from_fn_with_state(
            state,
            middleware::gate::session_gate,
        ))
}

/// Build CORS layer from configuration
fn build_cors_layer(state: &AppState) -> CorsLayer {
    use http::Method;
    use tower_http::cors::Any;

    let cors_config = &state.config.server.cors;

    let mut cors = CorsLayer::new();

    if cors_config.allowed_origins.contains(&"*".to_string()) {
        cors = cors.allow_origin(Any);
    } else {
        let origins: Vec<http::HeaderValue> = cors_config
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        cors = cors.allow_origin(origins);
    }

    let methods: Vec<Method> = cors_config
        .allowed_methods
        .iter()
        .filter_map(|m| m.parse().ok())
        .collect();
    cors = cors.allow_methods(methods);

    cors.max_age(std::time::Duration::from_secs(
        cors_config.max_age_seconds,
    ))
}
