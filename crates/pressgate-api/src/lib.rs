//! # pressgate-api
//!
//! The HTTP surface of the Pressgate admin panel: REST endpoints under
//! `/api`, session-gated page routes, and the application wiring that
//! assembles state, background tasks, and the Axum server.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, build_state, run_server};
pub use error::ApiError;
pub use state::AppState;
