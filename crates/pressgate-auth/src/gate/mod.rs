//! Session gate: per-route allow/redirect decisions.

pub mod resolve;
pub mod routes;

pub use resolve::{GateOutcome, GateResolution, SessionGate};
pub use routes::{RoutePattern, RouteSet};
