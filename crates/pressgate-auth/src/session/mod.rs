//! Session state: per-request context, active-session registry, and the
//! expiry watcher.

pub mod context;
pub mod registry;
pub mod watcher;

pub use context::SessionContext;
pub use registry::{SessionRecord, SessionRegistry};
pub use watcher::SessionWatcher;
