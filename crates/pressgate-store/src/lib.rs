//! # pressgate-store
//!
//! Concurrent in-memory repositories backing the admin panel API. Each
//! repository owns its map and exposes a small CRUD surface; uniqueness
//! constraints are enforced at this layer.

pub mod blog;
pub mod category;
pub mod user;

pub use blog::{BlogFilter, BlogRepository};
pub use category::CategoryRepository;
pub use user::UserRepository;
