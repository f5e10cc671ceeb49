//! # pressgate-entity
//!
//! Domain entity models for the Pressgate admin panel: users and their
//! subject kind, role/permission grants as carried in session tokens,
//! blog categories, and block-based blog posts.

pub mod blog;
pub mod category;
pub mod role;
pub mod user;

pub use blog::{BlogPost, ContentBlock};
pub use category::Category;
pub use role::{PermissionGrant, Role, SubmoduleGrant};
pub use user::{SubjectKind, User};
