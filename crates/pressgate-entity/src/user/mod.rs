//! User entity and subject kind.

pub mod model;
pub mod subject;

pub use model::{CreateUser, User};
pub use subject::SubjectKind;
