//! # pressgate-core
//!
//! Shared foundation for the Pressgate admin panel backend: the unified
//! error type, layered configuration, and common request/response types.

pub mod config;
pub mod error;
pub mod result;
pub mod types;

pub use error::{AppError, ErrorKind};
pub use result::AppResult;
