//! HTTP handlers, grouped by domain.

pub mod auth;
pub mod blog;
pub mod category;
pub mod health;
pub mod pages;
