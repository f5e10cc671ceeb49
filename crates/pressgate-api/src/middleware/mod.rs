//! Request middleware.

pub mod gate;
pub mod permission;
