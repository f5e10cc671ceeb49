//! Integration test suite entry point.

mod helpers;

mod auth_test;
mod blog_test;
mod category_test;
mod gate_test;
