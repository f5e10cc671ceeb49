//! Common request/response types shared across crates.

pub mod daterange;
pub mod pagination;
pub mod response;

pub use daterange::{DateRange, RangePreset};
pub use pagination::{PageRequest, PageResponse};
pub use response::ApiErrorResponse;
