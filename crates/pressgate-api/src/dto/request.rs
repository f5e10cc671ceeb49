//! Request DTOs with validation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

use pressgate_entity::blog::ContentBlock;

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Email address.
    #[validate(email(message = "A valid email is required"))]
    pub email: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Registration request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Display name.
    #[validate(length(min = 1, max = 100, message = "Name is required"))]
    pub name: String,
    /// Email address.
    #[validate(email(message = "A valid email is required"))]
    pub email: String,
    /// Password (policy-checked separately).
    #[validate(length(min = 8, max = 128))]
    pub password: String,
}

/// OTP verification request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct VerifyOtpRequest {
    /// Email address the code was sent to.
    #[validate(email(message = "A valid email is required"))]
    pub email: String,
    /// The six-digit code.
    #[validate(custom(function = "validate_otp_code"))]
    pub code: String,
}

/// OTP resend request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ResendOtpRequest {
    /// Email address to resend the code to.
    #[validate(email(message = "A valid email is required"))]
    pub email: String,
}

/// Create/update category request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CategoryRequest {
    /// Category name.
    #[validate(length(min = 1, max = 100, message = "Name is required"))]
    pub name: String,
    /// Optional description.
    #[validate(length(max = 500))]
    pub description: Option<String>,
}

/// Create/update blog post request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct BlogRequest {
    /// Post title.
    #[validate(length(min = 1, max = 200, message = "Title is required"))]
    pub title: String,
    /// Category the post belongs to.
    pub category_id: Uuid,
    /// Rich-text content blocks.
    #[serde(default)]
    pub blocks: Vec<ContentBlock>,
    /// Whether to publish immediately.
    #[serde(default)]
    pub published: bool,
}

/// Query parameters for the blog list endpoint.
///
/// Either a named `preset` or explicit `from`/`to` bounds may be given;
/// the preset wins when both are present.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BlogListQuery {
    /// Named date-range preset (e.g. `this_week`).
    pub preset: Option<String>,
    /// Explicit range start.
    pub from: Option<NaiveDate>,
    /// Explicit range end.
    pub to: Option<NaiveDate>,
    /// Restrict to one category.
    pub category_id: Option<Uuid>,
    /// Page number (1-based).
    pub page: Option<u64>,
    /// Items per page.
    pub page_size: Option<u64>,
}

fn validate_otp_code(code: &str) -> Result<(), ValidationError> {
    if code.len() == 6 && code.chars().all(|c| c.is_ascii_digit()) {
        Ok(())
    } else {
        Err(ValidationError::new("otp_code").with_message("Code must be exactly 6 digits".into()))
    }
}
