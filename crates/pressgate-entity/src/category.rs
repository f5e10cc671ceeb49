//! Blog category entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A blog category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    /// Unique category identifier.
    pub id: Uuid,
    /// Category name, unique across categories.
    pub name: String,
    /// Optional description shown in the admin list.
    pub description: Option<String>,
    /// When the category was created.
    pub created_at: DateTime<Utc>,
    /// When the category was last updated.
    pub updated_at: DateTime<Utc>,
}
