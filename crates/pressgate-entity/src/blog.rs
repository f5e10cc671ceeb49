//! Blog post entity model with block-based rich-text content.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// One block of rich-text content.
///
/// The block editor persists an ordered list of typed blocks; the `value`
/// payload is editor-specific JSON that the server stores opaquely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentBlock {
    /// Block identifier, unique within the post.
    pub id: String,
    /// Block type (e.g. `"paragraph"`, `"heading-one"`, `"image"`).
    #[serde(rename = "type")]
    pub kind: String,
    /// Editor-specific block payload.
    pub value: Value,
    /// Position of the block within the post.
    pub order: u32,
}

/// A blog post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogPost {
    /// Unique post identifier.
    pub id: Uuid,
    /// Post title.
    pub title: String,
    /// Category this post belongs to.
    pub category_id: Uuid,
    /// Rich-text content blocks, ordered by their `order` field.
    pub blocks: Vec<ContentBlock>,
    /// Whether the post is published.
    pub published: bool,
    /// When the post was created.
    pub created_at: DateTime<Utc>,
    /// When the post was last updated.
    pub updated_at: DateTime<Utc>,
}
