//! Blog post repository.

use chrono::Utc;
use dashmap::DashMap;
use uuid::Uuid;

use pressgate_core::types::daterange::DateRange;
use pressgate_core::types::pagination::{PageRequest, PageResponse};
use pressgate_core::{AppError, AppResult};
use pressgate_entity::blog::{BlogPost, ContentBlock};

/// Filters applied to blog list queries.
#[derive(Debug, Clone, Copy, Default)]
pub struct BlogFilter {
    /// Restrict to posts created within this range (dates inclusive).
    pub created: Option<DateRange>,
    /// Restrict to one category.
    pub category_id: Option<Uuid>,
}

impl BlogFilter {
    fn matches(&self, post: &BlogPost) -> bool {
        if let Some(range) = &self.created {
            if !range.contains(post.created_at.date_naive()) {
                return false;
            }
        }
        if let Some(category_id) = &self.category_id {
            if post.category_id != *category_id {
                return false;
            }
        }
        true
    }
}

/// Blog posts keyed by ID.
#[derive(Debug, Default)]
pub struct BlogRepository {
    posts: DashMap<Uuid, BlogPost>,
}

impl BlogRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create(
        &self,
        title: &str,
        category_id: Uuid,
        blocks: Vec<ContentBlock>,
        published: bool,
    ) -> AppResult<BlogPost> {
        let now = Utc::now();
        let post = BlogPost {
            id: Uuid::new_v4(),
            title: title.trim().to_string(),
            category_id,
            blocks,
            published,
            created_at: now,
            updated_at: now,
        };
        self.posts.insert(post.id, post.clone());
        Ok(post)
    }

    pub fn get(&self, id: &Uuid) -> AppResult<BlogPost> {
        self.posts
            .get(id)
            .map(|p| p.clone())
            .ok_or_else(|| AppError::not_found("Blog post not found"))
    }

    /// Filtered, newest-first page of posts.
    pub fn list(&self, filter: BlogFilter, page: PageRequest) -> PageResponse<BlogPost> {
        let mut matching: Vec<BlogPost> = self
            .posts
            .iter()
            .filter(|p| filter.matches(p))
            .map(|p| p.clone())
            .collect();
        matching.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        let total = matching.len() as u64;
        let items: Vec<BlogPost> = matching
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.limit() as usize)
            .collect();
        PageResponse::new(items, page.page, page.page_size, total)
    }

    pub fn update(
        &self,
        id: &Uuid,
        title: &str,
        category_id: Uuid,
        blocks: Vec<ContentBlock>,
        published: bool,
    ) -> AppResult<BlogPost> {
        let mut post = self
            .posts
            .get_mut(id)
            .ok_or_else(|| AppError::not_found("Blog post not found"))?;
        post.title = title.trim().to_string();
        post.category_id = category_id;
        post.blocks = blocks;
        post.published = published;
        post.updated_at = Utc::now();
        Ok(post.clone())
    }

    pub fn delete(&self, id: &Uuid) -> AppResult<BlogPost> {
        self.posts
            .remove(id)
            .map(|(_, p)| p)
            .ok_or_else(|| AppError::not_found("Blog post not found"))
    }

    /// Whether any post still references the category.
    pub fn category_in_use(&self, category_id: &Uuid) -> bool {
        self.posts.iter().any(|p| p.category_id == *category_id)
    }
}
