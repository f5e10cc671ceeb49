//! Category repository.

use chrono::Utc;
use dashmap::DashMap;
use uuid::Uuid;

use pressgate_core::{AppError, AppResult};
use pressgate_entity::category::Category;

/// Categories keyed by ID with case-insensitive unique names.
#[derive(Debug, Default)]
pub struct CategoryRepository {
    categories: DashMap<Uuid, Category>,
}

impl CategoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create(&self, name: &str, description: Option<String>) -> AppResult<Category> {
        let name = name.trim();
        self.ensure_name_free(name, None)?;

        let now = Utc::now();
        let category = Category {
            id: Uuid::new_v4(),
            name: name.to_string(),
            description,
            created_at: now,
            updated_at: now,
        };
        self.categories.insert(category.id, category.clone());
        Ok(category)
    }

    pub fn get(&self, id: &Uuid) -> AppResult<Category> {
        self.categories
            .get(id)
            .map(|c| c.clone())
            .ok_or_else(|| AppError::not_found("Category not found"))
    }

    pub fn exists(&self, id: &Uuid) -> bool {
        self.categories.contains_key(id)
    }

    /// All categories, newest first.
    pub fn list(&self) -> Vec<Category> {
        let mut all: Vec<Category> = self.categories.iter().map(|c| c.clone()).collect();
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        all
    }

    pub fn update(
        &self,
        id: &Uuid,
        name: &str,
        description: Option<String>,
    ) -> AppResult<Category> {
        let name = name.trim();
        self.ensure_name_free(name, Some(id))?;

        let mut category = self
            .categories
            .get_mut(id)
            .ok_or_else(|| AppError::not_found("Category not found"))?;
        category.name = name.to_string();
        category.description = description;
        category.updated_at = Utc::now();
        Ok(category.clone())
    }

    pub fn delete(&self, id: &Uuid) -> AppResult<Category> {
        self.categories
            .remove(id)
            .map(|(_, c)| c)
            .ok_or_else(|| AppError::not_found("Category not found"))
    }

    fn ensure_name_free(&self, name: &str, excluding: Option<&Uuid>) -> AppResult<()> {
        let taken = self.categories.iter().any(|c| {
            c.name.eq_ignore_ascii_case(name) && excluding.map_or(true, |id| c.id != *id)
        });
        if taken {
            return Err(AppError::conflict(format!(
                "Category '{name}' already exists"
            )));
        }
        Ok(())
    }
}
