//! Category handlers.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use uuid::Uuid;
use validator::Validate;

use pressgate_core::AppError;
use pressgate_entity::category::Category;

use crate::dto::request::CategoryRequest;
use crate::error::ApiError;
use crate::extractors::CurrentUser;
use crate::middleware::permission;
use crate::state::AppState;

const MODULE: &str = "category";

/// GET /api/categories
pub async fn list(
    State(state): State<AppState>,
    user: CurrentUser,
) -> Result<Json<Vec<Category>>, ApiError> {
    permission::ensure(&user.context, MODULE, "read")?;
    Ok(Json(state.category_repo.list()))
}

/// POST /api/categories
pub async fn create(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(req): Json<CategoryRequest>,
) -> Result<(StatusCode, Json<Category>), ApiError> {
    permission::ensure(&user.context, MODULE, "write")?;
    req.validate()?;

    let category = state.category_repo.create(&req.name, req.description)?;
    Ok((StatusCode::CREATED, Json(category)))
}

/// GET /api/categories/{id}
pub async fn get(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<Json<Category>, ApiError> {
    permission::ensure(&user.context, MODULE, "read")?;
    Ok(Json(state.category_repo.get(&id)?))
}

/// PUT /api/categories/{id}
pub async fn update(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<Uuid>,
    Json(req): Json<CategoryRequest>,
) -> Result<Json<Category>, ApiError> {
    permission::ensure(&user.context, MODULE, "edit")?;
    req.validate()?;

    let category = state.category_repo.update(&id, &req.name, req.description)?;
    Ok(Json(category))
}

/// DELETE /api/categories/{id}
///
/// Refused while blog posts still reference the category.
pub async fn delete(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<Json<Category>, ApiError> {
    permission::ensure(&user.context, MODULE, "delete")?;

    if state.blog_repo.category_in_use(&id) {
        return Err(AppError::conflict("Category is still used by blog posts").into());
    }
    Ok(Json(state.category_repo.delete(&id)?))
}
