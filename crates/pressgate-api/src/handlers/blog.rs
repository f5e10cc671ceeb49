//! Blog post handlers.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use uuid::Uuid;
use validator::Validate;

use pressgate_core::types::daterange::{DateRange, RangePreset};
use pressgate_core::types::pagination::{PageRequest, PageResponse};
use pressgate_core::AppError;
use pressgate_entity::blog::BlogPost;
use pressgate_store::BlogFilter;

use crate::dto::request::{BlogListQuery, BlogRequest};
use crate::error::ApiError;
use crate::extractors::CurrentUser;
use crate::middleware::permission;
use crate::state::AppState;

const MODULE: &str = "blog";

/// GET /api/blogs
///
/// Supports a named date-range preset (resolved against today) or explicit
/// `from`/`to` bounds, plus a category filter and pagination.
pub async fn list(
    State(state): State<AppState>,
    user: CurrentUser,
    Query(query): Query<BlogListQuery>,
) -> Result<Json<PageResponse<BlogPost>>, ApiError> {
    permission::ensure(&user.context, MODULE, "read")?;

    let created = resolve_range(&query)?;
    let filter = BlogFilter {
        created,
        category_id: query.category_id,
    };
    let page = PageRequest::new(
        query.page.unwrap_or(1),
        query.page_size.unwrap_or_else(|| PageRequest::default().page_size),
    );

    Ok(Json(state.blog_repo.list(filter, page)))
}

/// POST /api/blogs
pub async fn create(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(req): Json<BlogRequest>,
) -> Result<(StatusCode, Json<BlogPost>), ApiError> {
    permission::ensure(&user.context, MODULE, "write")?;
    req.validate()?;
    ensure_category(&state, &req.category_id)?;

    let post = state
        .blog_repo
        .create(&req.title, req.category_id, req.blocks, req.published)?;
    Ok((StatusCode::CREATED, Json(post)))
}

/// GET /api/blogs/{id}
pub async fn get(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<Json<BlogPost>, ApiError> {
    permission::ensure(&user.context, MODULE, "read")?;
    Ok(Json(state.blog_repo.get(&id)?))
}

/// PUT /api/blogs/{id}
pub async fn update(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<Uuid>,
    Json(req): Json<BlogRequest>,
) -> Result<Json<BlogPost>, ApiError> {
    permission::ensure(&user.context, MODULE, "edit")?;
    req.validate()?;
    ensure_category(&state, &req.category_id)?;

    let post = state
        .blog_repo
        .update(&id, &req.title, req.category_id, req.blocks, req.published)?;
    Ok(Json(post))
}

/// DELETE /api/blogs/{id}
pub async fn delete(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<Json<BlogPost>, ApiError> {
    permission::ensure(&user.context, MODULE, "delete")?;
    Ok(Json(state.blog_repo.delete(&id)?))
}

fn ensure_category(state: &AppState, id: &Uuid) -> Result<(), ApiError> {
    if !state.category_repo.exists(id) {
        return Err(AppError::validation("Unknown category").into());
    }
    Ok(())
}

fn resolve_range(query: &BlogListQuery) -> Result<Option<DateRange>, ApiError> {
    if let Some(preset) = &query.preset {
        let preset: RangePreset = preset.parse()?;
        return Ok(Some(preset.resolve(Utc::now().date_naive())));
    }
    match (query.from, query.to) {
        (Some(from), Some(to)) => Ok(Some(DateRange::new(from, to))),
        (None, None) => Ok(None),
        _ => Err(AppError::validation("Both 'from' and 'to' are required for a custom range").into()),
    }
}
