//! Handlers for the `/cat` resource.

use adboard_core::error::CoreError;
use adboard_core::types::DbId;
use adboard_db::models::category::CreateCategory;
use adboard_db::repositories::CategoryRepo;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::error::{AppError, AppResult};
use crate::extract::{json_body, path_id};
use crate::state::AppState;

/// GET /cat
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let categories = CategoryRepo::list(&state.pool).await?;
    Ok(Json(categories))
}

/// POST /cat
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<CreateCategory>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let input = json_body(payload)?.validate()?;
    let category = CategoryRepo::create(&state.pool, &input).await?;
    tracing::info!(category_id = category.id, "Category created");
    Ok((StatusCode::CREATED, Json(category)))
}

/// GET /cat/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    id: Result<Path<DbId>, PathRejection>,
) -> AppResult<impl IntoResponse> {
    let id = path_id(id)?;
    let category = CategoryRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Category",
            id,
        }))?;
    Ok(Json(category))
}
