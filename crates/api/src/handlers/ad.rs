//! Handlers for the `/ad` resource.

use adboard_core::error::CoreError;
use adboard_core::types::DbId;
use adboard_db::models::ad::CreateAd;
use adboard_db::repositories::AdRepo;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::error::{AppError, AppResult};
use crate::extract::{json_body, path_id};
use crate::state::AppState;

/// GET /ad
///
/// List every ad as `{id, name, author, price}`.
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let ads = AdRepo::list_summaries(&state.pool).await?;
    Ok(Json(ads))
}

/// POST /ad
///
/// Create an ad and return the full row.
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<CreateAd>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let input = json_body(payload)?.validate()?;
    let ad = AdRepo::create(&state.pool, &input).await?;
    tracing::info!(ad_id = ad.id, "Ad created");
    Ok((StatusCode::CREATED, Json(ad)))
}

/// GET /ad/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    id: Result<Path<DbId>, PathRejection>,
) -> AppResult<impl IntoResponse> {
    let id = path_id(id)?;
    let ad = AdRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Ad", id }))?;
    Ok(Json(ad))
}
