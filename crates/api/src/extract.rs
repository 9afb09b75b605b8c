//! Helpers that turn axum extractor rejections into [`AppError`]s.
//!
//! Handlers take `Result<Json<T>, JsonRejection>` / `Result<Path<T>, PathRejection>`
//! so that a malformed body or id never produces axum's default plain-text
//! rejection.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::Path;
use axum::Json;

use crate::error::{AppError, AppResult};

/// Unwrap a JSON body, mapping any rejection (syntax, content type, field
/// types) to [`AppError::BadRequest`].
pub fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> AppResult<T> {
    payload
        .map(|Json(body)| body)
        .map_err(|rejection| AppError::BadRequest(rejection.body_text()))
}

/// Unwrap a path id, mapping a non-numeric segment to [`AppError::InvalidId`].
pub fn path_id<T>(id: Result<Path<T>, PathRejection>) -> AppResult<T> {
    id.map(|Path(id)| id)
        .map_err(|rejection| AppError::InvalidId(rejection.body_text()))
}
