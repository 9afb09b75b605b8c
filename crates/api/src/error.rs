use adboard_core::error::CoreError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::response::{ErrorBody, StatusBody, INTERNAL_ERROR, NOT_FOUND, WRONG_DATA};

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Every variant collapses to one of three fixed bodies; callers never see
/// field-level detail.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `adboard_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The request body could not be parsed.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// The path segment is not a valid id.
    #[error("Invalid id: {0}")]
    InvalidId(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

/// What an error collapses to on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    WrongData,
    NotFound,
    Internal,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let outcome = match &self {
            AppError::Core(CoreError::NotFound { entity, id }) => {
                tracing::debug!(entity, id, "Entity not found");
                Outcome::NotFound
            }
            AppError::Core(CoreError::Validation(msg)) => {
                tracing::debug!(error = %msg, "Rejected input");
                Outcome::WrongData
            }
            AppError::Database(err) => classify_sqlx_error(err),
            AppError::BadRequest(msg) => {
                tracing::debug!(error = %msg, "Rejected request body");
                Outcome::WrongData
            }
            AppError::InvalidId(msg) => {
                tracing::debug!(error = %msg, "Rejected path id");
                Outcome::NotFound
            }
        };

        match outcome {
            Outcome::WrongData => (
                StatusCode::BAD_REQUEST,
                Json(StatusBody { status: WRONG_DATA }),
            )
                .into_response(),
            Outcome::NotFound => {
                (StatusCode::NOT_FOUND, Json(ErrorBody { error: NOT_FOUND })).into_response()
            }
            Outcome::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorBody {
                    error: INTERNAL_ERROR,
                }),
            )
                .into_response(),
        }
    }
}

/// Classify a sqlx error by SQLSTATE.
///
/// - `RowNotFound` maps to 404.
/// - Class `22` (data exception, e.g. value too long) and class `23`
///   (integrity violation, e.g. NOT NULL or CHECK) map to 400.
/// - Everything else maps to 500 and is logged.
fn classify_sqlx_error(err: &sqlx::Error) -> Outcome {
    match err {
        sqlx::Error::RowNotFound => Outcome::NotFound,
        sqlx::Error::Database(db_err) => {
            let code = db_err.code();
            if matches!(code.as_deref(), Some(c) if c.starts_with("22") || c.starts_with("23")) {
                tracing::debug!(error = %db_err, "Column constraint violated");
                return Outcome::WrongData;
            }
            tracing::error!(error = %db_err, "Database error");
            Outcome::Internal
        }
        other => {
            tracing::error!(error = %other, "Database error");
            Outcome::Internal
        }
    }
}
