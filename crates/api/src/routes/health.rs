use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::response::{StatusBody, STATUS_OK};
use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Whether the database is reachable.
    pub db_healthy: bool,
}

/// GET / -- fixed liveness answer, independent of request body and headers.
async fn index() -> Json<StatusBody> {
    Json(StatusBody { status: STATUS_OK })
}

/// GET /health -- returns service and database health.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = adboard_db::health_check(&state.pool).await.is_ok();

    let status = if db_healthy { STATUS_OK } else { "degraded" };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
    })
}

/// Mount the root status and health check routes.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health_check))
}
