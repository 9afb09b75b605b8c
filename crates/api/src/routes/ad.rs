//! Route definitions for ads.

use axum::routing::get;
use axum::Router;

use crate::handlers::ad;
use crate::state::AppState;

/// Routes mounted at `/ad`.
///
/// ```text
/// GET  /       -> list
/// POST /       -> create
/// GET  /{id}   -> get_by_id
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(ad::list).post(ad::create))
        .route("/{id}", get(ad::get_by_id))
}
