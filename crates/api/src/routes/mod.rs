pub mod ad;
pub mod category;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the resource route tree.
///
/// Route hierarchy:
///
/// ```text
/// /ad                  list, create
/// /ad/{id}             get
///
/// /cat                 list, create
/// /cat/{id}            get
/// ```
pub fn resource_routes() -> Router<AppState> {
    Router::new()
        .nest("/ad", ad::router())
        .nest("/cat", category::router())
}
