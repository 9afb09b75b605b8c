//! Request handlers.
//!
//! Each submodule provides async handler functions (list, create, get_by_id)
//! for a single entity type. Handlers delegate to the corresponding
//! repository in `adboard_db` and map errors via [`AppError`](crate::error::AppError).

pub mod ad;
pub mod category;
