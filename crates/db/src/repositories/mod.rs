//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods
//! that accept `&PgPool` as the first argument.

pub mod ad_repo;
pub mod category_repo;

pub use ad_repo::AdRepo;
pub use category_repo::CategoryRepo;
