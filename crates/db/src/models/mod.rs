//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO holding raw, not-yet-coerced input
//! - A validated insert struct produced from the create DTO

pub mod ad;
pub mod category;
