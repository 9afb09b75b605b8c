//! Category model.

use adboard_core::error::CoreError;
use adboard_core::listing::{require_text, CATEGORY_NAME_MAX};
use adboard_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `categories` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct Category {
    pub id: DbId,
    pub name: String,
}

/// DTO for creating a new category.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateCategory {
    pub name: Option<String>,
}

/// A category that passed validation and can be inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCategory {
    pub name: String,
}

impl CreateCategory {
    pub fn validate(&self) -> Result<NewCategory, CoreError> {
        Ok(NewCategory {
            name: require_text("name", self.name.as_deref(), CATEGORY_NAME_MAX)?,
        })
    }
}
