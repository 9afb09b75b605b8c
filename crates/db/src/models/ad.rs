//! Ad model and DTOs.

use adboard_core::error::CoreError;
use adboard_core::listing::{
    coerce_price, require_text, AD_ADDRESS_MAX, AD_AUTHOR_MAX, AD_DESCRIPTION_MAX, AD_NAME_MAX,
};
use adboard_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `ads` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct Ad {
    pub id: DbId,
    pub name: String,
    pub author: String,
    pub price: i32,
    pub description: String,
    pub address: String,
    pub is_published: bool,
}

/// The subset of ad columns shown in collection listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct AdSummary {
    pub id: DbId,
    pub name: String,
    pub author: String,
    pub price: i32,
}

/// DTO for creating a new ad.
///
/// `price` is kept as a raw JSON value so that both integers and numeric
/// strings (as read from CSV) can be coerced in [`CreateAd::validate`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateAd {
    pub name: Option<String>,
    pub author: Option<String>,
    pub price: Option<serde_json::Value>,
    pub description: Option<String>,
    pub address: Option<String>,
    pub is_published: Option<bool>,
}

/// An ad that passed validation and can be inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAd {
    pub name: String,
    pub author: String,
    pub price: i32,
    pub description: String,
    pub address: String,
    pub is_published: bool,
}

impl CreateAd {
    /// Coerce and check every field. `is_published` defaults to `false`.
    pub fn validate(&self) -> Result<NewAd, CoreError> {
        Ok(NewAd {
            name: require_text("name", self.name.as_deref(), AD_NAME_MAX)?,
            author: require_text("author", self.author.as_deref(), AD_AUTHOR_MAX)?,
            price: coerce_price(self.price.as_ref())?,
            description: require_text(
                "description",
                self.description.as_deref(),
                AD_DESCRIPTION_MAX,
            )?,
            address: require_text("address", self.address.as_deref(), AD_ADDRESS_MAX)?,
            is_published: self.is_published.unwrap_or(false),
        })
    }
}
