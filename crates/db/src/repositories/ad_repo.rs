//! Repository for the `ads` table.

use adboard_core::types::DbId;
use sqlx::PgPool;

use crate::models::ad::{Ad, AdSummary, NewAd};

/// Column list shared across full-row queries.
const COLUMNS: &str = "id, name, author, price, description, address, is_published";

/// Columns returned by collection listings.
const SUMMARY_COLUMNS: &str = "id, name, author, price";

/// Provides create and read operations for ads.
pub struct AdRepo;

impl AdRepo {
    /// Insert a new ad, returning the created row.
    pub async fn create(pool: &PgPool, input: &NewAd) -> Result<Ad, sqlx::Error> {
        let query = format!(
            "INSERT INTO ads (name, author, price, description, address, is_published) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Ad>(&query)
            .bind(&input.name)
            .bind(&input.author)
            .bind(input.price)
            .bind(&input.description)
            .bind(&input.address)
            .bind(input.is_published)
            .fetch_one(pool)
            .await
    }

    /// List all ads with every column, in insertion order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Ad>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM ads ORDER BY id ASC");
        sqlx::query_as::<_, Ad>(&query).fetch_all(pool).await
    }

    /// List all ads with only the summary columns, in insertion order.
    pub async fn list_summaries(pool: &PgPool) -> Result<Vec<AdSummary>, sqlx::Error> {
        let query = format!("SELECT {SUMMARY_COLUMNS} FROM ads ORDER BY id ASC");
        sqlx::query_as::<_, AdSummary>(&query).fetch_all(pool).await
    }

    /// Find an ad by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Ad>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM ads WHERE id = $1");
        sqlx::query_as::<_, Ad>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
