//! Maps CSV rows onto create DTOs and inserts them.

use std::path::{Path, PathBuf};

use adboard_db::models::ad::CreateAd;
use adboard_db::models::category::CreateCategory;
use adboard_db::repositories::{AdRepo, CategoryRepo};
use adboard_db::DbPool;
use serde_json::Value;

use crate::csv::{parse_records, CsvRecord};
use crate::error::SeedError;

/// The only cell text that marks an ad as published.
pub const PUBLISHED_MARKER: &str = "TRUE";

/// Locations of the two seed files.
#[derive(Debug, Clone)]
pub struct SeedPaths {
    pub categories: PathBuf,
    pub ads: PathBuf,
}

/// Rows inserted per table by [`run`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub categories: usize,
    pub ads: usize,
}

/// Load categories, then ads.
pub async fn run(pool: &DbPool, paths: &SeedPaths) -> Result<SeedSummary, SeedError> {
    let categories = load_categories(pool, &paths.categories).await?;
    let ads = load_ads(pool, &paths.ads).await?;
    Ok(SeedSummary { categories, ads })
}

/// Insert one category per row of `path`. Returns the number of rows inserted.
pub async fn load_categories(pool: &DbPool, path: &Path) -> Result<usize, SeedError> {
    let records = read_records(path).await?;

    for record in &records {
        let input = category_from_record(record)
            .validate()
            .map_err(|source| SeedError::InvalidRow {
                path: path.to_path_buf(),
                line: record.line(),
                source,
            })?;
        let category = CategoryRepo::create(pool, &input)
            .await
            .map_err(|source| SeedError::Insert {
                path: path.to_path_buf(),
                line: record.line(),
                source,
            })?;
        tracing::debug!(category_id = category.id, line = record.line(), "Inserted category");
    }

    tracing::info!(path = %path.display(), count = records.len(), "Categories loaded");
    Ok(records.len())
}

/// Insert one ad per row of `path`. Returns the number of rows inserted.
pub async fn load_ads(pool: &DbPool, path: &Path) -> Result<usize, SeedError> {
    let records = read_records(path).await?;

    for record in &records {
        let input = ad_from_record(record)
            .validate()
            .map_err(|source| SeedError::InvalidRow {
                path: path.to_path_buf(),
                line: record.line(),
                source,
            })?;
        let ad = AdRepo::create(pool, &input)
            .await
            .map_err(|source| SeedError::Insert {
                path: path.to_path_buf(),
                line: record.line(),
                source,
            })?;
        tracing::debug!(ad_id = ad.id, line = record.line(), "Inserted ad");
    }

    tracing::info!(path = %path.display(), count = records.len(), "Ads loaded");
    Ok(records.len())
}

async fn read_records(path: &Path) -> Result<Vec<CsvRecord>, SeedError> {
    let text = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| SeedError::Io {
            path: path.to_path_buf(),
            source,
        })?;
    parse_records(&text)
}

/// `true` only for the exact text `TRUE`; `"true"`, `"False"`, empty and
/// missing cells are all `false`.
pub fn is_published(raw: Option<&str>) -> bool {
    raw == Some(PUBLISHED_MARKER)
}

pub fn category_from_record(record: &CsvRecord) -> CreateCategory {
    CreateCategory {
        name: record.get("name").map(str::to_string),
    }
}

/// Cells are passed through as raw strings; `price` is coerced later by
/// [`CreateAd::validate`].
pub fn ad_from_record(record: &CsvRecord) -> CreateAd {
    let text = |column: &str| record.get(column).map(str::to_string);
    CreateAd {
        name: text("name"),
        author: text("author"),
        price: record.get("price").map(|p| Value::String(p.to_string())),
        description: text("description"),
        address: text("address"),
        is_published: Some(is_published(record.get("is_published"))),
    }
}
