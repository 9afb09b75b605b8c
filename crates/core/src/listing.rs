//! Column limits and insert-time coercion for ads and categories.
//!
//! Both the HTTP layer and the CSV seed loader hand raw values to these
//! functions before anything reaches the database. The table definitions in
//! `db/migrations` enforce the same limits, so a value that slips past here
//! is still rejected by PostgreSQL.

use serde_json::Value;

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Column limits (in characters, matching VARCHAR(n) semantics)
// ---------------------------------------------------------------------------

pub const CATEGORY_NAME_MAX: usize = 50;

pub const AD_NAME_MAX: usize = 200;
pub const AD_AUTHOR_MAX: usize = 50;
pub const AD_DESCRIPTION_MAX: usize = 1000;
pub const AD_ADDRESS_MAX: usize = 200;

/// Largest price the `INTEGER` column can hold.
pub const PRICE_MAX: i64 = i32::MAX as i64;

// ---------------------------------------------------------------------------
// Validation functions
// ---------------------------------------------------------------------------

/// Require a text value and check it fits in `max_chars` characters.
///
/// Empty strings are accepted; the columns only forbid `NULL`.
pub fn require_text(
    field: &'static str,
    value: Option<&str>,
    max_chars: usize,
) -> Result<String, CoreError> {
    let value =
        value.ok_or_else(|| CoreError::Validation(format!("{field} is required")))?;
    let len = value.chars().count();
    if len > max_chars {
        return Err(CoreError::Validation(format!(
            "{field} must be at most {max_chars} characters, got {len}"
        )));
    }
    Ok(value.to_string())
}

/// Coerce a raw price into the stored integer.
///
/// Accepts a JSON integer or a string holding one (surrounding whitespace is
/// ignored). Fractions, booleans, negatives and values above [`PRICE_MAX`]
/// are rejected.
pub fn coerce_price(value: Option<&Value>) -> Result<i32, CoreError> {
    let raw = match value {
        None | Some(Value::Null) => {
            return Err(CoreError::Validation("price is required".to_string()))
        }
        Some(Value::Number(n)) => n.as_i64().ok_or_else(|| {
            CoreError::Validation(format!("price must be an integer, got {n}"))
        })?,
        Some(Value::String(s)) => s.trim().parse::<i64>().map_err(|_| {
            CoreError::Validation(format!("price must be an integer, got {s:?}"))
        })?,
        Some(other) => {
            return Err(CoreError::Validation(format!(
                "price must be an integer, got {other}"
            )))
        }
    };
    check_price_range(raw)
}

fn check_price_range(price: i64) -> Result<i32, CoreError> {
    if price < 0 {
        return Err(CoreError::Validation(format!(
            "price must be >= 0, got {price}"
        )));
    }
    if price > PRICE_MAX {
        return Err(CoreError::Validation(format!(
            "price must be <= {PRICE_MAX}, got {price}"
        )));
    }
    // Range checked above.
    Ok(price as i32)
}
