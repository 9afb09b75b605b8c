//! Fixed response bodies shared by handlers and the error mapper.
//!
//! Bodies are serialized with `serde_json`, which leaves non-ASCII text
//! unescaped, so localized values round-trip verbatim.

use serde::Serialize;

pub const STATUS_OK: &str = "ok";
pub const WRONG_DATA: &str = "Wrong data";
pub const NOT_FOUND: &str = "Not found";
pub const INTERNAL_ERROR: &str = "Internal server error";

/// `{ "status": ... }`
#[derive(Debug, Serialize)]
pub struct StatusBody {
    pub status: &'static str,
}

/// `{ "error": ... }`
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
}
