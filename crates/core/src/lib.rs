//! Shared domain types for the ad board: ids, the error taxonomy, and the
//! column rules every insert goes through.

pub mod error;
pub mod listing;
pub mod types;
