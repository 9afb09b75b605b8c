use std::path::PathBuf;

use adboard_core::error::CoreError;

#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed CSV at line {line}: {message}")]
    Csv { line: usize, message: String },

    #[error("{path} line {line}: {source}")]
    InvalidRow {
        path: PathBuf,
        line: usize,
        #[source]
        source: CoreError,
    },

    #[error("{path} line {line}: insert failed: {source}")]
    Insert {
        path: PathBuf,
        line: usize,
        #[source]
        source: sqlx::Error,
    },
}
