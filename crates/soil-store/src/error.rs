//! Error types for soil-store.

use std::path::PathBuf;

/// Result type for soil-store operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in soil-store.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Database error from SQLite.
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Failed to create database directory.
    #[error("Failed to create database directory {path}: {source}")]
    CreateDirectory {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The database was written by a newer schema than this build knows.
    #[error("Database schema v{found} is newer than supported v{supported}")]
    UnsupportedSchema { found: u32, supported: u32 },

    /// A measurement SQLite cannot represent (NaN or infinite).
    #[error("Measurement {field} is not a finite number: {value}")]
    NonFiniteValue { field: &'static str, value: f64 },

    /// A stored test date could not be parsed.
    #[error("Invalid test date in row {id}: {source}")]
    InvalidDate {
        id: i64,
        source: soil_types::ParseError,
    },

    /// CSV writer error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
