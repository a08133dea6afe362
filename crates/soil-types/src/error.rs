//! Error types for data parsing in soil-types.

use thiserror::Error;

/// Errors that can occur when parsing soil reading data.
///
/// This enum is marked `#[non_exhaustive]` to allow adding new error variants
/// in future versions without breaking downstream code.
#[derive(Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseError {
    /// A test date was not a valid `YYYY-MM-DD` calendar date.
    #[error("Invalid test date: {0}")]
    InvalidDate(String),
}

/// Result type alias using soil-types' ParseError type.
pub type ParseResult<T> = std::result::Result<T, ParseError>;
