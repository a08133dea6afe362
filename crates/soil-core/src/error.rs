//! Error types for soil-core.
//!
//! | Error | Raised by | Front-end handling |
//! |-------|-----------|--------------------|
//! | [`Error::Storage`] | Storage gateway (SQLite, export IO) | Error dialog, keep last rows |
//! | [`Error::Gateway`] | Non-SQLite gateways (mock) | Error dialog, keep last rows |
//! | [`Error::Generation`] | Record generator | Error dialog |
//! | [`Error::NoData`] | `Controller::chart` on an empty table | "No data" warning |
//! | [`Error::NoSelection`] | `Controller::delete_selected(None)` | "Select a row" warning |
//!
//! Nothing here is retried automatically.

use thiserror::Error;

/// Result type alias using soil-core's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by the generator, gateways and controller.
#[derive(Debug, Error)]
pub enum Error {
    /// Storage failure (connection, constraint, query or export IO).
    #[error(transparent)]
    Storage(#[from] soil_store::Error),

    /// Storage failure from a gateway that is not backed by SQLite.
    #[error("Storage gateway failure: {0}")]
    Gateway(String),

    /// The record generator could not produce a reading.
    #[error("Failed to generate reading: {0}")]
    Generation(String),

    /// There are no readings to chart.
    #[error("No data available to display")]
    NoData,

    /// A row-level action was requested without a selected row.
    #[error("No row selected")]
    NoSelection,
}

impl Error {
    /// Whether this is a storage-side failure.
    pub fn is_storage(&self) -> bool {
        matches!(self, Error::Storage(_) | Error::Gateway(_))
    }

    /// Whether this is a user-facing warning rather than a failure.
    pub fn is_warning(&self) -> bool {
        matches!(self, Error::NoData | Error::NoSelection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification() {
        assert!(Error::NoData.is_warning());
        assert!(Error::NoSelection.is_warning());
        assert!(!Error::NoData.is_storage());
        assert!(Error::Gateway("down".into()).is_storage());
        assert!(!Error::Generation("x".into()).is_warning());
    }

    #[test]
    fn test_storage_error_message_passes_through() {
        let err: Error = soil_store::Error::NonFiniteValue {
            field: "ph",
            value: f64::NAN,
        }
        .into();
        assert!(err.is_storage());
        assert!(err.to_string().contains("ph"));
    }
}
