//! Local data persistence for soil-health readings.
//!
//! This crate provides SQLite-based storage for soil readings and the
//! flat-file exports built on top of it.
//!
//! # Features
//!
//! - Idempotent schema creation on every open
//! - Transactional batch insert with storage-assigned ids
//! - Fetch all readings ordered by test date
//! - Delete by id (missing ids are not an error) and delete all
//! - CSV and JSON export
//!
//! # Example
//!
//! ```
//! use soil_store::Store;
//! use soil_types::NewSoilReading;
//! use time::macros::date;
//!
//! let mut store = Store::open_in_memory()?;
//! store.insert_batch(&[NewSoilReading {
//!     location: "Springfield".to_string(),
//!     test_date: date!(2023 - 01 - 01),
//!     nitrogen: 1.0,
//!     phosphorus: 2.0,
//!     potassium: 3.0,
//!     ph: 6.5,
//!     moisture: 20.0,
//! }])?;
//!
//! let readings = store.fetch_all()?;
//! assert_eq!(readings.len(), 1);
//! # Ok::<(), soil_store::Error>(())
//! ```

mod error;
pub mod export;
mod schema;
mod store;

pub use error::{Error, Result};
pub use export::{EXPORT_HEADER, ExportFormat};
pub use schema::{READINGS_TABLE, SCHEMA_VERSION};
pub use store::Store;

/// Default database path following platform conventions.
///
/// - Linux: `~/.local/share/soil-health/soil_health.db`
/// - macOS: `~/Library/Application Support/soil-health/soil_health.db`
/// - Windows: `C:\Users\<user>\AppData\Local\soil-health\soil_health.db`
pub fn default_db_path() -> std::path::PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| std::path::PathBuf::from("."))
        .join("soil-health")
        .join("soil_health.db")
}
