//! Record generation and command handling for the soil-health data manager.
//!
//! This crate sits between the front ends (GUI and CLI) and storage:
//!
//! - [`RandomGenerator`] builds synthetic readings
//! - [`ReadingGateway`] abstracts storage (SQLite [`soil_store::Store`] or
//!   [`mock::MockGateway`])
//! - [`Controller`] exposes one method per user action
//! - [`NutrientChart`] holds the nutrient trend series for plotting
//!
//! # Quick Start
//!
//! ```
//! use soil_core::{Confirmation, Controller, RandomGenerator};
//! use soil_store::Store;
//!
//! let store = Store::open_in_memory()?;
//! let mut controller = Controller::new(store, RandomGenerator::new()).with_batch_size(25);
//!
//! controller.insert_random_batch()?;
//! let readings = controller.refresh()?;
//! assert_eq!(readings.len(), 25);
//!
//! let chart = controller.chart()?;
//! assert_eq!(chart.point_count(), 25);
//!
//! controller.delete_all(Confirmation::Yes)?;
//! assert!(controller.refresh()?.is_empty());
//! # Ok::<(), soil_core::Error>(())
//! ```

pub mod chart;
pub mod controller;
pub mod error;
pub mod generator;
pub mod mock;
pub mod traits;

pub use chart::{NutrientChart, NutrientSeries};
pub use controller::{Confirmation, Controller, DEFAULT_BATCH_SIZE, ExportSummary};
pub use error::{Error, Result};
pub use generator::{RandomGenerator, RecordGenerator};
pub use traits::ReadingGateway;

// Re-export the data model so front ends need only one import path.
pub use soil_store::{ExportFormat, Store};
pub use soil_types::{NewSoilReading, SoilReading};
