//! Command interface between the front ends and storage.
//!
//! Each user action maps to one method on [`Controller`]. The controller only
//! knows the [`ReadingGateway`] and [`RecordGenerator`] traits, and every
//! method is a single synchronous request/response against the gateway.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use soil_store::ExportFormat;
use soil_types::SoilReading;

use crate::chart::NutrientChart;
use crate::error::{Error, Result};
use crate::generator::RecordGenerator;
use crate::traits::ReadingGateway;

/// Number of readings inserted by one "insert random batch" action.
pub const DEFAULT_BATCH_SIZE: usize = 100;

/// Answer to the "delete all records?" prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Yes,
    No,
}

impl From<bool> for Confirmation {
    fn from(value: bool) -> Self {
        if value {
            Confirmation::Yes
        } else {
            Confirmation::No
        }
    }
}

/// What an export wrote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub path: PathBuf,
    pub format: ExportFormat,
    pub records: usize,
}

/// Presentation-layer controller.
///
/// Owns the gateway for the lifetime of the application.
#[derive(Debug)]
pub struct Controller<G, R> {
    gateway: G,
    generator: R,
    batch_size: usize,
}

impl<G: ReadingGateway, R: RecordGenerator> Controller<G, R> {
    /// Create a controller with the default batch size.
    pub fn new(gateway: G, generator: R) -> Self {
        Self {
            gateway,
            generator,
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }

    /// Override the number of readings per random batch.
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    /// Make sure the readings table exists. Run once at startup.
    pub fn ensure_schema(&mut self) -> Result<()> {
        self.gateway.ensure_schema()?;
        debug!("Schema ready");
        Ok(())
    }

    /// Generate a batch and persist it. Returns the number inserted.
    pub fn insert_random_batch(&mut self) -> Result<usize> {
        let batch = self.generator.generate_batch(self.batch_size)?;
        let inserted = self.gateway.insert_batch(&batch)?;
        info!("Inserted random batch of {} readings", inserted);
        Ok(inserted)
    }

    /// Re-fetch every reading for the grid.
    pub fn refresh(&self) -> Result<Vec<SoilReading>> {
        let readings = self.gateway.fetch_all()?;
        debug!("Fetched {} readings", readings.len());
        Ok(readings)
    }

    /// Fetch every reading and write it to `path`, replacing any existing file.
    pub fn export(&self, path: &Path, format: ExportFormat) -> Result<ExportSummary> {
        let readings = self.gateway.fetch_all()?;
        soil_store::export::export(&readings, path, format)?;

        Ok(ExportSummary {
            path: path.to_path_buf(),
            format,
            records: readings.len(),
        })
    }

    /// Fetch every reading and build the nutrient chart.
    ///
    /// Returns [`Error::NoData`] when the table is empty; no chart is built.
    pub fn chart(&self) -> Result<NutrientChart> {
        let readings = self.gateway.fetch_all()?;
        NutrientChart::from_readings(&readings).ok_or(Error::NoData)
    }

    /// Delete the selected reading.
    ///
    /// Returns [`Error::NoSelection`] when nothing is selected. Deleting an id
    /// that is already gone succeeds and returns `false`.
    pub fn delete_selected(&mut self, selected: Option<i64>) -> Result<bool> {
        let id = selected.ok_or(Error::NoSelection)?;
        self.gateway.delete_by_id(id)
    }

    /// Delete every reading if the user confirmed.
    ///
    /// Returns `None` when declined, otherwise the number of readings removed.
    pub fn delete_all(&mut self, answer: Confirmation) -> Result<Option<usize>> {
        match answer {
            Confirmation::Yes => Ok(Some(self.gateway.delete_all()?)),
            Confirmation::No => {
                debug!("Delete all declined");
                Ok(None)
            }
        }
    }
}
