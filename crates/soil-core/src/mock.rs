//! In-memory gateway for testing.
//!
//! [`MockGateway`] implements [`ReadingGateway`] without SQLite so controller
//! and front-end logic can be exercised in isolation.
//!
//! # Features
//!
//! - **Failure injection**: make every operation fail with a chosen message
//! - **Call counting**: see how often the controller re-fetched
//! - **Id retirement**: ids are never reused, matching the SQLite store

use std::cell::Cell;

use soil_types::{NewSoilReading, SoilReading};

use crate::error::{Error, Result};
use crate::traits::ReadingGateway;

/// A fake storage gateway backed by a `Vec`.
///
/// # Example
///
/// ```
/// use soil_core::mock::MockGateway;
/// use soil_core::{Controller, RandomGenerator};
///
/// let mut controller = Controller::new(MockGateway::new(), RandomGenerator::seeded(1));
/// controller.insert_random_batch()?;
/// assert_eq!(controller.refresh()?.len(), 100);
/// # Ok::<(), soil_core::Error>(())
/// ```
#[derive(Debug, Default)]
pub struct MockGateway {
    readings: Vec<SoilReading>,
    last_id: i64,
    fail_message: Option<String>,
    fetch_count: Cell<u32>,
    schema_calls: u32,
}

impl MockGateway {
    /// Empty gateway that never fails.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gateway pre-populated with readings (ids assigned from 1).
    pub fn with_readings(readings: &[NewSoilReading]) -> Self {
        let mut gateway = Self::new();
        gateway.push_all(readings);
        gateway
    }

    /// Make every subsequent operation fail (`Some`) or succeed (`None`).
    pub fn set_failure(&mut self, message: Option<&str>) {
        self.fail_message = message.map(str::to_string);
    }

    /// Number of `fetch_all` calls so far.
    pub fn fetch_count(&self) -> u32 {
        self.fetch_count.get()
    }

    /// Number of `ensure_schema` calls so far.
    pub fn schema_calls(&self) -> u32 {
        self.schema_calls
    }

    /// Stored readings in insertion order.
    pub fn readings(&self) -> &[SoilReading] {
        &self.readings
    }

    fn check(&self) -> Result<()> {
        match &self.fail_message {
            Some(message) => Err(Error::Gateway(message.clone())),
            None => Ok(()),
        }
    }

    fn push_all(&mut self, readings: &[NewSoilReading]) -> usize {
        for reading in readings {
            self.last_id += 1;
            self.readings.push(SoilReading::from_new(self.last_id, reading));
        }
        readings.len()
    }
}

impl ReadingGateway for MockGateway {
    fn ensure_schema(&mut self) -> Result<()> {
        self.check()?;
        self.schema_calls += 1;
        Ok(())
    }

    fn insert_batch(&mut self, readings: &[NewSoilReading]) -> Result<usize> {
        self.check()?;
        Ok(self.push_all(readings))
    }

    fn fetch_all(&self) -> Result<Vec<SoilReading>> {
        self.check()?;
        self.fetch_count.set(self.fetch_count.get() + 1);

        let mut rows = self.readings.clone();
        rows.sort_by_key(|r| (r.test_date, r.id));
        Ok(rows)
    }

    fn delete_by_id(&mut self, id: i64) -> Result<bool> {
        self.check()?;
        let before = self.readings.len();
        self.readings.retain(|r| r.id != id);
        Ok(self.readings.len() < before)
    }

    fn delete_all(&mut self) -> Result<usize> {
        self.check()?;
        let removed = self.readings.len();
        self.readings.clear();
        Ok(removed)
    }
}
