//! Trait abstraction over reading storage.
//!
//! [`ReadingGateway`] is the seam between the [`Controller`](crate::Controller)
//! and persistence. It is implemented for the SQLite [`Store`] and for
//! [`MockGateway`](crate::mock::MockGateway), so controller logic can be tested
//! without a database or a window.

use soil_store::Store;
use soil_types::{NewSoilReading, SoilReading};

use crate::error::Result;

/// Storage operations the presentation layer relies on.
///
/// # Example
///
/// ```
/// use soil_core::ReadingGateway;
/// use soil_store::Store;
///
/// fn row_count<G: ReadingGateway>(gateway: &G) -> soil_core::Result<usize> {
///     Ok(gateway.fetch_all()?.len())
/// }
///
/// let store = Store::open_in_memory()?;
/// assert_eq!(row_count(&store)?, 0);
/// # Ok::<(), soil_core::Error>(())
/// ```
pub trait ReadingGateway {
    /// Create the readings table if absent. Idempotent.
    fn ensure_schema(&mut self) -> Result<()>;

    /// Persist all readings as one operation, returning the count inserted.
    fn insert_batch(&mut self, readings: &[NewSoilReading]) -> Result<usize>;

    /// All readings, ascending by test date.
    fn fetch_all(&self) -> Result<Vec<SoilReading>>;

    /// Remove a reading; returns `false` if it was already gone.
    fn delete_by_id(&mut self, id: i64) -> Result<bool>;

    /// Remove every reading, returning how many were removed.
    fn delete_all(&mut self) -> Result<usize>;
}

impl ReadingGateway for Store {
    fn ensure_schema(&mut self) -> Result<()> {
        Ok(Store::ensure_schema(self)?)
    }

    fn insert_batch(&mut self, readings: &[NewSoilReading]) -> Result<usize> {
        Ok(Store::insert_batch(self, readings)?)
    }

    fn fetch_all(&self) -> Result<Vec<SoilReading>> {
        Ok(Store::fetch_all(self)?)
    }

    fn delete_by_id(&mut self, id: i64) -> Result<bool> {
        Ok(Store::delete_by_id(self, id)?)
    }

    fn delete_all(&mut self) -> Result<usize> {
        Ok(Store::delete_all(self)?)
    }
}
