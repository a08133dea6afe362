//! Main store implementation.

use std::path::{Path, PathBuf};

use rusqlite::{Connection, Row, params};
use tracing::{debug, info};

use soil_types::{NewSoilReading, SoilReading, format_test_date, parse_test_date};

use crate::error::{Error, Result};
use crate::schema;

const SELECT_READINGS_SQL: &str = "SELECT id, farm_location, test_date, nitrogen, phosphorus, \
     potassium, ph, moisture FROM soil_health ORDER BY test_day ASC, id ASC";

/// SQLite-based store for soil-health readings.
///
/// Owns a single long-lived connection. All access to the readings table goes
/// through this type.
pub struct Store {
    conn: Connection,
    path: Option<PathBuf>,
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store").field("path", &self.path).finish()
    }
}

impl Store {
    /// Open or create a database at the given path.
    ///
    /// Creates parent directories and the schema as needed.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| Error::CreateDirectory {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        info!("Opening database at {}", path.display());
        let conn = Connection::open(path)?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous = NORMAL;",
        )?;

        let store = Self {
            conn,
            path: Some(path.to_path_buf()),
        };
        store.ensure_schema()?;
        Ok(store)
    }

    /// Open an in-memory database (for testing).
    pub fn open_in_memory() -> Result<Self> {
        let store = Self {
            conn: Connection::open_in_memory()?,
            path: None,
        };
        store.ensure_schema()?;
        Ok(store)
    }

    /// Path of the database file, `None` for in-memory stores.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Create the readings table if it does not exist yet.
    ///
    /// Safe to call on every startup.
    pub fn ensure_schema(&self) -> Result<()> {
        schema::initialize(&self.conn)
    }
}

// Reading operations
impl Store {
    /// Insert a batch of readings in one transaction.
    ///
    /// Every reading receives a fresh id. Returns the number of rows inserted.
    /// If any reading fails, none of the batch is persisted.
    pub fn insert_batch(&mut self, readings: &[NewSoilReading]) -> Result<usize> {
        for reading in readings {
            check_finite(reading)?;
        }

        let tx = self.conn.transaction()?;
        let mut inserted = 0;
        {
            let mut stmt = tx.prepare(
                "INSERT INTO soil_health (farm_location, test_date, nitrogen, phosphorus,
                 potassium, ph, moisture, test_day)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            )?;

            for reading in readings {
                inserted += stmt.execute(params![
                    reading.location,
                    format_test_date(reading.test_date),
                    reading.nitrogen,
                    reading.phosphorus,
                    reading.potassium,
                    reading.ph,
                    reading.moisture,
                    reading.test_date.to_julian_day(),
                ])?;
            }
        }
        tx.commit()?;

        info!("Inserted {} soil readings", inserted);
        Ok(inserted)
    }

    /// Fetch every reading, oldest test date first.
    ///
    /// Readings sharing a test date are ordered by id.
    pub fn fetch_all(&self) -> Result<Vec<SoilReading>> {
        debug!("Executing query: {}", SELECT_READINGS_SQL);

        let mut stmt = self.conn.prepare(SELECT_READINGS_SQL)?;
        let rows = stmt
            .query_map([], raw_reading)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        rows.into_iter().map(RawReading::into_reading).collect()
    }

    /// Delete one reading by id.
    ///
    /// Returns `false` if no such reading existed; that is not an error.
    pub fn delete_by_id(&self, id: i64) -> Result<bool> {
        let deleted = self
            .conn
            .execute("DELETE FROM soil_health WHERE id = ?1", [id])?;

        if deleted > 0 {
            info!("Deleted soil reading {}", id);
        } else {
            debug!("Soil reading {} already absent", id);
        }
        Ok(deleted > 0)
    }

    /// Delete every reading. Returns the number of rows removed.
    pub fn delete_all(&self) -> Result<usize> {
        let deleted = self.conn.execute("DELETE FROM soil_health", [])?;
        info!("Deleted all {} soil readings", deleted);
        Ok(deleted)
    }

    /// Count stored readings.
    pub fn count(&self) -> Result<u64> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM soil_health", [], |row| row.get(0))?;
        Ok(count as u64)
    }
}

fn check_finite(reading: &NewSoilReading) -> Result<()> {
    for (field, value) in reading.measurements() {
        if !value.is_finite() {
            return Err(Error::NonFiniteValue { field, value });
        }
    }
    Ok(())
}

/// Row as read from SQLite, before the test date is parsed.
struct RawReading {
    id: i64,
    location: String,
    test_date: String,
    nitrogen: f64,
    phosphorus: f64,
    potassium: f64,
    ph: f64,
    moisture: f64,
}

fn raw_reading(row: &Row<'_>) -> rusqlite::Result<RawReading> {
    Ok(RawReading {
        id: row.get(0)?,
        location: row.get(1)?,
        test_date: row.get(2)?,
        nitrogen: row.get(3)?,
        phosphorus: row.get(4)?,
        potassium: row.get(5)?,
        ph: row.get(6)?,
        moisture: row.get(7)?,
    })
}

impl RawReading {
    fn into_reading(self) -> Result<SoilReading> {
        let test_date = parse_test_date(&self.test_date).map_err(|source| Error::InvalidDate {
            id: self.id,
            source,
        })?;

        Ok(SoilReading {
            id: self.id,
            location: self.location,
            test_date,
            nitrogen: self.nitrogen,
            phosphorus: self.phosphorus,
            potassium: self.potassium,
            ph: self.ph,
            moisture: self.moisture,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    fn create_test_reading(location: &str, test_date: time::Date) -> NewSoilReading {
        NewSoilReading {
            location: location.to_string(),
            test_date,
            nitrogen: 1.0,
            phosphorus: 2.0,
            potassium: 3.0,
            ph: 6.5,
            moisture: 20.0,
        }
    }

    #[test]
    fn test_open_in_memory() {
        let store = Store::open_in_memory().unwrap();
        assert!(store.fetch_all().unwrap().is_empty());
        assert_eq!(store.count().unwrap(), 0);
        assert!(store.path().is_none());
    }

    #[test]
    fn test_ensure_schema_is_idempotent() {
        let store = Store::open_in_memory().unwrap();
        store.ensure_schema().unwrap();
        store.ensure_schema().unwrap();
        assert_eq!(store.count().unwrap(), 0);
    }

    #[test]
    fn test_insert_and_fetch() {
        let mut store = Store::open_in_memory().unwrap();
        let reading = create_test_reading("Springfield", date!(2023 - 01 - 01));

        let inserted = store.insert_batch(std::slice::from_ref(&reading)).unwrap();
        assert_eq!(inserted, 1);

        let rows = store.fetch_all().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].to_new(), reading);
        assert!(rows[0].id > 0);
    }

    #[test]
    fn test_insert_empty_batch() {
        let mut store = Store::open_in_memory().unwrap();
        assert_eq!(store.insert_batch(&[]).unwrap(), 0);
        assert_eq!(store.count().unwrap(), 0);
    }

    #[test]
    fn test_fetch_orders_by_test_date() {
        let mut store = Store::open_in_memory().unwrap();
        store
            .insert_batch(&[
                create_test_reading("C", date!(2024 - 05 - 01)),
                create_test_reading("A", date!(2023 - 01 - 15)),
                create_test_reading("B", date!(2023 - 11 - 30)),
            ])
            .unwrap();

        let locations: Vec<String> = store
            .fetch_all()
            .unwrap()
            .into_iter()
            .map(|r| r.location)
            .collect();
        assert_eq!(locations, ["A", "B", "C"]);
    }

    #[test]
    fn test_fetch_orders_negative_years_chronologically() {
        let new_year =
            |year| time::Date::from_calendar_date(year, time::Month::January, 1).unwrap();
        let mut store = Store::open_in_memory().unwrap();
        store
            .insert_batch(&[
                create_test_reading("B", new_year(-1)),
                create_test_reading("A", new_year(-2)),
                create_test_reading("C", new_year(1)),
            ])
            .unwrap();

        let rows = store.fetch_all().unwrap();
        let locations: Vec<&str> = rows.iter().map(|r| r.location.as_str()).collect();
        assert_eq!(locations, ["A", "B", "C"]);
        assert!(rows.windows(2).all(|w| w[0].test_date <= w[1].test_date));
    }

    #[test]
    fn test_insert_accepts_out_of_range_values() {
        let mut store = Store::open_in_memory().unwrap();
        let mut reading = create_test_reading("Nowhere", date!(1990 - 06 - 01));
        reading.ph = 14.0;
        reading.moisture = -3.0;

        store.insert_batch(&[reading]).unwrap();
        let rows = store.fetch_all().unwrap();
        assert_eq!(rows[0].ph, 14.0);
        assert_eq!(rows[0].moisture, -3.0);
    }

    #[test]
    fn test_insert_rejects_non_finite_and_keeps_table_unchanged() {
        let mut store = Store::open_in_memory().unwrap();
        let good = create_test_reading("Good", date!(2023 - 01 - 01));
        let mut bad = create_test_reading("Bad", date!(2023 - 01 - 02));
        bad.potassium = f64::NAN;

        let err = store.insert_batch(&[good, bad]).unwrap_err();
        assert!(matches!(
            err,
            Error::NonFiniteValue {
                field: "potassium",
                ..
            }
        ));
        assert_eq!(store.count().unwrap(), 0);
    }

    #[test]
    fn test_delete_by_id() {
        let mut store = Store::open_in_memory().unwrap();
        store
            .insert_batch(&[
                create_test_reading("A", date!(2023 - 01 - 01)),
                create_test_reading("B", date!(2023 - 01 - 02)),
            ])
            .unwrap();
        let id = store.fetch_all().unwrap()[0].id;

        assert!(store.delete_by_id(id).unwrap());
        assert!(!store.delete_by_id(id).unwrap());

        let rows = store.fetch_all().unwrap();
        assert_eq!(rows.len(), 1);
        assert!(rows.iter().all(|r| r.id != id));
    }

    #[test]
    fn test_delete_missing_id_is_not_an_error() {
        let store = Store::open_in_memory().unwrap();
        assert!(!store.delete_by_id(42).unwrap());
    }

    #[test]
    fn test_delete_all() {
        let mut store = Store::open_in_memory().unwrap();
        store
            .insert_batch(&[
                create_test_reading("A", date!(2023 - 01 - 01)),
                create_test_reading("B", date!(2023 - 01 - 02)),
            ])
            .unwrap();

        assert_eq!(store.delete_all().unwrap(), 2);
        assert!(store.fetch_all().unwrap().is_empty());
        assert_eq!(store.delete_all().unwrap(), 0);
    }

    #[test]
    fn test_ids_not_reused_after_delete_all() {
        let mut store = Store::open_in_memory().unwrap();
        store
            .insert_batch(&[create_test_reading("A", date!(2023 - 01 - 01))])
            .unwrap();
        let first_id = store.fetch_all().unwrap()[0].id;

        store.delete_all().unwrap();
        store
            .insert_batch(&[create_test_reading("B", date!(2023 - 01 - 01))])
            .unwrap();
        let second_id = store.fetch_all().unwrap()[0].id;

        assert!(second_id > first_id);
    }

    #[test]
    fn test_location_with_quotes_is_parameterized() {
        let mut store = Store::open_in_memory().unwrap();
        let reading = create_test_reading(
            "O'Brien'); DROP TABLE soil_health; --",
            date!(2023 - 01 - 01),
        );
        store.insert_batch(std::slice::from_ref(&reading)).unwrap();

        assert_eq!(store.fetch_all().unwrap()[0].location, reading.location);
    }
}
