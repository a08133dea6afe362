//! Database schema and migrations.
//!
//! The schema version lives in SQLite's `PRAGMA user_version`. Each entry in
//! [`MIGRATIONS`] moves the database up by one version; pending entries run
//! inside a single transaction on open.

use rusqlite::{Connection, params};
use soil_types::parse_test_date;

use crate::error::{Error, Result};

/// Name of the readings table.
pub const READINGS_TABLE: &str = "soil_health";

struct Migration {
    version: u32,
    sql: &'static str,
    /// Data fix-up run after `sql`, inside the same transaction.
    backfill: Option<fn(&Connection) -> Result<()>>,
}

// AUTOINCREMENT keeps ids of deleted rows retired, even after a full clear.
const MIGRATIONS: &[Migration] = &[
    Migration {
        version: 1,
        sql: r#"
            CREATE TABLE IF NOT EXISTS soil_health (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                farm_location TEXT NOT NULL,
                test_date TEXT NOT NULL,
                nitrogen REAL NOT NULL,
                phosphorus REAL NOT NULL,
                potassium REAL NOT NULL,
                ph REAL NOT NULL,
                moisture REAL NOT NULL
            );
            CREATE INDEX IF NOT EXISTS idx_soil_health_test_date
                ON soil_health(test_date);
        "#,
        backfill: None,
    },
    // Text order breaks for negative years, so sort on the Julian day instead.
    Migration {
        version: 2,
        sql: r#"
            ALTER TABLE soil_health ADD COLUMN test_day INTEGER NOT NULL DEFAULT 0;
            DROP INDEX IF EXISTS idx_soil_health_test_date;
            CREATE INDEX IF NOT EXISTS idx_soil_health_test_day
                ON soil_health(test_day, id);
        "#,
        backfill: Some(backfill_test_day),
    },
];

fn backfill_test_day(conn: &Connection) -> Result<()> {
    let rows = conn
        .prepare("SELECT id, test_date FROM soil_health")?
        .query_map([], |row| Ok((row.get::<_, i64>(0)?, row.get::<_, String>(1)?)))?
        .collect::<std::result::Result<Vec<_>, _>>()?;

    let mut update = conn.prepare("UPDATE soil_health SET test_day = ?1 WHERE id = ?2")?;
    for (id, text) in rows {
        let date = parse_test_date(&text).map_err(|source| Error::InvalidDate { id, source })?;
        update.execute(params![date.to_julian_day(), id])?;
    }
    Ok(())
}

/// Schema version this build writes.
pub const SCHEMA_VERSION: u32 = latest_version();

const fn latest_version() -> u32 {
    match MIGRATIONS.last() {
        Some(migration) => migration.version,
        None => 0,
    }
}

/// Bring the database up to [`SCHEMA_VERSION`].
///
/// A current database is left untouched. A database written by a newer build
/// is rejected rather than modified.
pub fn initialize(conn: &Connection) -> Result<()> {
    let found = user_version(conn)?;
    if found > SCHEMA_VERSION {
        return Err(Error::UnsupportedSchema {
            found,
            supported: SCHEMA_VERSION,
        });
    }
    if found == SCHEMA_VERSION {
        return Ok(());
    }

    let tx = conn.unchecked_transaction()?;
    for migration in MIGRATIONS.iter().filter(|m| m.version > found) {
        tx.execute_batch(migration.sql)?;
        if let Some(backfill) = migration.backfill {
            backfill(&tx)?;
        }
        tx.pragma_update(None, "user_version", migration.version)?;
    }
    tx.commit()?;

    tracing::debug!("Schema migrated from v{} to v{}", found, SCHEMA_VERSION);
    Ok(())
}

pub(crate) fn user_version(conn: &Connection) -> Result<u32> {
    let version = conn.query_row("PRAGMA user_version", [], |row| row.get(0))?;
    Ok(version)
}
