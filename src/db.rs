//! Read-only access to the station/measurement SQLite database.

#[cfg(test)]
pub mod fixture;

use std::{path::Path, sync::Mutex};

use rusqlite::{params, Connection, OpenFlags, OptionalExtension};

use crate::error::StoreError;

const REQUIRED_TABLES: [&str; 2] = ["station", "measurement"];

/// Aggregated temperature observations for one station.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TemperatureStats {
    pub min: Option<f64>,
    pub avg: Option<f64>,
    pub max: Option<f64>,
}

/// Process-wide handle on the climate database.
///
/// The connection is opened once at startup and shared by every request.
/// `rusqlite::Connection` is not `Sync`, so access is serialised through a
/// mutex; callers are expected to run queries off the async runtime.
pub struct Store {
    conn: Mutex<Connection>,
}

impl Store {
    /// Opens an existing database file read-only.
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .map_err(|e| StoreError::Open(path.to_path_buf(), e))?;

        Self::from_connection(conn)
    }

    /// Wraps an already open connection after checking the schema is present.
    pub fn from_connection(conn: Connection) -> Result<Self, StoreError> {
        for table in REQUIRED_TABLES {
            let found: i64 = conn.query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1",
                params![table],
                |row| row.get(0),
            )?;
            if found == 0 {
                return Err(StoreError::MissingTable(table));
            }
        }

        Ok(Store {
            conn: Mutex::new(conn),
        })
    }

    fn with_conn<T>(
        &self,
        f: impl FnOnce(&Connection) -> rusqlite::Result<T>,
    ) -> Result<T, StoreError> {
        let conn = self.conn.lock().map_err(|_| StoreError::Poisoned)?;
        Ok(f(&conn)?)
    }

    /// Latest measurement date, or `None` if there are no measurements.
    pub fn most_recent_date(&self) -> Result<Option<String>, StoreError> {
        self.with_conn(|conn| {
            conn.query_row("SELECT MAX(date) FROM measurement", [], |row| row.get(0))
        })
    }

    /// Date and precipitation of every measurement on or after `start`.
    pub fn precipitation_since(
        &self,
        start: &str,
    ) -> Result<Vec<(String, Option<f64>)>, StoreError> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare("SELECT date, prcp FROM measurement WHERE date >= ?1")?;
            let rows = stmt.query_map(params![start], |row| Ok((row.get(0)?, row.get(1)?)))?;
            rows.collect()
        })
    }

    pub fn station_codes(&self) -> Result<Vec<String>, StoreError> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare("SELECT station FROM station")?;
            let rows = stmt.query_map([], |row| row.get(0))?;
            rows.collect()
        })
    }

    /// Station with the most measurements, optionally only counting rows on
    /// or after `since`. Equal counts go to the lowest station code.
    pub fn most_active_station(&self, since: Option<&str>) -> Result<Option<String>, StoreError> {
        self.with_conn(|conn| {
            conn.query_row(
                r#"
                    SELECT station FROM measurement
                    WHERE ?1 IS NULL OR date >= ?1
                    GROUP BY station
                    ORDER BY COUNT(*) DESC, station ASC
                    LIMIT 1
                "#,
                params![since],
                |row| row.get(0),
            )
            .optional()
        })
    }

    pub fn tobs_for_station(
        &self,
        station: &str,
        since: &str,
    ) -> Result<Vec<Option<f64>>, StoreError> {
        self.with_conn(|conn| {
            let mut stmt =
                conn.prepare("SELECT tobs FROM measurement WHERE station = ?1 AND date >= ?2")?;
            let rows = stmt.query_map(params![station, since], |row| row.get(0))?;
            rows.collect()
        })
    }

    /// Min, average and max `tobs` for a station from `start`, bounded above
    /// by `end` when given. All fields are `None` if no rows match.
    pub fn temperature_stats(
        &self,
        station: &str,
        start: &str,
        end: Option<&str>,
    ) -> Result<TemperatureStats, StoreError> {
        self.with_conn(|conn| {
            conn.query_row(
                r#"
                    SELECT MIN(tobs), AVG(tobs), MAX(tobs) FROM measurement
                    WHERE station = ?1
                      AND date >= ?2
                      AND (?3 IS NULL OR date <= ?3)
                "#,
                params![station, start, end],
                |row| {
                    Ok(TemperatureStats {
                        min: row.get(0)?,
                        avg: row.get(1)?,
                        max: row.get(2)?,
                    })
                },
            )
        })
    }
}

// -- Tests -------------------------------------------------------------------
