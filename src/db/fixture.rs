//! In-memory databases shaped like the Hawaii climate database.

use rusqlite::{params, Connection};

use super::Store;

pub const MOST_ACTIVE: &str = "USC00519281";
pub const SECOND: &str = "USC00513117";
pub const THIRD: &str = "USC00519397";

pub fn create_schema(conn: &Connection) {
    conn.execute_batch(
        "CREATE TABLE station (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            station TEXT NOT NULL,
            name TEXT,
            latitude REAL,
            longitude REAL,
            elevation REAL
        );
        CREATE TABLE measurement (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            station TEXT NOT NULL,
            date TEXT NOT NULL,
            prcp REAL,
            tobs REAL
        );",
    )
    .unwrap();
}

pub fn empty_store() -> Store {
    let conn = Connection::open_in_memory().unwrap();
    create_schema(&conn);
    Store::from_connection(conn).unwrap()
}

/// Three stations with 5, 2 and 1 measurements. The latest date is
/// 2017-08-23, so the last-year window starts on 2016-08-23 and only the
/// 2016-08-22 row falls outside it.
pub fn store() -> Store {
    let store = empty_store();

    store
        .with_conn(|conn| {
            conn.execute_batch(&format!(
                "INSERT INTO station (station, name, latitude, longitude, elevation) VALUES
                    ('{THIRD}', 'WAIKIKI 717.2, HI US', 21.2716, -157.8168, 3.0),
                    ('{SECOND}', 'KANEOHE 838.1, HI US', 21.4234, -157.8015, 14.6),
                    ('{MOST_ACTIVE}', 'WAIHEE 837.5, HI US', 21.45167, -157.84889, 32.9);"
            ))
        })
        .unwrap();

    let rows = [
        (THIRD, "2016-08-22", Some(0.10), Some(70.0)),
        (MOST_ACTIVE, "2016-08-23", Some(0.50), Some(77.0)),
        (MOST_ACTIVE, "2017-01-10", None, Some(65.0)),
        (SECOND, "2017-01-10", Some(0.20), Some(68.0)),
        (MOST_ACTIVE, "2017-05-01", Some(0.00), Some(74.0)),
        (SECOND, "2017-06-15", Some(0.30), Some(75.0)),
        (MOST_ACTIVE, "2017-08-01", Some(0.02), Some(81.0)),
        (MOST_ACTIVE, "2017-08-23", Some(0.08), Some(79.0)),
    ];
    for (station, date, prcp, tobs) in rows {
        insert_measurement(&store, station, date, prcp, tobs);
    }

    store
}

pub fn insert_measurement(
    store: &Store,
    station: &str,
    date: &str,
    prcp: Option<f64>,
    tobs: Option<f64>,
) {
    store
        .with_conn(|conn| {
            conn.execute(
                "INSERT INTO measurement (station, date, prcp, tobs) VALUES (?1, ?2, ?3, ?4)",
                params![station, date, prcp, tobs],
            )
        })
        .unwrap();
}
