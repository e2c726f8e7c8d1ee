//! Query façade over the station/measurement database.
//!
//! Each function answers one endpoint and runs synchronously against the
//! [`Store`]; the HTTP layer decides where to run it.

pub mod date;

use std::collections::BTreeMap;

use serde::Serialize;

use crate::{db::Store, error::StoreError};

pub use date::{observation_window_start, DatePolicy};

/// Min, average and max temperature for the most active station.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TemperatureSummary {
    pub station: String,
    pub min_temp: Option<f64>,
    pub avg_temp: Option<f64>,
    pub max_temp: Option<f64>,
}

fn window_start(store: &Store) -> Result<String, StoreError> {
    let most_recent = store.most_recent_date()?.ok_or(StoreError::EmptyStore)?;
    observation_window_start(&most_recent)
}

/// Precipitation keyed by date over the last year of data.
///
/// Several stations report on the same day; the last row read for a date wins.
pub fn recent_precipitation(store: &Store) -> Result<BTreeMap<String, Option<f64>>, StoreError> {
    let start = window_start(store)?;

    let mut by_date = BTreeMap::new();
    for (date, prcp) in store.precipitation_since(&start)? {
        by_date.insert(date, prcp);
    }

    Ok(by_date)
}

pub fn stations(store: &Store) -> Result<Vec<String>, StoreError> {
    store.station_codes()
}

/// Raw temperature observations of the most active station over the last
/// year of data.
pub fn most_active_tobs(store: &Store) -> Result<Vec<Option<f64>>, StoreError> {
    let station = store
        .most_active_station(None)?
        .ok_or(StoreError::EmptyStore)?;
    let start = window_start(store)?;

    store.tobs_for_station(&station, &start)
}

/// Temperature summary for the station with the most measurements since
/// `start`, optionally limited to dates up to `end`.
///
/// The ranking only counts rows from `start` onwards and ignores `end`, so a
/// station can be chosen on the strength of rows the summary then excludes.
/// Returns an empty list when no station has a row since `start`. A chosen
/// station with no rows in range keeps its code and gets null statistics.
pub fn temperature_summary(
    store: &Store,
    start: &str,
    end: Option<&str>,
) -> Result<Vec<TemperatureSummary>, StoreError> {
    let Some(station) = store.most_active_station(Some(start))? else {
        return Ok(Vec::new());
    };

    let stats = store.temperature_stats(&station, start, end)?;

    Ok(vec![TemperatureSummary {
        station,
        min_temp: stats.min,
        avg_temp: stats.avg,
        max_temp: stats.max,
    }])
}

// -- Tests -------------------------------------------------------------------
