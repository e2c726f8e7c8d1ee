//! Endpoint handlers.

use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, State},
    response::Html,
    Json,
};
use tokio::task;

use super::{ApiError, ApiState};
use crate::{
    climate::{self, TemperatureSummary},
    db::Store,
    error::StoreError,
};

const HOME: &str = "Available Routes:<br>
/api/v1.0/precipitation<br>
/api/v1.0/stations<br>
/api/v1.0/tobs<br>
/api/v1.0/&lt;start_date&gt;<br>
/api/v1.0/&lt;start_date&gt;/&lt;end_date&gt;
";

/// Runs a façade query on the blocking pool.
async fn query<T, F>(state: &ApiState, run: F) -> Result<T, ApiError>
where
    T: Send + 'static,
    F: FnOnce(&Store) -> Result<T, StoreError> + Send + 'static,
{
    let store = Arc::clone(&state.store);
    let result = task::spawn_blocking(move || run(store.as_ref()))
        .await
        .map_err(StoreError::TaskJoin)??;

    Ok(result)
}

fn check_date(state: &ApiState, date: &str) -> Result<(), ApiError> {
    if state.date_policy.accepts(date) {
        Ok(())
    } else {
        Err(ApiError::InvalidDateFormat(date.to_string()))
    }
}

pub async fn home() -> Html<&'static str> {
    Html(HOME)
}

pub async fn precipitation(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<BTreeMap<String, Option<f64>>>, ApiError> {
    log::debug!("precipitation for the last year");
    let by_date = query(&state, climate::recent_precipitation).await?;
    Ok(Json(by_date))
}

pub async fn stations(State(state): State<Arc<ApiState>>) -> Result<Json<Vec<String>>, ApiError> {
    log::debug!("station list");
    let codes = query(&state, climate::stations).await?;
    Ok(Json(codes))
}

pub async fn tobs(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<Vec<Option<f64>>>, ApiError> {
    log::debug!("tobs for the most active station");
    let tobs = query(&state, climate::most_active_tobs).await?;
    Ok(Json(tobs))
}

pub async fn summary_from(
    State(state): State<Arc<ApiState>>,
    Path(start_date): Path<String>,
) -> Result<Json<Vec<TemperatureSummary>>, ApiError> {
    log::debug!("temperature summary from {}", start_date);
    check_date(&state, &start_date)?;

    let summary = query(&state, move |store| {
        climate::temperature_summary(store, &start_date, None)
    })
    .await?;
    Ok(Json(summary))
}

pub async fn summary_between(
    State(state): State<Arc<ApiState>>,
    Path((start_date, end_date)): Path<(String, String)>,
) -> Result<Json<Vec<TemperatureSummary>>, ApiError> {
    log::debug!("temperature summary from {} to {}", start_date, end_date);
    check_date(&state, &start_date)?;
    check_date(&state, &end_date)?;

    let summary = query(&state, move |store| {
        climate::temperature_summary(store, &start_date, Some(end_date.as_str()))
    })
    .await?;
    Ok(Json(summary))
}

// -- Tests -------------------------------------------------------------------
