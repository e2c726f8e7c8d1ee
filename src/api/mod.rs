//! HTTP surface of the climate API.
//!
//! # Endpoints
//!
//! - `/` - Route listing
//! - `/api/v1.0/precipitation` - Precipitation by date over the last year
//! - `/api/v1.0/stations` - Station codes
//! - `/api/v1.0/tobs` - Last year of temperatures at the most active station
//! - `/api/v1.0/:start_date` - Temperature summary from a date
//! - `/api/v1.0/:start_date/:end_date` - Temperature summary between dates

pub mod error;
pub mod routes;

use std::sync::Arc;

use axum::{routing::get, Router};

use crate::{climate::DatePolicy, db::Store};

pub use error::ApiError;

/// State shared across handlers.
pub struct ApiState {
    pub store: Arc<Store>,
    pub date_policy: DatePolicy,
}

impl ApiState {
    pub fn new(store: Store, date_policy: DatePolicy) -> Self {
        Self {
            store: Arc::new(store),
            date_policy,
        }
    }
}

pub fn router(state: Arc<ApiState>) -> Router {
    Router::new()
        .route("/", get(routes::home))
        .route("/api/v1.0/precipitation", get(routes::precipitation))
        .route("/api/v1.0/stations", get(routes::stations))
        .route("/api/v1.0/tobs", get(routes::tobs))
        .route("/api/v1.0/:start_date", get(routes::summary_from))
        .route("/api/v1.0/:start_date/:end_date", get(routes::summary_between))
        .with_state(state)
}
