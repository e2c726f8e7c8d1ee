//! Date handling for stored `YYYY-MM-DD` strings and request path dates.

use chrono::{Duration, NaiveDate};

use crate::error::StoreError;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Days covered by the "last year" window.
const WINDOW_DAYS: i64 = 365;

/// First day of the last-year window ending on `most_recent`.
pub fn observation_window_start(most_recent: &str) -> Result<String, StoreError> {
    let date = NaiveDate::parse_from_str(most_recent, DATE_FORMAT)
        .map_err(|e| StoreError::CorruptDate(most_recent.to_string(), e))?;

    Ok((date - Duration::days(WINDOW_DAYS))
        .format(DATE_FORMAT)
        .to_string())
}

/// How start and end dates taken from request paths are checked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DatePolicy {
    /// Any string is accepted and compared as text against stored dates.
    #[default]
    Permissive,
    /// Dates must parse as `YYYY-MM-DD`.
    Strict,
}

impl DatePolicy {
    pub fn accepts(self, date: &str) -> bool {
        match self {
            DatePolicy::Permissive => true,
            // chrono accepts unpadded fields, which would break text ordering
            DatePolicy::Strict => {
                date.len() == 10 && NaiveDate::parse_from_str(date, DATE_FORMAT).is_ok()
            }
        }
    }
}

// -- Tests -------------------------------------------------------------------
