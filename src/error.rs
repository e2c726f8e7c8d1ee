use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to open database '{0}'")]
    Open(PathBuf, #[source] rusqlite::Error),

    #[error("Database is missing the '{0}' table")]
    MissingTable(&'static str),

    #[error("Database query failed")]
    Query(#[from] rusqlite::Error),

    #[error("No measurements in database")]
    EmptyStore,

    #[error("Stored date '{0}' is not in YYYY-MM-DD form")]
    CorruptDate(String, #[source] chrono::ParseError),

    // Covers errors joining the blocking query task
    #[error("Background query task failed to complete")]
    TaskJoin(#[from] tokio::task::JoinError),

    #[error("Database connection lock was poisoned")]
    Poisoned,
}
