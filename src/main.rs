mod api;
mod cli;
mod climate;
mod config;
mod db;
mod error;

use std::sync::Arc;

use anyhow::{Context, Error, Result};
use clap::Parser;
use cli::Cli;
use tokio::net::TcpListener;

use crate::{api::ApiState, db::Store};

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Cli::parse().config();

    let store = Store::open(&config.database)
        .with_context(|| format!("Cannot serve without `{}`", config.database.display()))?;
    log::info!("Reading climate data from `{}`", config.database.display());

    let state = Arc::new(ApiState::new(store, config.date_policy));
    let app = api::router(state);

    let listener = TcpListener::bind(config.socket_addr())
        .await
        .with_context(|| format!("Failed to bind {}", config.socket_addr()))?;
    log::info!("Climate API available at http://{}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
