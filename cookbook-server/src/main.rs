//! Cookbook Server - REST API for the recipe cookbook

mod config;
mod http_api;

use std::sync::Arc;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use config::ServerConfig;
use http_api::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Set up logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = ServerConfig::from_env()?;

    // The cookbook is process-lifetime state, created empty at startup.
    let state = Arc::new(AppState::new());
    let app = http_api::router(state);

    let addr = config.bind_addr();
    info!("Starting cookbook server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
