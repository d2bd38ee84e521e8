use std::sync::Arc;

use anyhow::Context;
use apod_core::ApodClient;
use apod_page::{AppState, Config, UreqTransport};
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is fine; the process environment still applies.
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    let filter = EnvFilter::try_new(&config.log_level)
        .unwrap_or_else(|_| EnvFilter::new(apod_page::config::DEFAULT_LOG_LEVEL));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    if !config.has_api_key() {
        warn!("NASA_API_KEY is not set, requests will go out with an empty key");
    }

    let client = ApodClient::new(&config.endpoint, &config.api_key)?;
    let state = AppState::new(client, Arc::new(UreqTransport::new()));

    let listener = TcpListener::bind(config.listen_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.listen_addr))?;
    info!(addr = %config.listen_addr, endpoint = %config.endpoint, "serving picture of the day");

    apod_page::server::run(listener, state).await?;
    Ok(())
}
