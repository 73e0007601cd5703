use anyhow::Context;
use newscan_core::Scraper;
use newscan_server::{AppState, ServerConfig, create_app};
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "newscan_server=info,newscan_core=info,tower_http=info";

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
    }
    tracing::info!("shutting down");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = ServerConfig::from_env().context("Invalid server configuration")?;
    let scraper = Scraper::new(config.fetch.clone()).context("Failed to build HTTP client")?;
    let app = create_app(AppState::new(scraper, config.request_timeout));

    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.addr))?;

    tracing::info!(
        addr = %config.addr,
        fetch_timeout = config.fetch.timeout,
        request_timeout = config.request_timeout.as_secs(),
        "newscan-server listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    Ok(())
}
