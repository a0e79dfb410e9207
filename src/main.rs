//! primegen HTTP server entry point
//!
//! Starts the REST API server exposing `GET /primes`.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use primegen::core::config::{Config, LogFormat, LoggingConfig};
use primegen::core::services::Services;
use primegen::core::xdg::XdgDirs;
use primegen::http;

/// Initialize tracing from RUST_LOG, falling back to the configured filter
fn init_logging(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.filter));

    let registry = tracing_subscriber::registry().with(filter);
    match logging.format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Compact => registry
            .with(tracing_subscriber::fmt::layer().compact())
            .init(),
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        return;
    }
    tracing::info!("Shutdown signal received");
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Configuration decides the log format, so it loads first
    let config = Config::load()?;
    init_logging(&config.logging);

    tracing::info!("Starting primegen service");
    tracing::info!("Version: {}", env!("CARGO_PKG_VERSION"));

    XdgDirs::new().log_paths();
    config.log_config();

    let addr = config.server.addr();
    let services = Arc::new(Services::new(config));
    let app = http::router(services);

    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Listening on {}", addr);
    tracing::info!("Service ready - try http://{}/primes?generationLimit=100", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
