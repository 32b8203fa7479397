//! Traktamente HTTP Server binary

use anyhow::Context;
use traktamente_server::{app, AppState, ServerConfig};
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,traktamente=debug")),
        )
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting Traktamente HTTP Server v{}", env!("CARGO_PKG_VERSION"));

    // Initialize Prometheus metrics
    traktamente_server::metrics::init_prometheus()?;
    traktamente_server::metrics::init_metrics();

    let config = ServerConfig::from_env().context("Invalid server configuration")?;

    let directory = config.load_directory().with_context(|| match &config.data_path {
        Some(path) => format!("Failed to load allowance dataset from {}", path.display()),
        None => "Failed to load bundled allowance dataset".to_string(),
    })?;
    traktamente_server::metrics::record_dataset_size(directory.len());

    let state = AppState::new(directory);
    let app = app(state.clone());

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("Server running on http://{}", addr);

    let shutdown_signal = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for shutdown signal: {}", e);
            std::future::pending::<()>().await;
        }
        info!("Received shutdown signal, shutting down gracefully...");
    };

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal)
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))?;

    info!(
        uptime_seconds = state.uptime_seconds(),
        "Server shutdown complete"
    );
    Ok(())
}
