use anyhow::{anyhow, Context, Result};
use clap::Parser;
use latency_api::{create_router, AppState, ServerConfig};
use latency_core::load_dataset_from_file;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let config = ServerConfig::parse();
    init_tracing(&config.log_level).context("initialize tracing subscriber")?;

    if let Err(err) = run(config).await {
        error!(error = ?err, "fatal latency API error");
        std::process::exit(1);
    }
    Ok(())
}

async fn run(config: ServerConfig) -> Result<()> {
    let dataset = load_dataset_from_file(&config.telemetry)
        .await
        .with_context(|| format!("load telemetry from {}", config.telemetry.display()))?;
    info!(
        path = %config.telemetry.display(),
        records = dataset.len(),
        regions = dataset.region_count(),
        "telemetry loaded"
    );

    let app = create_router(AppState::new(dataset));

    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("bind {}", config.bind))?;
    info!("Starting latency API on {}", config.bind);
    info!("Endpoints:");
    info!("  GET  /health        - Health check");
    info!("  POST /api/latency   - Per-region latency statistics");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("serve HTTP API")?;

    info!("latency API stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}

fn init_tracing(default_level: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{default_level},tower_http=info")));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .map_err(|err| anyhow!("tracing subscriber init: {err}"))
}
