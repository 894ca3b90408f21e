//! ai-worker: the Chronos AI worker process.
//!
//! Application entry point. Parses the command line, loads configuration,
//! initializes tracing, builds the router and serves it until a shutdown
//! signal arrives.

use std::time::Duration;

use axum_server::Handle;
use clap::Parser;

use ai_worker::config::{resolve_log_filter, AppConfig, DEFAULT_CONFIG_PATH, ENV_LOG_FILTER};
use ai_worker::http::{setup_shutdown_handler, start_server};
use ai_worker::logging::init_tracing;
use ai_worker::{create_router, AppError};

/// Chronos AI worker
#[derive(Parser, Debug)]
#[command(name = "ai-worker", version, about)]
struct Args {
    /// Path to configuration file (default: config/default.toml if present)
    #[arg(short, long)]
    config: Option<String>,

    /// Log level filter (e.g., "ai_worker=debug,tower_http=info")
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::load_or_default(DEFAULT_CONFIG_PATH)?,
    }
    .with_env_overrides(|key| std::env::var(key).ok())?;

    let log_filter = resolve_log_filter(args.log_level, std::env::var(ENV_LOG_FILTER).ok());
    init_tracing(&log_filter, config.logging.format)?;

    tracing::info!(
        service = %config.service.name,
        host = %config.http.host,
        port = config.http.port,
        tls = ?config.http.tls.mode,
        "Loaded configuration"
    );

    let app = create_router();

    let handle = Handle::new();
    setup_shutdown_handler(
        handle.clone(),
        Duration::from_secs(config.http.shutdown_timeout_seconds),
    );

    start_server(app, &config.http, handle).await?;

    tracing::info!("Server shut down gracefully");
    Ok(())
}
