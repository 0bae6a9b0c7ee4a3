//! Serving binary for the compliance notification engine.
//!
//! Wires together the configuration, the daily scheduled job, and the HTTP
//! trigger endpoint. The evaluation engine itself stays a pure library.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use compliance_engine::api::{AppState, create_router};
use compliance_engine::config::load_config;
use compliance_engine::schedule::start_daily_job;

/// Tracks employee drug-test deadlines and emits webhook notifications.
#[derive(Debug, Parser)]
#[command(name = "compliance-engine", version, about)]
struct Args {
    /// Path to the tracker configuration file.
    #[arg(long, default_value = "config/tracker.yaml")]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let config = load_config(&args.config)
        .with_context(|| format!("loading configuration from {}", args.config.display()))?;

    let state = AppState::new(config);

    // The scheduler must stay alive for the process lifetime.
    let _scheduler = start_daily_job(state.clone()).await?;

    let bind_addr = state.config().bind_addr.clone();
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("binding {}", bind_addr))?;
    info!(addr = %bind_addr, "Compliance tracker listening");

    axum::serve(listener, create_router(state)).await?;

    Ok(())
}
