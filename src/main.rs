//! Paycheck Digest server entry point.

use std::error::Error;
use std::sync::Arc;

use clap::Parser;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use paycheck_digest::api::{AppState, create_router};
use paycheck_digest::config::ConfigLoader;
use paycheck_digest::digest::UnconfiguredExtractor;
use paycheck_digest::store::InMemoryRecordStore;

/// Command line arguments.
#[derive(Parser, Debug)]
#[command(name = "paycheck-digest")]
#[command(about = "Paystub digest and analytics server")]
struct Args {
    /// Directory containing service.yaml
    #[arg(long, default_value = "./config/paydigest")]
    config: String,

    /// Override the configured bind address (e.g. 0.0.0.0:8000)
    #[arg(long)]
    bind: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("paycheck_digest={log_level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for shutdown signal");
    }
    info!("Received shutdown signal");
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    init_tracing(&args.log_level);

    let config = ConfigLoader::load(&args.config)?.into_config();
    let bind_address = args
        .bind
        .clone()
        .unwrap_or_else(|| config.server.bind_address.clone());

    info!(
        config_dir = %args.config,
        budget_cap_cents = config.budget.max_cost_cents,
        rate_limit = config.rate_limit.max_requests,
        "Configuration loaded"
    );

    let state = AppState::new(
        &config,
        Arc::new(InMemoryRecordStore::new()),
        Arc::new(UnconfiguredExtractor),
    );
    let router = create_router(state);

    let listener = TcpListener::bind(&bind_address).await?;
    info!(address = %listener.local_addr()?, "Paycheck Digest listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
