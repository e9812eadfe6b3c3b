//! Votebox API Server
//!
//! Run with: cargo run --bin votebox-api
//!
//! # Configuration
//!
//! Loaded from config.toml (see `votebox-cli config`), with environment
//! variable overrides:
//! - `VOTEBOX_DATA_DIR`: Directory holding tally.json
//! - `VOTEBOX_API_HOST`: Host to bind to (default: 0.0.0.0)
//! - `VOTEBOX_API_PORT`: Port to listen on (default: 8086)
//! - `VOTEBOX_LOG_LEVEL`: Log level (default: info)
//! - `VOTEBOX_LOG_FORMAT`: pretty or json (default: pretty)
//! - `RUST_LOG`: Overrides the log filter entirely

use votebox::api::{serve, ApiConfig, AppState};
use votebox::config::Config;
use votebox::ledger::{LedgerConfig, TallyStore, VoteLedger};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_default();

    init_tracing(&config);

    tracing::info!("Starting Votebox API server v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Data directory: {}", config.ledger.data_dir);

    // Open the ledger. A corrupt tally file is fatal here: refusing to
    // start beats silently zeroing recorded votes.
    let ledger_config = LedgerConfig::new(&config.ledger.data_dir);
    let ledger = match VoteLedger::open(TallyStore::new(&ledger_config)) {
        Ok(ledger) => Arc::new(ledger),
        Err(e) => {
            tracing::error!(
                "Cannot open vote ledger at {:?}: {}",
                ledger_config.tally_path(),
                e
            );
            tracing::error!("Fix or remove the tally file, then restart");
            std::process::exit(1);
        }
    };

    let api_config = ApiConfig {
        host: config.api.host.clone(),
        port: config.api.port,
        cors_origins: config.api.cors_origins.clone(),
    };

    let state = AppState::new(ledger, api_config.clone());

    tracing::info!("Starting server on {}:{}", api_config.host, api_config.port);
    serve(state, &api_config).await?;

    tracing::info!("Votebox API server stopped");
    Ok(())
}

/// Initialize tracing from the logging config
fn init_tracing(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("votebox={},tower_http=debug", config.logging.level).into()
    });

    let registry = tracing_subscriber::registry().with(filter);

    if config.logging.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
