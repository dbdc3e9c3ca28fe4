//! # Roster Server Binary
//!
//! Main entrypoint for the roster record-management server.

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use roster_config::load_or_default;
use roster_store::StorageFactory;

#[derive(Parser, Debug)]
#[command(name = "rosterd")]
#[command(about = "Roster person record service", long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.yaml")]
    config: String,

    /// Server port (overrides config)
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse();

    // Load configuration
    let mut config = load_or_default(&args.config);

    // Override with CLI args
    if let Some(port) = args.port {
        config.server.port = port;
    }

    // Validate configuration
    if let Err(e) = config.validate() {
        eprintln!("Configuration validation error: {}", e);
        std::process::exit(1);
    }

    // Initialize observability
    roster_observe::init_with_filter(&config.observability.log_level)?;

    tracing::info!("Starting roster record service");

    let config = Arc::new(config);

    // Initialize storage backend
    let store = StorageFactory::from_str(
        &config.store.backend,
        config.store.connection_string.clone(),
    )
    .await
    .map_err(|e| anyhow::anyhow!("Failed to initialize storage backend: {}", e))?;
    tracing::info!(backend = %config.store.backend, "Storage backend initialized");

    if config.sample.seed.is_some() {
        tracing::info!("Sample-record generator running with a fixed seed");
    }

    // Start API server
    tracing::info!("Starting API server on {}:{}", config.server.host, config.server.port);

    roster_api::serve(store, config).await?;

    Ok(())
}
