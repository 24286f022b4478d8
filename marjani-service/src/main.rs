//! Marjani service daemon.
//!
//! Loads configuration, opens the session store, and serves the HTTP API
//! until Ctrl-C.

use marjani_service::api;
use marjani_service::config::ServiceConfig;
use marjani_service::error::Result;
use marjani_service::storage::SessionStore;
use std::env;
use std::path::Path;
use tracing::{info, warn};

/// Parse config path from command line arguments.
///
/// Supports:
/// - `marjani-service <path>` (positional)
/// - `marjani-service --config <path>` (flag-based)
/// - `marjani-service -c <path>` (short flag)
fn parse_config_path() -> Option<String> {
    let args: Vec<String> = env::args().collect();

    // Look for --config or -c flag
    for i in 1..args.len() {
        if (args[i] == "--config" || args[i] == "-c") && i + 1 < args.len() {
            return Some(args[i + 1].clone());
        }
    }

    // Fall back to first positional argument (if it doesn't start with -)
    if args.len() > 1 && !args[1].starts_with('-') {
        return Some(args[1].clone());
    }

    None
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("marjani_service=info".parse().unwrap()),
        )
        .init();

    let config = match parse_config_path() {
        Some(path) => {
            info!("Loading configuration from {}", path);
            ServiceConfig::load(Path::new(&path))?
        }
        None if Path::new("marjani.toml").exists() => {
            info!("Loading configuration from marjani.toml");
            ServiceConfig::load(Path::new("marjani.toml"))?
        }
        None => {
            info!("Using default configuration");
            ServiceConfig::default()
        }
    };

    info!("Marjani service v{}", env!("CARGO_PKG_VERSION"));

    let store = SessionStore::open(&config.database.path)?;
    info!("Session store ready at {}", store.path().display());

    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address).await?;
    info!("Listening on {}", address);

    axum::serve(listener, api::build_router(store))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Marjani service stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received shutdown signal"),
        Err(e) => warn!("Failed to listen for shutdown signal: {}", e),
    }
}
