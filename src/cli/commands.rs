//! CLI command implementations
//!
//! Both commands load configuration, open the store (creating the schema on
//! first run), and go from there; tracing is initialized once at dispatch.

use std::path::Path;

use tracing_subscriber::EnvFilter;

use crate::config::ServerConfig;
use crate::http_server::HttpServer;
use crate::store::Store;

use super::args::{Cli, Command};
use super::errors::CliResult;

/// Parse arguments and dispatch to the selected command
pub async fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    init_tracing();

    match cli.command {
        Command::Start { config } => start(&config).await,
        Command::Seed { config } => seed(&config).await,
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

/// Open the store and serve the API until shutdown
pub async fn start(config_path: &Path) -> CliResult<()> {
    let config = ServerConfig::load(config_path)?;
    tracing::info!(config = %config_path.display(), database = %config.database_path, "booting");

    let store = Store::open(&config.database_path).await?;
    let server = HttpServer::new(config, store);
    server.start().await?;

    Ok(())
}

/// Create the schema and load the sample data set
pub async fn seed(config_path: &Path) -> CliResult<()> {
    let config = ServerConfig::load(config_path)?;
    let store = Store::open(&config.database_path).await?;
    store.seed_sample().await?;

    tracing::info!(database = %config.database_path, "seed complete");
    Ok(())
}
