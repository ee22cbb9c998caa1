//! Server binary
//!
//! Reads its configuration from the YAML file named by `CHALLENGES_CONFIG`
//! (defaults otherwise), seeds the in-memory store from the configured
//! fixture file, and serves until SIGTERM or Ctrl+C.

use anyhow::{Context, Result};
use challenges::config::AppConfig;
use challenges::fixtures::Fixtures;
use challenges::server::ServerBuilder;
use challenges::storage::EntityStore;
use tracing_subscriber::EnvFilter;

const CONFIG_ENV: &str = "CHALLENGES_CONFIG";

#[tokio::main]
async fn main() -> Result<()> {
    let config = match std::env::var(CONFIG_ENV) {
        Ok(path) => AppConfig::from_yaml_file(&path)
            .with_context(|| format!("loading configuration from {}", path))?,
        Err(_) => AppConfig::default(),
    };

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_filter))
        .context("invalid log filter")?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let store = EntityStore::in_memory();

    if let Some(path) = &config.fixtures {
        Fixtures::from_yaml_file(path)
            .with_context(|| format!("loading fixtures from {}", path))?
            .seed(&store)
            .await?;
    }

    ServerBuilder::new()
        .with_store(store)
        .with_config(&config)
        .serve(&config.server.address())
        .await
}
