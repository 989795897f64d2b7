//! Connection settings for the CLI
//!
//! Precedence, highest first: `--database-url` flag, `DATABASE_URL`
//! (including a `.env` file), config file, built-in default.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use productctl_store::StoreConfig;

#[derive(Args, Debug, Default)]
pub struct ConnectionArgs {
    /// Database connection string (mysql://... or sqlite://...)
    #[arg(long, env = "DATABASE_URL", global = true, hide_env_values = true)]
    pub database_url: Option<String>,

    /// Config file to read instead of ~/.productctl/config.toml
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Per-operation deadline in milliseconds (default: none)
    #[arg(long, value_name = "MS", global = true)]
    pub timeout_ms: Option<u64>,
}

/// Build the store config from file and command-line overrides.
pub fn resolve(args: &ConnectionArgs) -> Result<StoreConfig> {
    let mut config = match &args.config {
        Some(path) => StoreConfig::load_from(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => StoreConfig::load().context("Failed to load config")?,
    };

    if let Some(url) = &args.database_url {
        config.database_url = url.clone();
    }
    if let Some(ms) = args.timeout_ms {
        config.statement_timeout_ms = Some(ms);
    }

    Ok(config)
}
