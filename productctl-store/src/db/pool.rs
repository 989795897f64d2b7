//! Database connection pool management
//!
//! Uses the sqlx `Any` driver so the same statements run against MySQL in
//! production and SQLite in tests.

use sqlx::any::{install_default_drivers, AnyPoolOptions};
use sqlx::AnyPool;

use crate::config::StoreConfig;

/// Create a connection pool from `config`.
///
/// # Errors
///
/// Returns an error if the URL scheme is unknown or the first connection fails.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool(&StoreConfig::new("sqlite::memory:")).await?;
/// ```
pub async fn create_pool(config: &StoreConfig) -> Result<AnyPool, sqlx::Error> {
    install_default_drivers();

    let mut options = AnyPoolOptions::new().max_connections(config.max_connections.max(1));

    // Every in-memory SQLite connection is its own empty database, so the
    // pool must hold exactly one and never recycle it
    if is_in_memory(&config.database_url) {
        options = options
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None);
    }

    options.connect(&config.database_url).await
}

fn is_in_memory(url: &str) -> bool {
    url.starts_with("sqlite:") && url.contains(":memory:")
}
