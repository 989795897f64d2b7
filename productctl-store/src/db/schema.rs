//! Schema bootstrap for the products table

use sqlx::AnyPool;

use super::Statement;
use crate::error::{Result, StoreError};

/// Create the `products` table if it does not exist yet.
pub async fn ensure(pool: &AnyPool) -> Result<()> {
    tracing::info!("Ensuring products table exists...");

    sqlx::query(Statement::CreateTable.sql())
        .execute(pool)
        .await
        .map_err(|e| StoreError::execute(Statement::CreateTable, e))?;

    Ok(())
}
