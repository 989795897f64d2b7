//! Product repository
//!
//! Single-statement CRUD against `products(id, name, price)`:
//! - insert/update/select-one/delete: explicit prepare, then execute
//! - select-all: direct query, rows in whatever order the engine returns
//!
//! Update and delete do not treat "zero rows affected" as an error. They
//! return the affected count instead and log a warning, so callers that
//! care can check it.

use std::future::Future;
use std::time::Duration;

use sqlx::any::AnyStatement;
use sqlx::{AnyPool, Executor as _, Statement as _};
use tracing::{debug, warn};

use super::{pool, schema, Statement};
use crate::config::StoreConfig;
use crate::error::{is_unique_violation, Result, StoreError};
use crate::product::Product;

/// Product repository. Owns the connection pool.
pub struct ProductStore {
    pool: AnyPool,
    statement_timeout: Option<Duration>,
}

impl ProductStore {
    /// Open the pool described by `config`.
    pub async fn connect(config: &StoreConfig) -> Result<Self> {
        debug!(url = %config.redacted_url(), "connecting to database");

        let pool = pool::create_pool(config)
            .await
            .map_err(StoreError::connect)?;

        Ok(Self::from_pool(pool, config.statement_timeout()))
    }

    pub fn from_pool(pool: AnyPool, statement_timeout: Option<Duration>) -> Self {
        Self {
            pool,
            statement_timeout,
        }
    }

    /// Create the `products` table if missing.
    pub async fn ensure_schema(&self) -> Result<()> {
        self.bounded(Statement::CreateTable, schema::ensure(&self.pool))
            .await
    }

    /// Write a new row. Fails with [`StoreError::DuplicateId`] if the id is
    /// already present; there is no upsert.
    pub async fn insert(&self, product: &Product) -> Result<()> {
        self.bounded(Statement::Insert, async {
            let stmt = self.prepare(Statement::Insert).await?;

            stmt.query()
                .bind(product.id())
                .bind(product.name.as_str())
                .bind(product.price)
                .execute(&self.pool)
                .await
                .map_err(|e| {
                    if is_unique_violation(&e) {
                        StoreError::duplicate_id(product.id())
                    } else {
                        StoreError::execute(Statement::Insert, e)
                    }
                })?;

            debug!(id = product.id(), "inserted product");
            Ok(())
        })
        .await
    }

    /// Overwrite `name` and `price` of the row matching `product.id()`.
    ///
    /// Succeeds even when no row matches. Returns the number of rows
    /// affected so that case can be detected.
    pub async fn update(&self, product: &Product) -> Result<u64> {
        self.bounded(Statement::Update, async {
            let stmt = self.prepare(Statement::Update).await?;

            let affected = stmt
                .query()
                .bind(product.name.as_str())
                .bind(product.price)
                .bind(product.id())
                .execute(&self.pool)
                .await
                .map_err(|e| StoreError::execute(Statement::Update, e))?
                .rows_affected();

            if affected == 0 {
                warn!(id = product.id(), "update matched no rows");
            } else {
                debug!(id = product.id(), affected, "updated product");
            }
            Ok(affected)
        })
        .await
    }

    /// Fetch exactly one product by id.
    pub async fn find(&self, id: &str) -> Result<Product> {
        self.bounded(Statement::SelectOne, async {
            let stmt = self.prepare(Statement::SelectOne).await?;

            stmt.query_as::<Product>()
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| StoreError::execute(Statement::SelectOne, e))?
                .ok_or_else(|| StoreError::not_found(id))
        })
        .await
    }

    /// Fetch every product. An empty table is an empty `Vec`, not an error.
    pub async fn list(&self) -> Result<Vec<Product>> {
        self.bounded(Statement::SelectAll, async {
            let products = sqlx::query_as::<_, Product>(Statement::SelectAll.sql())
                .fetch_all(&self.pool)
                .await
                .map_err(|e| StoreError::execute(Statement::SelectAll, e))?;

            debug!(count = products.len(), "listed products");
            Ok(products)
        })
        .await
    }

    /// Remove the row matching `id`.
    ///
    /// Succeeds even when no row matches. Returns the number of rows
    /// affected so that case can be detected.
    pub async fn delete(&self, id: &str) -> Result<u64> {
        self.bounded(Statement::Delete, async {
            let stmt = self.prepare(Statement::Delete).await?;

            let affected = stmt
                .query()
                .bind(id)
                .execute(&self.pool)
                .await
                .map_err(|e| StoreError::execute(Statement::Delete, e))?
                .rows_affected();

            if affected == 0 {
                warn!(id, "delete matched no rows");
            } else {
                debug!(id, "deleted product");
            }
            Ok(affected)
        })
        .await
    }

    /// Close the pool, waiting for the connection to be released.
    pub async fn close(self) {
        self.pool.close().await;
    }

    async fn prepare(&self, statement: Statement) -> Result<AnyStatement<'static>> {
        debug!(%statement, sql = statement.sql(), "preparing statement");

        self.pool
            .prepare(statement.sql())
            .await
            .map_err(|e| StoreError::prepare(statement, e))
    }

    /// Run `fut` under the configured deadline, if any.
    async fn bounded<T, F>(&self, statement: Statement, fut: F) -> Result<T>
    where
        F: Future<Output = Result<T>>,
    {
        match self.statement_timeout {
            Some(after) => tokio::time::timeout(after, fut)
                .await
                .map_err(|_| StoreError::Timeout { statement, after })?,
            None => fut.await,
        }
    }
}
