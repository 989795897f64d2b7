//! Structured error types for the product store.
//!
//! The library never exits the process; every failure comes back as a
//! `StoreError` and the binary decides what to do with it.

use std::time::Duration;

use thiserror::Error;

use crate::db::Statement;

/// Main error type for product store operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// Could not open the connection pool
    #[error("failed to connect to database: {source}")]
    Connect { source: sqlx::Error },

    /// The database rejected the statement at prepare time
    #[error("failed to prepare {statement} statement: {source}")]
    Prepare {
        statement: Statement,
        source: sqlx::Error,
    },

    /// Statement ran but failed (constraint, bad parameter, lost connection)
    #[error("{statement} statement failed: {source}")]
    Execute {
        statement: Statement,
        source: sqlx::Error,
    },

    /// Insert hit the primary key constraint
    #[error("product '{id}' already exists")]
    DuplicateId { id: String },

    /// A row could not be mapped onto a `Product`
    #[error("failed to decode product row: {source}")]
    Decode { source: sqlx::Error },

    /// Select-one matched no rows
    #[error("product not found: '{id}'")]
    NotFound { id: String },

    /// Configured statement deadline elapsed
    #[error("{statement} statement timed out after {after:?}")]
    Timeout {
        statement: Statement,
        after: Duration,
    },

    /// Config file could not be read or parsed
    #[error("configuration error: {reason}")]
    Config { reason: String },
}

/// Result type alias for product store operations
pub type Result<T> = std::result::Result<T, StoreError>;

impl StoreError {
    pub fn connect(source: sqlx::Error) -> Self {
        Self::Connect { source }
    }

    pub fn prepare(statement: Statement, source: sqlx::Error) -> Self {
        Self::Prepare { statement, source }
    }

    /// Classify an error raised while running `statement`.
    ///
    /// Column and type mapping failures become [`StoreError::Decode`];
    /// everything else is an execution failure.
    pub fn execute(statement: Statement, source: sqlx::Error) -> Self {
        match source {
            sqlx::Error::ColumnDecode { .. }
            | sqlx::Error::ColumnNotFound(_)
            | sqlx::Error::ColumnIndexOutOfBounds { .. }
            | sqlx::Error::Decode(_) => Self::Decode { source },
            source => Self::Execute { statement, source },
        }
    }

    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound { id: id.into() }
    }

    pub fn duplicate_id(id: impl Into<String>) -> Self {
        Self::DuplicateId { id: id.into() }
    }

    pub fn config(reason: impl Into<String>) -> Self {
        Self::Config {
            reason: reason.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// True when the driver reports a unique or primary key violation.
pub(crate) fn is_unique_violation(err: &sqlx::Error) -> bool {
    err.as_database_error()
        .map(|db| db.is_unique_violation())
        .unwrap_or(false)
}
