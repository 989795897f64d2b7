//! productctl-store: data-access layer for the `products` table
//!
//! One entity ([`Product`]), one repository ([`ProductStore`]), one table.
//! Every operation is a single parameterized statement; there are no
//! transactions, retries, or batching.

pub mod config;
pub mod db;
pub mod error;
pub mod product;

pub use config::StoreConfig;
pub use db::{ProductStore, Statement};
pub use error::{Result, StoreError};
pub use product::Product;
