//! Database layer - connection pool, schema bootstrap, and the product repository
//!
//! - One pool, owned by [`ProductStore`], opened once and closed once
//! - Every operation is a single parameterized statement with `?` placeholders
//! - No transactions; each call is its own round trip

pub mod pool;
pub mod products;
pub mod schema;
pub mod statement;

pub use pool::create_pool;
pub use products::ProductStore;
pub use statement::Statement;
