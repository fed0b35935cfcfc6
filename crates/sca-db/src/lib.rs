//! # SCA Database Layer
//!
//! Primary store adapter for Supply Chain Atlas.
//!
//! Holds the canonical supply-chain dataset (suppliers, products,
//! warehouses, inventory lots) in SQLite. Provides schema migrations,
//! per-entity queries, and the low-stock aggregation. The graph projection
//! is derived from the rows stored here and is never authoritative.

pub mod migrations;
pub mod pool;
pub mod queries;

pub use pool::{DbError, DbPool, DbResult};

/// Open a pool reading `SCA_DB_PATH` from the environment (or default).
pub fn init_pool_from_env() -> DbResult<DbPool> {
    let path = std::env::var("SCA_DB_PATH").unwrap_or_else(|_| "sca.db".to_string());
    DbPool::open(path)
}
