//! Product reads.
//!
//! Product creation is a dual-store write and lives with the
//! synchronization coordinator in `sca-graph`.

pub mod model;

use sca_db::queries::products as queries;
use sca_db::{DbError, DbPool};

use crate::error::{ScaError, ScaResult};
pub use model::{Product, DEFAULT_REORDER_LEVEL};

/// Get a product by id.
pub fn get_product(pool: &DbPool, id: i64) -> ScaResult<Product> {
    let row = queries::get_product(pool, id).map_err(|e| match e {
        DbError::NotFound(_) => ScaError::reference_not_found("Product", id),
        e => e.into(),
    })?;
    Ok(Product::from_row(row))
}

/// List products, paginated.
pub fn list_products(pool: &DbPool, offset: i64, limit: i64) -> ScaResult<Vec<Product>> {
    let rows = queries::list_products(pool, offset, limit)?;
    Ok(rows.into_iter().map(Product::from_row).collect())
}
