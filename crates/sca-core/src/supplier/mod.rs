//! Supplier reads.
//!
//! Supplier creation is a dual-store write and lives with the
//! synchronization coordinator in `sca-graph`.

pub mod model;

use sca_db::queries::suppliers as queries;
use sca_db::{DbError, DbPool};

use crate::error::{ScaError, ScaResult};
use crate::product::model::Product;
pub use model::Supplier;

/// Get a supplier by id.
pub fn get_supplier(pool: &DbPool, id: i64) -> ScaResult<Supplier> {
    let row = queries::get_supplier(pool, id).map_err(|e| match e {
        DbError::NotFound(_) => ScaError::reference_not_found("Supplier", id),
        e => e.into(),
    })?;
    Ok(Supplier::from_row(row))
}

/// List suppliers, paginated.
pub fn list_suppliers(pool: &DbPool, offset: i64, limit: i64) -> ScaResult<Vec<Supplier>> {
    let rows = queries::list_suppliers(pool, offset, limit)?;
    Ok(rows.into_iter().map(Supplier::from_row).collect())
}

/// List the products owned by one supplier.
pub fn list_products_of(pool: &DbPool, supplier_id: i64) -> ScaResult<Vec<Product>> {
    // Validate the reference so an unknown supplier is an error, not an
    // empty list.
    get_supplier(pool, supplier_id)?;

    let rows = sca_db::queries::products::list_products_by_supplier(pool, supplier_id)?;
    Ok(rows.into_iter().map(Product::from_row).collect())
}
