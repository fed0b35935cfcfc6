//! Warehouse management.
//!
//! Warehouses have no graph projection, so creation writes only the
//! primary store.

pub mod model;

use sca_db::queries::warehouses as queries;
use sca_db::{DbError, DbPool};

use crate::error::{ScaError, ScaResult};
pub use model::Warehouse;

/// Create a warehouse.
///
/// The by-location pre-check gives a fast duplicate answer; the UNIQUE
/// constraint settles races between concurrent creations.
pub fn create_warehouse(pool: &DbPool, location: &str, capacity: i64) -> ScaResult<Warehouse> {
    if capacity <= 0 {
        return Err(ScaError::validation("warehouse capacity must be positive"));
    }
    if queries::get_warehouse_by_location(pool, location)?.is_some() {
        return Err(ScaError::duplicate("warehouse", location));
    }

    let id = queries::insert_warehouse(pool, location, capacity).map_err(|e| match e {
        DbError::Duplicate(_) => ScaError::duplicate("warehouse", location),
        e => e.into(),
    })?;

    let row = queries::get_warehouse(pool, id)?;
    Ok(Warehouse::from_row(row))
}

/// List warehouses, paginated.
pub fn list_warehouses(pool: &DbPool, offset: i64, limit: i64) -> ScaResult<Vec<Warehouse>> {
    let rows = queries::list_warehouses(pool, offset, limit)?;
    Ok(rows.into_iter().map(Warehouse::from_row).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sca_db::migrations::run_migrations;

    fn pool() -> DbPool {
        let pool = DbPool::in_memory().unwrap();
        run_migrations(&pool).unwrap();
        pool
    }

    #[test]
    fn create_then_duplicate_location() {
        let pool = pool();
        let w = create_warehouse(&pool, "Hamburg", 5000).unwrap();
        assert_eq!(w.location, "Hamburg");

        let err = create_warehouse(&pool, "Hamburg", 100).unwrap_err();
        assert!(matches!(err, ScaError::DuplicateName { .. }));
    }

    #[test]
    fn capacity_must_be_positive() {
        let pool = pool();
        let err = create_warehouse(&pool, "Hamburg", 0).unwrap_err();
        assert!(matches!(err, ScaError::Validation(_)));
        assert!(list_warehouses(&pool, 0, 10).unwrap().is_empty());
    }
}
