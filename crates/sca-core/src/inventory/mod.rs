//! Inventory stocking and the low-stock aggregation.

pub mod model;

use sca_db::queries::inventory as queries;
use sca_db::DbPool;
use tracing::debug;

use crate::error::{ScaError, ScaResult};
pub use model::{InventoryLot, LowStockAlert};

/// Record a stocking event for a product in a warehouse.
///
/// Both references are validated against live rows before the insert; the
/// FK constraints remain as the backstop.
pub fn add_lot(
    pool: &DbPool,
    product_id: i64,
    warehouse_id: i64,
    quantity: i64,
) -> ScaResult<InventoryLot> {
    if quantity < 0 {
        return Err(ScaError::validation("lot quantity must be non-negative"));
    }
    crate::product::get_product(pool, product_id)?;
    sca_db::queries::warehouses::get_warehouse(pool, warehouse_id).map_err(|e| match e {
        sca_db::DbError::NotFound(_) => ScaError::reference_not_found("Warehouse", warehouse_id),
        e => e.into(),
    })?;

    let id = queries::insert_lot(pool, product_id, warehouse_id, quantity)?;

    let row = queries::get_lot(pool, id)?;
    Ok(InventoryLot::from_row(row))
}

/// List inventory lots, paginated.
pub fn list_inventory(pool: &DbPool, offset: i64, limit: i64) -> ScaResult<Vec<InventoryLot>> {
    let rows = queries::list_inventory(pool, offset, limit)?;
    Ok(rows.into_iter().map(InventoryLot::from_row).collect())
}

/// Products whose summed stock fell below their reorder level.
///
/// Snapshot semantics and the inner-join zero-lot policy are documented on
/// the underlying query.
pub fn low_stock_alerts(pool: &DbPool) -> ScaResult<Vec<LowStockAlert>> {
    let rows = queries::low_stock_alerts(pool)?;
    debug!(alerts = rows.len(), "Computed low-stock alerts");
    Ok(rows.into_iter().map(LowStockAlert::from_row).collect())
}
