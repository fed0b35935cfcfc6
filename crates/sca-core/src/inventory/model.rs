//! Inventory domain models.

use sca_db::queries::inventory::{InventoryRow, LowStockRow};
use serde::{Deserialize, Serialize};

/// One stocking event: a quantity of a product placed in a warehouse.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryLot {
    pub id: i64,
    pub product_id: i64,
    pub warehouse_id: i64,
    pub quantity: i64,
    pub created_at: String,
}

impl InventoryLot {
    /// Create from database row.
    pub fn from_row(row: InventoryRow) -> Self {
        Self {
            id: row.id,
            product_id: row.product_id,
            warehouse_id: row.warehouse_id,
            quantity: row.quantity,
            created_at: row.created_at,
        }
    }
}

/// A product whose summed stock across all lots is below its reorder level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LowStockAlert {
    pub product_name: String,
    pub reorder_level: i64,
    pub total_quantity: i64,
}

impl LowStockAlert {
    /// Create from aggregation row.
    pub fn from_row(row: LowStockRow) -> Self {
        Self {
            product_name: row.product_name,
            reorder_level: row.reorder_level,
            total_quantity: row.total_quantity,
        }
    }
}
