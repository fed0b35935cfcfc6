//! Warehouse domain model.

use sca_db::queries::warehouses::WarehouseRow;
use serde::{Deserialize, Serialize};

/// A storage location, unique by `location`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Warehouse {
    pub id: i64,
    pub location: String,
    pub capacity: i64,
    pub created_at: String,
}

impl Warehouse {
    /// Create from database row.
    pub fn from_row(row: WarehouseRow) -> Self {
        Self {
            id: row.id,
            location: row.location,
            capacity: row.capacity,
            created_at: row.created_at,
        }
    }
}
