//! Product domain model.

use sca_db::queries::products::ProductRow;
use serde::{Deserialize, Serialize};

/// Default reorder threshold applied when a product is created without one.
pub const DEFAULT_REORDER_LEVEL: i64 = 20;

/// A product owned by exactly one supplier.
///
/// Names are not globally unique; two suppliers may sell a "Widget".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub reorder_level: i64,
    pub supplier_id: i64,
    pub created_at: String,
}

impl Product {
    /// Create from database row.
    pub fn from_row(row: ProductRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            price: row.price,
            reorder_level: row.reorder_level,
            supplier_id: row.supplier_id,
            created_at: row.created_at,
        }
    }
}
