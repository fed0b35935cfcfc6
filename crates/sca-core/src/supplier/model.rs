//! Supplier domain model.

use sca_db::queries::suppliers::SupplierRow;
use serde::{Deserialize, Serialize};

/// A supplier of products, unique by name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Supplier {
    pub id: i64,
    pub name: String,
    pub country: String,
    pub created_at: String,
}

impl Supplier {
    /// Create from database row.
    pub fn from_row(row: SupplierRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            country: row.country,
            created_at: row.created_at,
        }
    }
}
