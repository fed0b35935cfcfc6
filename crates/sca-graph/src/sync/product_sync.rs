//! Product projection.

use tracing::debug;

use sca_core::error::ScaResult;
use sca_db::DbPool;

use super::SyncStats;
use crate::error::GraphResult;
use crate::projection::ProjectionStore;

/// Merge a product node and its SUPPLIES edge into the projection.
///
/// The supplier node must already exist for the edge to appear: the edge
/// merge matches both endpoints and creates nothing when the supplier node
/// is absent. A rebuild heals such gaps.
pub async fn project_product<P: ProjectionStore>(
    store: &P,
    name: &str,
    supplier_name: &str,
) -> GraphResult<()> {
    store.upsert_node("Product", name, &[]).await?;
    store
        .upsert_edge("Supplier", supplier_name, "SUPPLIES", "Product", name)
        .await?;
    debug!(product = %name, supplier = %supplier_name, "Projected product node and SUPPLIES edge");
    Ok(())
}

/// Replay every product row (joined with its supplier name) into the
/// projection.
pub async fn sync_products<P: ProjectionStore>(store: &P, db: &DbPool) -> ScaResult<SyncStats> {
    let rows = sca_db::queries::products::list_products_with_suppliers(db)?;

    let mut stats = SyncStats::default();
    for row in &rows {
        project_product(store, &row.product_name, &row.supplier_name).await?;
        stats.nodes_synced += 1;
        stats.relationships_synced += 1;
    }
    Ok(stats)
}
