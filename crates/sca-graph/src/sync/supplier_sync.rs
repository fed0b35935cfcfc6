//! Supplier projection.

use tracing::debug;

use sca_core::error::ScaResult;
use sca_db::DbPool;

use super::SyncStats;
use crate::error::GraphResult;
use crate::projection::ProjectionStore;

/// Merge a supplier node into the projection.
///
/// Keyed by name; re-applying updates `country` rather than duplicating.
pub async fn project_supplier<P: ProjectionStore>(
    store: &P,
    name: &str,
    country: &str,
) -> GraphResult<()> {
    store
        .upsert_node("Supplier", name, &[("country", country)])
        .await?;
    debug!(supplier = %name, "Projected supplier node");
    Ok(())
}

/// Replay every supplier row into the projection.
pub async fn sync_suppliers<P: ProjectionStore>(store: &P, db: &DbPool) -> ScaResult<SyncStats> {
    let rows = sca_db::queries::suppliers::list_all_suppliers(db)?;

    let mut stats = SyncStats::default();
    for row in &rows {
        project_supplier(store, &row.name, &row.country).await?;
        stats.nodes_synced += 1;
    }
    Ok(stats)
}
