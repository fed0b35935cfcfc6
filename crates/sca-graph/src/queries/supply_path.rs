//! Supply-path traversal.

use sca_core::error::{ScaError, ScaResult};

use crate::projection::{ProjectionStore, SupplyPath};

/// Resolve the supplier→country→product chain for a product name.
///
/// Reads only the graph projection. A product that exists in the primary
/// store but whose projection write previously failed resolves to
/// `PathNotFound` until the projection is retried or rebuilt.
///
/// Product names are not globally unique in the primary store; when two
/// suppliers supply the same name, the projection collapses them onto one
/// node and this returns a single arbitrary match. Known multiplicity gap.
pub async fn find_supply_path<P: ProjectionStore>(
    store: &P,
    product_name: &str,
) -> ScaResult<SupplyPath> {
    match store.supply_path(product_name).await? {
        Some(path) => Ok(path),
        None => Err(ScaError::PathNotFound(product_name.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::memory::MemoryProjection;
    use crate::sync::SyncCoordinator;
    use sca_db::migrations::run_migrations;
    use sca_db::DbPool;

    fn coordinator() -> SyncCoordinator<MemoryProjection> {
        let pool = DbPool::in_memory().unwrap();
        run_migrations(&pool).unwrap();
        SyncCoordinator::new(pool, MemoryProjection::new())
    }

    #[tokio::test]
    async fn resolves_chain_after_creation() {
        let c = coordinator();

        let s = c.create_supplier("Acme", "USA").await.unwrap();
        c.create_product("Widget", 9.99, None, s.record.id)
            .await
            .unwrap();

        let path = find_supply_path(c.projection(), "Widget").await.unwrap();
        assert_eq!(
            path,
            SupplyPath {
                supplier: "Acme".to_string(),
                country: "USA".to_string(),
                product: "Widget".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn unknown_product_is_not_found() {
        let store = MemoryProjection::new();

        let err = find_supply_path(&store, "Ghost").await.unwrap_err();
        assert!(matches!(err, ScaError::PathNotFound(_)));
    }

    #[tokio::test]
    async fn lagged_projection_resolves_only_after_rebuild() {
        let c = coordinator();

        c.projection().set_fail_writes(true);
        let s = c.create_supplier("Acme", "USA").await.unwrap();
        c.create_product("Widget", 9.99, None, s.record.id)
            .await
            .unwrap();
        c.projection().set_fail_writes(false);

        // Canonical data exists, projection lags: not found by design.
        let err = find_supply_path(c.projection(), "Widget").await.unwrap_err();
        assert!(matches!(err, ScaError::PathNotFound(_)));

        c.rebuild().await.unwrap();
        let path = find_supply_path(c.projection(), "Widget").await.unwrap();
        assert_eq!(path.supplier, "Acme");
        assert_eq!(path.country, "USA");
    }
}
