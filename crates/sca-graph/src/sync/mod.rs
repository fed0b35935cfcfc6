//! Primary-store to graph synchronization.
//!
//! The coordinator performs each logical creation as an explicit two-step
//! workflow: write the canonical row, then issue an idempotent projection
//! merge. There is no two-phase commit across the stores. The primary
//! write commits independently and is never rolled back for a projection
//! failure; the gap is surfaced as a lagged projection the caller can
//! retry on its own, separate from "creation failed".

pub mod product_sync;
pub mod supplier_sync;

use tracing::{info, warn};

use sca_core::error::{ScaError, ScaResult};
use sca_core::product::{Product, DEFAULT_REORDER_LEVEL};
use sca_core::supplier::Supplier;
use sca_db::queries::{products, suppliers};
use sca_db::{DbError, DbPool};

use crate::error::GraphError;
use crate::projection::ProjectionStore;

/// Counters for a projection replay.
#[derive(Debug, Clone, Default)]
pub struct SyncStats {
    pub nodes_synced: usize,
    pub relationships_synced: usize,
}

impl SyncStats {
    fn merge(&mut self, other: &SyncStats) {
        self.nodes_synced += other.nodes_synced;
        self.relationships_synced += other.relationships_synced;
    }
}

/// Outcome of the projection step of a creation.
#[derive(Debug)]
pub enum ProjectionState {
    /// The graph merge was applied.
    Applied,
    /// The canonical row committed but the graph merge failed. Retry only
    /// the projection step; the creation itself must not be re-attempted.
    Lagged(GraphError),
}

impl ProjectionState {
    pub fn is_applied(&self) -> bool {
        matches!(self, ProjectionState::Applied)
    }
}

/// Result of a creation: the durable record plus the projection outcome.
#[derive(Debug)]
pub struct Synced<T> {
    pub record: T,
    pub projection: ProjectionState,
}

/// Orchestrates "write primary, then project to graph" per creation.
///
/// Holds explicitly injected store handles; no process-wide singletons.
pub struct SyncCoordinator<P: ProjectionStore> {
    db: DbPool,
    projection: P,
}

impl<P: ProjectionStore> SyncCoordinator<P> {
    pub fn new(db: DbPool, projection: P) -> Self {
        Self { db, projection }
    }

    /// The primary-store handle (read paths, aggregation).
    pub fn db(&self) -> &DbPool {
        &self.db
    }

    /// The projection handle (path queries).
    pub fn projection(&self) -> &P {
        &self.projection
    }

    /// Create a supplier in the primary store and project its node.
    pub async fn create_supplier(&self, name: &str, country: &str) -> ScaResult<Synced<Supplier>> {
        if name.trim().is_empty() {
            return Err(ScaError::validation("supplier name must not be empty"));
        }
        if suppliers::get_supplier_by_name(&self.db, name)?.is_some() {
            return Err(ScaError::duplicate("supplier", name));
        }

        // The pre-check only improves error latency; the UNIQUE constraint
        // settles races between concurrent same-name creations.
        let id = suppliers::insert_supplier(&self.db, name, country).map_err(|e| match e {
            DbError::Duplicate(_) => ScaError::duplicate("supplier", name),
            e => e.into(),
        })?;
        let record = Supplier::from_row(suppliers::get_supplier(&self.db, id)?);

        let projection = self.apply(
            supplier_sync::project_supplier(&self.projection, &record.name, &record.country).await,
            &record.name,
        );
        Ok(Synced { record, projection })
    }

    /// Create a product in the primary store and project its node and
    /// SUPPLIES edge.
    pub async fn create_product(
        &self,
        name: &str,
        price: f64,
        reorder_level: Option<i64>,
        supplier_id: i64,
    ) -> ScaResult<Synced<Product>> {
        if name.trim().is_empty() {
            return Err(ScaError::validation("product name must not be empty"));
        }
        if price.is_nan() || price < 0.0 {
            return Err(ScaError::validation("product price must be non-negative"));
        }
        let reorder_level = reorder_level.unwrap_or(DEFAULT_REORDER_LEVEL);
        if reorder_level < 0 {
            return Err(ScaError::validation("reorder level must be non-negative"));
        }

        // Resolve the supplier by id, not name: the projection edge must
        // originate from the row the foreign key actually references.
        let supplier = suppliers::get_supplier(&self.db, supplier_id).map_err(|e| match e {
            DbError::NotFound(_) => ScaError::reference_not_found("Supplier", supplier_id),
            e => e.into(),
        })?;

        let id = products::insert_product(&self.db, name, price, reorder_level, supplier_id)
            .map_err(|e| match e {
                DbError::NotFound(_) => ScaError::reference_not_found("Supplier", supplier_id),
                e => e.into(),
            })?;
        let record = Product::from_row(products::get_product(&self.db, id)?);

        let projection = self.apply(
            product_sync::project_product(&self.projection, &record.name, &supplier.name).await,
            &record.name,
        );
        Ok(Synced { record, projection })
    }

    fn apply(&self, result: Result<(), GraphError>, name: &str) -> ProjectionState {
        match result {
            Ok(()) => ProjectionState::Applied,
            Err(e) => {
                warn!(entity = %name, error = %e,
                    "Projection write failed after primary commit; projection lagging");
                ProjectionState::Lagged(e)
            }
        }
    }

    /// Re-issue the projection step for a supplier whose earlier projection
    /// lagged. The merge is idempotent, so retrying after success is a no-op.
    pub async fn retry_supplier_projection(&self, supplier: &Supplier) -> ScaResult<()> {
        supplier_sync::project_supplier(&self.projection, &supplier.name, &supplier.country)
            .await?;
        Ok(())
    }

    /// Re-issue the projection step for a product whose earlier projection
    /// lagged.
    pub async fn retry_product_projection(&self, product: &Product) -> ScaResult<()> {
        let supplier = suppliers::get_supplier(&self.db, product.supplier_id).map_err(|e| {
            match e {
                DbError::NotFound(_) => {
                    ScaError::reference_not_found("Supplier", product.supplier_id)
                }
                e => e.into(),
            }
        })?;
        product_sync::project_product(&self.projection, &product.name, &supplier.name).await?;
        Ok(())
    }

    /// Rebuild the entire projection by replaying the primary store.
    ///
    /// Node merges are order-independent; suppliers replay before products
    /// so every SUPPLIES edge finds its endpoints.
    pub async fn rebuild(&self) -> ScaResult<SyncStats> {
        info!("Starting full projection rebuild");

        let mut total = SyncStats::default();

        let supplier_stats = supplier_sync::sync_suppliers(&self.projection, &self.db).await?;
        total.merge(&supplier_stats);

        let product_stats = product_sync::sync_products(&self.projection, &self.db).await?;
        total.merge(&product_stats);

        info!(
            nodes = total.nodes_synced,
            relationships = total.relationships_synced,
            "Projection rebuild complete"
        );
        Ok(total)
    }
}
