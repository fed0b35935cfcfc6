//! # SCA Graph
//!
//! Graph projection for Supply Chain Atlas.
//!
//! Mirrors supplier/product relationships from the primary store into a
//! Neo4j projection, coordinates the per-creation "write primary, then
//! project" workflow, and answers supplier→country→product path queries.
//! The projection is derived data: it is rebuilt at any time by replaying
//! the primary store through the same idempotent merges.

pub mod client;
pub mod error;
pub mod projection;
pub mod queries;
pub mod schema;
pub mod sync;

pub use client::{GraphClient, GraphConfig};
pub use error::{GraphError, GraphResult};
pub use projection::{ProjectionStore, SupplyPath};
pub use sync::{ProjectionState, SyncCoordinator, SyncStats, Synced};
