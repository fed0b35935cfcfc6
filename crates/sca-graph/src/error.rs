//! Graph-layer error types.

use sca_core::ScaError;
use thiserror::Error;

/// Graph store error types.
///
/// Connection failures are distinct from rejected writes and failed
/// queries so callers can tell "store unreachable" apart from "store
/// refused this statement".
#[derive(Error, Debug)]
pub enum GraphError {
    #[error("Graph connection error: {0}")]
    Connection(String),

    #[error("Graph write rejected: {0}")]
    WriteRejected(String),

    #[error("Graph query failed: {0}")]
    QueryFailed(String),
}

/// Result type for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;

impl From<GraphError> for ScaError {
    fn from(e: GraphError) -> Self {
        ScaError::GraphStore(e.to_string())
    }
}
