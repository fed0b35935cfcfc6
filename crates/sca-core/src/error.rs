//! Centralized error types for SCA.

use sca_db::DbError;
use thiserror::Error;

/// Main error type for SCA operations.
///
/// `Database(DbError::Connection)` is the "store unavailable" class:
/// nothing committed, the whole operation is safe to retry. A lagged graph
/// projection is deliberately NOT an error here — it is reported through
/// the coordinator's `Synced` result, because the canonical write already
/// succeeded. No operation is retried automatically; retry policy belongs
/// to the caller.
#[derive(Error, Debug)]
pub enum ScaError {
    #[error("{entity} with name '{name}' already exists")]
    DuplicateName { entity: &'static str, name: String },

    #[error("{entity} not found: {id}")]
    ReferenceNotFound { entity: &'static str, id: i64 },

    #[error("Supply path not found for product '{0}'")]
    PathNotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Graph store error: {0}")]
    GraphStore(String),

    #[error("Database error: {0}")]
    Database(#[from] DbError),
}

/// Result type for SCA operations.
pub type ScaResult<T> = Result<T, ScaError>;

impl ScaError {
    /// Create a duplicate-name error.
    pub fn duplicate(entity: &'static str, name: impl Into<String>) -> Self {
        Self::DuplicateName {
            entity,
            name: name.into(),
        }
    }

    /// Create a reference-not-found error.
    pub fn reference_not_found(entity: &'static str, id: i64) -> Self {
        Self::ReferenceNotFound { entity, id }
    }

    /// Create a validation error.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}
