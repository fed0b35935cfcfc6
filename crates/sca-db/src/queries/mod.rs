//! Database query implementations.

pub mod suppliers;
pub mod products;
pub mod warehouses;
pub mod inventory;

use crate::pool::DbError;

/// Map a UNIQUE-constraint failure on insert to `DbError::Duplicate`.
///
/// The constraint, not the caller's pre-check, is the authority on
/// duplicates: two concurrent inserts with the same name both pass a
/// pre-check, but exactly one survives the constraint.
pub(crate) fn map_unique_violation(e: rusqlite::Error, entity: &str, name: &str) -> DbError {
    match &e {
        rusqlite::Error::SqliteFailure(f, _)
            if f.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE =>
        {
            DbError::Duplicate(format!("{}: {}", entity, name))
        }
        _ => DbError::Connection(e),
    }
}

/// Map a FOREIGN KEY failure on insert to `DbError::NotFound`.
pub(crate) fn map_fk_violation(e: rusqlite::Error, referenced: &str) -> DbError {
    match &e {
        rusqlite::Error::SqliteFailure(f, _)
            if f.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_FOREIGNKEY =>
        {
            DbError::NotFound(referenced.to_string())
        }
        _ => DbError::Connection(e),
    }
}
