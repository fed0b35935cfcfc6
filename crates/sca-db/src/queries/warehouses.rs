//! Warehouse queries.

use rusqlite::params;

use super::map_unique_violation;
use crate::pool::{DbError, DbPool, DbResult};

/// Warehouse row from database.
#[derive(Debug, Clone)]
pub struct WarehouseRow {
    pub id: i64,
    pub location: String,
    pub capacity: i64,
    pub created_at: String,
}

fn read_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<WarehouseRow> {
    Ok(WarehouseRow {
        id: row.get(0)?,
        location: row.get(1)?,
        capacity: row.get(2)?,
        created_at: row.get(3)?,
    })
}

/// Insert a warehouse, returning its generated id.
pub fn insert_warehouse(pool: &DbPool, location: &str, capacity: i64) -> DbResult<i64> {
    pool.with_conn(|conn| {
        conn.execute(
            "INSERT INTO warehouses (location, capacity) VALUES (?1, ?2)",
            params![location, capacity],
        )
        .map_err(|e| map_unique_violation(e, "warehouse", location))?;
        Ok(conn.last_insert_rowid())
    })
}

/// Get a warehouse by id.
pub fn get_warehouse(pool: &DbPool, id: i64) -> DbResult<WarehouseRow> {
    pool.with_conn(|conn| {
        conn.query_row(
            "SELECT id, location, capacity, created_at FROM warehouses WHERE id = ?1",
            params![id],
            read_row,
        )
        .map_err(|e| match e {
            rusqlite::Error::QueryReturnedNoRows => DbError::NotFound(format!("Warehouse: {}", id)),
            e => DbError::Connection(e),
        })
    })
}

/// Get a warehouse by location, if one exists.
pub fn get_warehouse_by_location(pool: &DbPool, location: &str) -> DbResult<Option<WarehouseRow>> {
    pool.with_conn(|conn| {
        let mut stmt = conn.prepare(
            "SELECT id, location, capacity, created_at FROM warehouses WHERE location = ?1",
        )?;

        let mut rows = stmt.query(params![location])?;
        if let Some(row) = rows.next()? {
            Ok(Some(read_row(row)?))
        } else {
            Ok(None)
        }
    })
}

/// List warehouses, paginated.
pub fn list_warehouses(pool: &DbPool, offset: i64, limit: i64) -> DbResult<Vec<WarehouseRow>> {
    pool.with_conn(|conn| {
        let mut stmt = conn.prepare(
            "SELECT id, location, capacity, created_at FROM warehouses
             ORDER BY id LIMIT ?1 OFFSET ?2",
        )?;

        let rows = stmt.query_map(params![limit, offset], read_row)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(DbError::from)
    })
}
