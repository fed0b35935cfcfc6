//! Supplier queries.

use rusqlite::params;

use super::map_unique_violation;
use crate::pool::{DbError, DbPool, DbResult};

/// Supplier row from database.
#[derive(Debug, Clone)]
pub struct SupplierRow {
    pub id: i64,
    pub name: String,
    pub country: String,
    pub created_at: String,
}

fn read_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<SupplierRow> {
    Ok(SupplierRow {
        id: row.get(0)?,
        name: row.get(1)?,
        country: row.get(2)?,
        created_at: row.get(3)?,
    })
}

/// Insert a supplier, returning its generated id.
pub fn insert_supplier(pool: &DbPool, name: &str, country: &str) -> DbResult<i64> {
    pool.with_conn(|conn| {
        conn.execute(
            "INSERT INTO suppliers (name, country) VALUES (?1, ?2)",
            params![name, country],
        )
        .map_err(|e| map_unique_violation(e, "supplier", name))?;
        Ok(conn.last_insert_rowid())
    })
}

/// Get a supplier by id.
pub fn get_supplier(pool: &DbPool, id: i64) -> DbResult<SupplierRow> {
    pool.with_conn(|conn| {
        conn.query_row(
            "SELECT id, name, country, created_at FROM suppliers WHERE id = ?1",
            params![id],
            read_row,
        )
        .map_err(|e| match e {
            rusqlite::Error::QueryReturnedNoRows => DbError::NotFound(format!("Supplier: {}", id)),
            e => DbError::Connection(e),
        })
    })
}

/// Get a supplier by name, if one exists.
pub fn get_supplier_by_name(pool: &DbPool, name: &str) -> DbResult<Option<SupplierRow>> {
    pool.with_conn(|conn| {
        let mut stmt = conn.prepare(
            "SELECT id, name, country, created_at FROM suppliers WHERE name = ?1",
        )?;

        let mut rows = stmt.query(params![name])?;
        if let Some(row) = rows.next()? {
            Ok(Some(read_row(row)?))
        } else {
            Ok(None)
        }
    })
}

/// List suppliers, paginated.
pub fn list_suppliers(pool: &DbPool, offset: i64, limit: i64) -> DbResult<Vec<SupplierRow>> {
    pool.with_conn(|conn| {
        let mut stmt = conn.prepare(
            "SELECT id, name, country, created_at FROM suppliers
             ORDER BY id LIMIT ?1 OFFSET ?2",
        )?;

        let rows = stmt.query_map(params![limit, offset], read_row)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(DbError::from)
    })
}

/// List every supplier, for projection replay.
pub fn list_all_suppliers(pool: &DbPool) -> DbResult<Vec<SupplierRow>> {
    pool.with_conn(|conn| {
        let mut stmt =
            conn.prepare("SELECT id, name, country, created_at FROM suppliers ORDER BY id")?;

        let rows = stmt.query_map([], read_row)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(DbError::from)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::migrations::run_migrations;

    fn pool() -> DbPool {
        let pool = DbPool::in_memory().unwrap();
        run_migrations(&pool).unwrap();
        pool
    }

    #[test]
    fn insert_and_get() {
        let pool = pool();
        let id = insert_supplier(&pool, "Acme", "USA").unwrap();

        let row = get_supplier(&pool, id).unwrap();
        assert_eq!(row.name, "Acme");
        assert_eq!(row.country, "USA");
    }

    #[test]
    fn duplicate_name_is_rejected_by_constraint() {
        let pool = pool();
        insert_supplier(&pool, "Acme", "USA").unwrap();

        let err = insert_supplier(&pool, "Acme", "Canada").unwrap_err();
        assert!(matches!(err, DbError::Duplicate(_)));

        // Exactly one row survived.
        let all = list_suppliers(&pool, 0, 100).unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].country, "USA");
    }

    #[test]
    fn get_unknown_id_is_not_found() {
        let pool = pool();
        let err = get_supplier(&pool, 42).unwrap_err();
        assert!(matches!(err, DbError::NotFound(_)));
    }

    #[test]
    fn lookup_by_name() {
        let pool = pool();
        insert_supplier(&pool, "Acme", "USA").unwrap();

        assert!(get_supplier_by_name(&pool, "Acme").unwrap().is_some());
        assert!(get_supplier_by_name(&pool, "Globex").unwrap().is_none());
    }

    #[test]
    fn list_is_paginated() {
        let pool = pool();
        for i in 0..5 {
            insert_supplier(&pool, &format!("S{}", i), "BR").unwrap();
        }

        let page = list_suppliers(&pool, 2, 2).unwrap();
        assert_eq!(page.len(), 2);
        assert_eq!(page[0].name, "S2");
        assert_eq!(page[1].name, "S3");
    }
}
