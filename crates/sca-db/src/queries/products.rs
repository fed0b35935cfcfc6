//! Product queries.

use rusqlite::params;

use super::map_fk_violation;
use crate::pool::{DbError, DbPool, DbResult};

/// Product row from database.
#[derive(Debug, Clone)]
pub struct ProductRow {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub reorder_level: i64,
    pub supplier_id: i64,
    pub created_at: String,
}

/// Product joined with its supplier's name, for projection replay.
#[derive(Debug, Clone)]
pub struct ProductSupplierRow {
    pub product_name: String,
    pub supplier_name: String,
}

fn read_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<ProductRow> {
    Ok(ProductRow {
        id: row.get(0)?,
        name: row.get(1)?,
        price: row.get(2)?,
        reorder_level: row.get(3)?,
        supplier_id: row.get(4)?,
        created_at: row.get(5)?,
    })
}

/// Insert a product, returning its generated id.
///
/// The supplier reference is validated by the caller against the live row;
/// the FK constraint remains as a backstop for races with future deletes.
pub fn insert_product(
    pool: &DbPool,
    name: &str,
    price: f64,
    reorder_level: i64,
    supplier_id: i64,
) -> DbResult<i64> {
    pool.with_conn(|conn| {
        conn.execute(
            "INSERT INTO products (name, price, reorder_level, supplier_id)
             VALUES (?1, ?2, ?3, ?4)",
            params![name, price, reorder_level, supplier_id],
        )
        .map_err(|e| map_fk_violation(e, &format!("Supplier: {}", supplier_id)))?;
        Ok(conn.last_insert_rowid())
    })
}

/// Get a product by id.
pub fn get_product(pool: &DbPool, id: i64) -> DbResult<ProductRow> {
    pool.with_conn(|conn| {
        conn.query_row(
            "SELECT id, name, price, reorder_level, supplier_id, created_at
             FROM products WHERE id = ?1",
            params![id],
            read_row,
        )
        .map_err(|e| match e {
            rusqlite::Error::QueryReturnedNoRows => DbError::NotFound(format!("Product: {}", id)),
            e => DbError::Connection(e),
        })
    })
}

/// List products, paginated.
pub fn list_products(pool: &DbPool, offset: i64, limit: i64) -> DbResult<Vec<ProductRow>> {
    pool.with_conn(|conn| {
        let mut stmt = conn.prepare(
            "SELECT id, name, price, reorder_level, supplier_id, created_at
             FROM products ORDER BY id LIMIT ?1 OFFSET ?2",
        )?;

        let rows = stmt.query_map(params![limit, offset], read_row)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(DbError::from)
    })
}

/// List products owned by one supplier.
pub fn list_products_by_supplier(pool: &DbPool, supplier_id: i64) -> DbResult<Vec<ProductRow>> {
    pool.with_conn(|conn| {
        let mut stmt = conn.prepare(
            "SELECT id, name, price, reorder_level, supplier_id, created_at
             FROM products WHERE supplier_id = ?1 ORDER BY id",
        )?;

        let rows = stmt.query_map(params![supplier_id], read_row)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(DbError::from)
    })
}

/// List every product together with its supplier's name.
///
/// Used when replaying the whole primary store into the graph projection.
pub fn list_products_with_suppliers(pool: &DbPool) -> DbResult<Vec<ProductSupplierRow>> {
    pool.with_conn(|conn| {
        let mut stmt = conn.prepare(
            "SELECT p.name, s.name
             FROM products p
             JOIN suppliers s ON s.id = p.supplier_id
             ORDER BY p.id",
        )?;

        let rows = stmt.query_map([], |row| {
            Ok(ProductSupplierRow {
                product_name: row.get(0)?,
                supplier_name: row.get(1)?,
            })
        })?;
        rows.collect::<Result<Vec<_>, _>>().map_err(DbError::from)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::migrations::run_migrations;
    use crate::queries::suppliers::insert_supplier;

    fn pool() -> DbPool {
        let pool = DbPool::in_memory().unwrap();
        run_migrations(&pool).unwrap();
        pool
    }

    #[test]
    fn insert_and_get() {
        let pool = pool();
        let supplier_id = insert_supplier(&pool, "Acme", "USA").unwrap();
        let id = insert_product(&pool, "Widget", 9.99, 20, supplier_id).unwrap();

        let row = get_product(&pool, id).unwrap();
        assert_eq!(row.name, "Widget");
        assert_eq!(row.reorder_level, 20);
        assert_eq!(row.supplier_id, supplier_id);
    }

    #[test]
    fn unknown_supplier_fk_is_not_found() {
        let pool = pool();
        let err = insert_product(&pool, "Widget", 9.99, 20, 999).unwrap_err();
        assert!(matches!(err, DbError::NotFound(_)));
        assert!(list_products(&pool, 0, 10).unwrap().is_empty());
    }

    #[test]
    fn same_name_under_two_suppliers_is_allowed() {
        let pool = pool();
        let a = insert_supplier(&pool, "Acme", "USA").unwrap();
        let b = insert_supplier(&pool, "Globex", "Germany").unwrap();

        insert_product(&pool, "Widget", 1.0, 20, a).unwrap();
        insert_product(&pool, "Widget", 2.0, 20, b).unwrap();

        assert_eq!(list_products(&pool, 0, 10).unwrap().len(), 2);
    }

    #[test]
    fn join_with_suppliers_for_replay() {
        let pool = pool();
        let a = insert_supplier(&pool, "Acme", "USA").unwrap();
        insert_product(&pool, "Widget", 1.0, 20, a).unwrap();
        insert_product(&pool, "Gadget", 2.0, 10, a).unwrap();

        let joined = list_products_with_suppliers(&pool).unwrap();
        assert_eq!(joined.len(), 2);
        assert!(joined.iter().all(|r| r.supplier_name == "Acme"));
    }
}
