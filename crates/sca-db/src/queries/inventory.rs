//! Inventory lot queries and the low-stock aggregation.

use rusqlite::params;

use super::map_fk_violation;
use crate::pool::{DbError, DbPool, DbResult};

/// Inventory lot row from database.
#[derive(Debug, Clone)]
pub struct InventoryRow {
    pub id: i64,
    pub product_id: i64,
    pub warehouse_id: i64,
    pub quantity: i64,
    pub created_at: String,
}

/// One low-stock alert: summed stock across lots fell below the product's
/// reorder level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LowStockRow {
    pub product_name: String,
    pub reorder_level: i64,
    pub total_quantity: i64,
}

fn read_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<InventoryRow> {
    Ok(InventoryRow {
        id: row.get(0)?,
        product_id: row.get(1)?,
        warehouse_id: row.get(2)?,
        quantity: row.get(3)?,
        created_at: row.get(4)?,
    })
}

/// Insert an inventory lot, returning its generated id.
pub fn insert_lot(
    pool: &DbPool,
    product_id: i64,
    warehouse_id: i64,
    quantity: i64,
) -> DbResult<i64> {
    pool.with_conn(|conn| {
        conn.execute(
            "INSERT INTO inventory (product_id, warehouse_id, quantity)
             VALUES (?1, ?2, ?3)",
            params![product_id, warehouse_id, quantity],
        )
        .map_err(|e| {
            map_fk_violation(
                e,
                &format!("Product: {} / Warehouse: {}", product_id, warehouse_id),
            )
        })?;
        Ok(conn.last_insert_rowid())
    })
}

/// Get an inventory lot by id.
pub fn get_lot(pool: &DbPool, id: i64) -> DbResult<InventoryRow> {
    pool.with_conn(|conn| {
        conn.query_row(
            "SELECT id, product_id, warehouse_id, quantity, created_at
             FROM inventory WHERE id = ?1",
            params![id],
            read_row,
        )
        .map_err(|e| match e {
            rusqlite::Error::QueryReturnedNoRows => {
                DbError::NotFound(format!("InventoryLot: {}", id))
            }
            e => DbError::Connection(e),
        })
    })
}

/// List inventory lots, paginated.
pub fn list_inventory(pool: &DbPool, offset: i64, limit: i64) -> DbResult<Vec<InventoryRow>> {
    pool.with_conn(|conn| {
        let mut stmt = conn.prepare(
            "SELECT id, product_id, warehouse_id, quantity, created_at
             FROM inventory ORDER BY id LIMIT ?1 OFFSET ?2",
        )?;

        let rows = stmt.query_map(params![limit, offset], read_row)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(DbError::from)
    })
}

/// Products whose summed stock across all lots is below their reorder level.
///
/// Inner join by contract: a product with zero inventory lots produces no
/// alert row, only tracked-but-insufficient stock alerts. The whole
/// aggregation is one statement on one connection, so the result is a
/// consistent snapshot of the inventory table.
pub fn low_stock_alerts(pool: &DbPool) -> DbResult<Vec<LowStockRow>> {
    pool.with_conn(|conn| {
        let mut stmt = conn.prepare(
            "SELECT p.name, p.reorder_level, t.total_quantity
             FROM products p
             JOIN (
                 SELECT product_id, SUM(quantity) AS total_quantity
                 FROM inventory
                 GROUP BY product_id
             ) t ON t.product_id = p.id
             WHERE t.total_quantity < p.reorder_level
             ORDER BY p.name",
        )?;

        let rows = stmt.query_map([], |row| {
            Ok(LowStockRow {
                product_name: row.get(0)?,
                reorder_level: row.get(1)?,
                total_quantity: row.get(2)?,
            })
        })?;
        rows.collect::<Result<Vec<_>, _>>().map_err(DbError::from)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::migrations::run_migrations;
    use crate::queries::products::insert_product;
    use crate::queries::suppliers::insert_supplier;
    use crate::queries::warehouses::insert_warehouse;

    fn pool() -> DbPool {
        let pool = DbPool::in_memory().unwrap();
        run_migrations(&pool).unwrap();
        pool
    }

    fn seed_product(pool: &DbPool, name: &str, reorder_level: i64) -> i64 {
        let supplier_id = match crate::queries::suppliers::get_supplier_by_name(pool, "Acme")
            .unwrap()
        {
            Some(s) => s.id,
            None => insert_supplier(pool, "Acme", "USA").unwrap(),
        };
        insert_product(pool, name, 1.0, reorder_level, supplier_id).unwrap()
    }

    #[test]
    fn alerts_sum_lots_across_warehouses() {
        let pool = pool();
        let a = seed_product(&pool, "A", 20);
        let b = seed_product(&pool, "B", 20);
        let w1 = insert_warehouse(&pool, "Hamburg", 1000).unwrap();
        let w2 = insert_warehouse(&pool, "Lisbon", 1000).unwrap();

        // A: 5 + 10 = 15 < 20 -> alert. B: 30 >= 20 -> no alert.
        insert_lot(&pool, a, w1, 5).unwrap();
        insert_lot(&pool, a, w2, 10).unwrap();
        insert_lot(&pool, b, w1, 30).unwrap();

        let alerts = low_stock_alerts(&pool).unwrap();
        assert_eq!(
            alerts,
            vec![LowStockRow {
                product_name: "A".to_string(),
                reorder_level: 20,
                total_quantity: 15,
            }]
        );
    }

    #[test]
    fn product_without_lots_never_alerts() {
        let pool = pool();
        seed_product(&pool, "Untracked", 50);

        assert!(low_stock_alerts(&pool).unwrap().is_empty());
    }

    #[test]
    fn stock_exactly_at_reorder_level_does_not_alert() {
        let pool = pool();
        let a = seed_product(&pool, "A", 20);
        let w = insert_warehouse(&pool, "Hamburg", 1000).unwrap();
        insert_lot(&pool, a, w, 20).unwrap();

        assert!(low_stock_alerts(&pool).unwrap().is_empty());
    }

    #[test]
    fn alerts_are_ordered_by_product_name() {
        let pool = pool();
        let z = seed_product(&pool, "Zeta", 10);
        let a = seed_product(&pool, "Alpha", 10);
        let w = insert_warehouse(&pool, "Hamburg", 1000).unwrap();
        insert_lot(&pool, z, w, 1).unwrap();
        insert_lot(&pool, a, w, 1).unwrap();

        let alerts = low_stock_alerts(&pool).unwrap();
        let names: Vec<_> = alerts.iter().map(|r| r.product_name.as_str()).collect();
        assert_eq!(names, vec!["Alpha", "Zeta"]);
    }

    #[test]
    fn lot_with_unknown_references_is_rejected() {
        let pool = pool();
        let err = insert_lot(&pool, 1, 1, 5).unwrap_err();
        assert!(matches!(err, DbError::NotFound(_)));
        assert!(list_inventory(&pool, 0, 10).unwrap().is_empty());
    }
}
