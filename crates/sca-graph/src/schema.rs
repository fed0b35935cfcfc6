//! Neo4j schema initialization (constraints).

use neo4rs::Query;
use tracing::info;

use crate::client::GraphClient;
use crate::error::GraphResult;

/// Cypher statements for schema initialization.
///
/// Both node labels are keyed by `name`, matching the MERGE keys used by
/// the sync pipeline.
const SCHEMA_STATEMENTS: &[&str] = &[
    "CREATE CONSTRAINT supplier_name IF NOT EXISTS FOR (s:Supplier) REQUIRE s.name IS UNIQUE",
    "CREATE CONSTRAINT product_name IF NOT EXISTS FOR (p:Product) REQUIRE p.name IS UNIQUE",
];

/// Initialize the projection schema with uniqueness constraints.
///
/// Safe to run multiple times - uses IF NOT EXISTS clauses.
pub async fn initialize_schema(client: &GraphClient) -> GraphResult<()> {
    for statement in SCHEMA_STATEMENTS {
        client.execute(Query::new(statement.to_string())).await?;
    }

    info!("Graph schema initialized ({} statements)", SCHEMA_STATEMENTS.len());
    Ok(())
}
