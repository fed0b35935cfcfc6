//! Graph projection capability surface.
//!
//! Every write is a keyed merge: re-applying the same upsert updates
//! scalar properties and never duplicates nodes or relationships. That is
//! what makes the projection re-derivable by replaying the primary store.

use async_trait::async_trait;
use neo4rs::Query;
use serde::Serialize;

use crate::client::GraphClient;
use crate::error::{GraphError, GraphResult};

/// The supplier→country→product chain resolved from the projection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SupplyPath {
    pub supplier: String,
    pub country: String,
    pub product: String,
}

/// Idempotent upsert surface of the graph projection.
///
/// Nodes are keyed by `name`. Implementations must keep connection
/// failures distinguishable from rejected writes (`GraphError` variants).
#[async_trait]
pub trait ProjectionStore: Send + Sync {
    /// Merge a node by `name` key, setting scalar properties.
    async fn upsert_node(
        &self,
        label: &str,
        name: &str,
        props: &[(&str, &str)],
    ) -> GraphResult<()>;

    /// Merge a directed relationship between two existing nodes.
    ///
    /// If either endpoint is missing the statement matches nothing and no
    /// edge is created; a later replay creates it once the endpoints exist.
    async fn upsert_edge(
        &self,
        from_label: &str,
        from_name: &str,
        rel_type: &str,
        to_label: &str,
        to_name: &str,
    ) -> GraphResult<()>;

    /// Resolve the SUPPLIES chain ending at the named product, if any.
    async fn supply_path(&self, product_name: &str) -> GraphResult<Option<SupplyPath>>;
}

#[async_trait]
impl ProjectionStore for GraphClient {
    async fn upsert_node(
        &self,
        label: &str,
        name: &str,
        props: &[(&str, &str)],
    ) -> GraphResult<()> {
        // Labels and property names are compile-time constants from the
        // sync modules; only values travel as bolt parameters.
        let mut cypher = format!("MERGE (n:{} {{name: $name}})", label);
        for (i, (prop, _)) in props.iter().enumerate() {
            cypher.push_str(if i == 0 { " SET " } else { ", " });
            cypher.push_str(&format!("n.{} = ${}", prop, prop));
        }

        let mut query = Query::new(cypher).param("name", name);
        for (prop, value) in props {
            query = query.param(prop, *value);
        }

        self.execute(query).await
    }

    async fn upsert_edge(
        &self,
        from_label: &str,
        from_name: &str,
        rel_type: &str,
        to_label: &str,
        to_name: &str,
    ) -> GraphResult<()> {
        let query = Query::new(format!(
            "MATCH (a:{} {{name: $from_name}}), (b:{} {{name: $to_name}})
             MERGE (a)-[:{}]->(b)",
            from_label, to_label, rel_type
        ))
        .param("from_name", from_name)
        .param("to_name", to_name);

        self.execute(query).await
    }

    async fn supply_path(&self, product_name: &str) -> GraphResult<Option<SupplyPath>> {
        let query = Query::new(
            "MATCH (s:Supplier)-[:SUPPLIES]->(p:Product {name: $name})
             RETURN s.name AS supplier, s.country AS country, p.name AS product
             LIMIT 1"
                .to_string(),
        )
        .param("name", product_name);

        let rows = self.query(query).await?;
        let row = match rows.into_iter().next() {
            Some(row) => row,
            None => return Ok(None),
        };

        let get = |field: &str| -> GraphResult<String> {
            row.get(field)
                .map_err(|e| GraphError::QueryFailed(format!("field '{}': {:?}", field, e)))
        };

        Ok(Some(SupplyPath {
            supplier: get("supplier")?,
            country: get("country")?,
            product: get("product")?,
        }))
    }
}
