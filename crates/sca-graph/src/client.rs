//! Neo4j connection client.

use neo4rs::{ConfigBuilder, Graph, Query};
use serde::Deserialize;

use crate::error::{GraphError, GraphResult};

/// Configuration for connecting to Neo4j.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphConfig {
    pub uri: String,
    pub user: String,
    pub password: String,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            uri: "bolt://localhost:7687".to_string(),
            user: "neo4j".to_string(),
            password: "neo4j".to_string(),
        }
    }
}

impl GraphConfig {
    /// Read connection settings from `NEO4J_URI` / `NEO4J_USER` /
    /// `NEO4J_PASSWORD`, falling back to defaults.
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            uri: std::env::var("NEO4J_URI").unwrap_or(default.uri),
            user: std::env::var("NEO4J_USER").unwrap_or(default.user),
            password: std::env::var("NEO4J_PASSWORD").unwrap_or(default.password),
        }
    }
}

/// Client for graph projection operations.
#[derive(Clone)]
pub struct GraphClient {
    graph: Graph,
}

impl GraphClient {
    /// Create a new GraphClient from config.
    ///
    /// Note: neo4rs uses a lazy deadpool — `Graph::connect` only creates the
    /// pool object and does NOT establish a real bolt connection yet. We run
    /// a cheap `RETURN 1` ping immediately so that callers can wrap this in
    /// a timeout and get a fast failure when Neo4j is unreachable instead of
    /// hanging silently.
    pub async fn connect(config: &GraphConfig) -> GraphResult<Self> {
        let neo4j_config = ConfigBuilder::default()
            .uri(&config.uri)
            .user(&config.user)
            .password(&config.password)
            .db("neo4j")
            .max_connections(4)
            .fetch_size(20)
            .build()
            .map_err(|e| GraphError::Connection(e.to_string()))?;

        let graph = Graph::connect(neo4j_config)
            .await
            .map_err(|e| GraphError::Connection(e.to_string()))?;

        // Ping to force an actual TCP+bolt handshake so the caller's timeout works.
        graph
            .run(Query::new("RETURN 1".to_string()))
            .await
            .map_err(|e| GraphError::Connection(e.to_string()))?;

        Ok(Self { graph })
    }

    /// Create a new GraphClient with default configuration.
    pub async fn connect_default() -> GraphResult<Self> {
        Self::connect(&GraphConfig::default()).await
    }

    /// Execute a Cypher statement that returns no results.
    pub async fn execute(&self, query: Query) -> GraphResult<()> {
        self.graph
            .run(query)
            .await
            .map_err(|e| GraphError::WriteRejected(e.to_string()))?;
        Ok(())
    }

    /// Execute a Cypher query and return results as rows.
    pub async fn query(&self, query: Query) -> GraphResult<Vec<neo4rs::Row>> {
        let mut result = self
            .graph
            .execute(query)
            .await
            .map_err(|e| GraphError::QueryFailed(e.to_string()))?;

        let mut rows = Vec::new();
        while let Ok(Some(row)) = result.next().await {
            rows.push(row);
        }
        Ok(rows)
    }
}
