// Neo4j source graph reader
use async_trait::async_trait;
use neo4rs::{Graph, Query};
use tracing::{debug, info};
use westeros_migrate_shared::{RawEdge, RawVertex};

use super::{connection, cypher};
use crate::config::StoreConfig;
use crate::errors::StoreError;
use crate::interfaces::SourceGraph;
use crate::types::{EdgeQuery, VertexQuery};

/// Reads raw records from a Neo4j database.
///
/// Record identifiers are Neo4j element ids.
pub struct Neo4jSourceGraph {
    graph: Graph,
}

impl Neo4jSourceGraph {
    /// Connect to the source database and check it answers.
    pub async fn connect(config: &StoreConfig) -> Result<Self, StoreError> {
        let graph = connection::connect(config)?;
        connection::probe(&graph).await?;

        info!(location = %config.location(), "Connected to source graph");
        Ok(Self { graph })
    }
}

#[async_trait]
impl SourceGraph for Neo4jSourceGraph {
    async fn fetch_vertices(&self, query: &VertexQuery) -> Result<Vec<RawVertex>, StoreError> {
        let cypher = cypher::vertex_query(query);
        debug!(cypher = %cypher, "Fetching source vertices");

        let mut rows = self.graph.execute(Query::new(cypher)).await?;
        let mut vertices = Vec::new();

        while let Some(row) = rows.next().await? {
            let id: String = row.get("id")?;
            let mut vertex = RawVertex::new(id);

            for (idx, field) in query.fields.iter().enumerate() {
                let value: Option<String> = row.get(&cypher::field_alias(idx))?;
                if let Some(value) = value {
                    vertex.fields.insert(field.to_string(), value);
                }
            }

            vertices.push(vertex);
        }

        debug!(labels = ?query.labels, count = vertices.len(), "Fetched source vertices");
        Ok(vertices)
    }

    async fn fetch_edges(&self, query: &EdgeQuery) -> Result<Vec<RawEdge>, StoreError> {
        let cypher = cypher::edge_query(query);
        debug!(cypher = %cypher, "Fetching source edges");

        let types: Vec<String> = query
            .relationship_types
            .iter()
            .map(|t| t.to_string())
            .collect();

        let mut rows = self
            .graph
            .execute(Query::new(cypher).param("types", types))
            .await?;
        let mut edges = Vec::new();

        while let Some(row) = rows.next().await? {
            let out_id: String = row.get("out_id")?;
            let in_id: String = row.get("in_id")?;
            edges.push(RawEdge::new(out_id, in_id));
        }

        debug!(
            relationship_types = ?query.relationship_types,
            count = edges.len(),
            "Fetched source edges"
        );
        Ok(edges)
    }
}
