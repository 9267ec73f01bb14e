use async_trait::async_trait;
use std::collections::HashMap;
use westeros_migrate_shared::{RawEdge, RawVertex, SourceId};

use crate::errors::StoreError;
use crate::interfaces::SourceGraph;
use crate::types::{EdgeQuery, VertexQuery};

struct StoredEdge {
    relationship_type: String,
    out_id: SourceId,
    in_id: SourceId,
}

/// A source graph held in memory. Each vertex carries exactly one label.
#[derive(Default)]
pub struct InMemorySourceGraph {
    vertices: Vec<(String, RawVertex)>,
    labels: HashMap<SourceId, String>,
    edges: Vec<StoredEdge>,
}

impl InMemorySourceGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_vertex(mut self, label: &str, vertex: RawVertex) -> Self {
        self.add_vertex(label, vertex);
        self
    }

    pub fn with_edge(
        mut self,
        relationship_type: &str,
        out_id: impl Into<SourceId>,
        in_id: impl Into<SourceId>,
    ) -> Self {
        self.add_edge(relationship_type, out_id, in_id);
        self
    }

    pub fn add_vertex(&mut self, label: &str, vertex: RawVertex) {
        self.labels
            .insert(vertex.source_id.clone(), label.to_string());
        self.vertices.push((label.to_string(), vertex));
    }

    pub fn add_edge(
        &mut self,
        relationship_type: &str,
        out_id: impl Into<SourceId>,
        in_id: impl Into<SourceId>,
    ) {
        self.edges.push(StoredEdge {
            relationship_type: relationship_type.to_string(),
            out_id: out_id.into(),
            in_id: in_id.into(),
        });
    }

    fn endpoint_matches(&self, id: &SourceId, accepted: &[&str]) -> bool {
        if accepted.is_empty() {
            return true;
        }
        self.labels
            .get(id)
            .map(|label| accepted.contains(&label.as_str()))
            .unwrap_or(false)
    }
}

#[async_trait]
impl SourceGraph for InMemorySourceGraph {
    async fn fetch_vertices(&self, query: &VertexQuery) -> Result<Vec<RawVertex>, StoreError> {
        let vertices = self
            .vertices
            .iter()
            .filter(|(label, _)| query.labels.is_empty() || query.labels.contains(&label.as_str()))
            .map(|(_, vertex)| {
                let mut projected = RawVertex::new(vertex.source_id.clone());
                for field in query.fields {
                    if let Some(value) = vertex.field(field) {
                        projected.fields.insert(field.to_string(), value.to_string());
                    }
                }
                projected
            })
            .collect();

        Ok(vertices)
    }

    async fn fetch_edges(&self, query: &EdgeQuery) -> Result<Vec<RawEdge>, StoreError> {
        let edges = self
            .edges
            .iter()
            .filter(|edge| {
                query
                    .relationship_types
                    .contains(&edge.relationship_type.as_str())
            })
            .filter(|edge| self.endpoint_matches(&edge.out_id, query.out_labels))
            .filter(|edge| self.endpoint_matches(&edge.in_id, query.in_labels))
            .map(|edge| RawEdge::new(edge.out_id.clone(), edge.in_id.clone()))
            .collect();

        Ok(edges)
    }
}
