//! Reads the raw records the normalizers work on from the source graph.

pub mod queries;

use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::info;
use westeros_migrate_repository::{SourceGraph, StoreError, VertexQuery};
use westeros_migrate_shared::{EdgeKind, RawEdge, RawVertex, SourceId};

/// Raw vertices keyed by their source identifier.
pub type RawRecords = BTreeMap<SourceId, RawVertex>;

/// Read-only view of the source graph in the shapes normalization expects.
pub struct Extractor {
    source: Arc<dyn SourceGraph>,
}

impl Extractor {
    pub fn new(source: Arc<dyn SourceGraph>) -> Self {
        Self { source }
    }

    pub async fn characters(&self) -> Result<RawRecords, StoreError> {
        self.vertices("Character", &queries::CHARACTERS).await
    }

    pub async fn houses(&self) -> Result<RawRecords, StoreError> {
        self.vertices("NobleHouse", &queries::HOUSES).await
    }

    pub async fn regions(&self) -> Result<RawRecords, StoreError> {
        self.vertices("Region", &queries::REGIONS).await
    }

    /// Raw edges backing `kind`, in the direction the source stores them.
    pub async fn edges(&self, kind: EdgeKind) -> Result<Vec<RawEdge>, StoreError> {
        let edges = self.source.fetch_edges(queries::edge_query(kind)).await?;
        info!(kind = %kind, count = edges.len(), "Read source edges");
        Ok(edges)
    }

    async fn vertices(&self, kind: &str, query: &VertexQuery) -> Result<RawRecords, StoreError> {
        let records: RawRecords = self
            .source
            .fetch_vertices(query)
            .await?
            .into_iter()
            .map(|vertex| (vertex.source_id.clone(), vertex))
            .collect();

        info!(kind, count = records.len(), "Read source vertices");
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use westeros_migrate_repository::InMemorySourceGraph;

    fn source() -> InMemorySourceGraph {
        InMemorySourceGraph::new()
            .with_vertex("Character", RawVertex::new("#11:0").with_field("name", "Arya Stark"))
            .with_vertex("Noblehouse", RawVertex::new("#12:0").with_field("name", "House Stark"))
            .with_vertex("Noble_house", RawVertex::new("#12:1").with_field("name", "House Tully"))
            .with_vertex("Region", RawVertex::new("#13:0").with_field("name", "The North"))
            .with_vertex("Settlement", RawVertex::new("#14:0").with_field("name", "Winterfell"))
            .with_edge("Has_Castles", "#13:0", "#14:0")
            .with_edge("Has_Place", "#11:0", "#14:0")
            .with_edge("Has_Place", "#12:0", "#14:0")
            .with_edge("Has_Allegiance", "#11:0", "#12:0")
            .with_edge("Has_Allegiance", "#11:0", "#14:0")
            .with_edge("Has_Seat", "#12:0", "#14:0")
    }

    #[tokio::test]
    async fn test_vertices_by_kind() {
        let extractor = Extractor::new(Arc::new(source()));

        assert_eq!(extractor.characters().await.unwrap().len(), 1);
        let houses = extractor.houses().await.unwrap();
        assert_eq!(houses.len(), 2);
        assert!(houses.contains_key(&SourceId::new("#12:1")));
        assert_eq!(extractor.regions().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_edges_respect_endpoint_labels() {
        let extractor = Extractor::new(Arc::new(source()));

        // A house living somewhere is not a lives-in edge.
        let lives_in = extractor.edges(EdgeKind::LivesIn).await.unwrap();
        assert_eq!(lives_in, vec![RawEdge::new("#11:0", "#14:0")]);

        // Allegiance to a settlement is ignored.
        let allegiance = extractor.edges(EdgeKind::OwesAllegianceTo).await.unwrap();
        assert_eq!(allegiance, vec![RawEdge::new("#11:0", "#12:0")]);

        let parents = extractor.edges(EdgeKind::HasParentRegion).await.unwrap();
        assert_eq!(parents, vec![RawEdge::new("#13:0", "#14:0")]);

        assert_eq!(extractor.edges(EdgeKind::HasSeat).await.unwrap().len(), 1);
    }
}
