//! Source graph trait definition.

use async_trait::async_trait;
use westeros_migrate_shared::{RawEdge, RawVertex};

use crate::errors::StoreError;
use crate::types::{EdgeQuery, VertexQuery};

/// Read-only access to the unnormalized source graph.
///
/// Every returned record carries the stable per-record identifier the store
/// assigned it. The migration never writes to the source.
#[async_trait]
pub trait SourceGraph: Send + Sync {
    /// Fetch all vertices matching `query`.
    ///
    /// # Arguments
    ///
    /// * `query` - Labels to accept and fields to project
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<RawVertex>)` - One record per matching vertex; null fields are omitted
    /// * `Err(StoreError)` - If the query fails or a row cannot be decoded
    async fn fetch_vertices(&self, query: &VertexQuery) -> Result<Vec<RawVertex>, StoreError>;

    /// Fetch all edges matching `query`, in their stored direction.
    ///
    /// # Arguments
    ///
    /// * `query` - Relationship types and endpoint label constraints
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<RawEdge>)` - One record per matching edge (duplicates possible)
    /// * `Err(StoreError)` - If the query fails or a row cannot be decoded
    async fn fetch_edges(&self, query: &EdgeQuery) -> Result<Vec<RawEdge>, StoreError>;
}
