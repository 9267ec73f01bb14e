//! Target graph trait definition.

use async_trait::async_trait;
use westeros_migrate_shared::{EdgeKind, NewEntity, TargetId};

use crate::errors::StoreError;

/// Write access to the graph being rebuilt.
///
/// The migrator owns the target exclusively for the duration of a run: it
/// wipes it, applies the schema, then creates entities and edges.
#[async_trait]
pub trait TargetGraph: Send + Sync {
    /// Remove all data, constraints and indexes so the schema can be applied fresh.
    async fn recreate(&self) -> Result<(), StoreError>;

    /// Apply one schema statement.
    async fn apply_statement(&self, statement: &str) -> Result<(), StoreError>;

    /// Create an entity and return the identifier the store assigned it.
    ///
    /// The returned `TargetId` is the handle later passed to `create_edge`.
    async fn create_entity(&self, entity: &NewEntity) -> Result<TargetId, StoreError>;

    /// Create a typed edge between two previously created entities.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - If the edge was created
    /// * `Err(StoreError)` - If either handle is unknown to the store or the write fails
    async fn create_edge(
        &self,
        kind: EdgeKind,
        from: &TargetId,
        to: &TargetId,
    ) -> Result<(), StoreError>;
}
