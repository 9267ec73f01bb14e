use std::collections::BTreeMap;
use std::time::Duration;
use westeros_migrate_shared::{EdgeKind, EntityKind};

/// Edge phase outcome for one relationship kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EdgeCounts {
    pub created: usize,
    /// Pairs with an endpoint that was never created in the target.
    pub skipped: usize,
}

/// What a completed migration run wrote.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MigrationReport {
    pub entities: BTreeMap<EntityKind, usize>,
    pub edges: BTreeMap<EdgeKind, EdgeCounts>,
    pub schema_statements: usize,
    pub elapsed: Duration,
}

impl MigrationReport {
    pub fn entities_created(&self, kind: EntityKind) -> usize {
        self.entities.get(&kind).copied().unwrap_or(0)
    }

    pub fn edges(&self, kind: EdgeKind) -> EdgeCounts {
        self.edges.get(&kind).copied().unwrap_or_default()
    }

    pub fn total_entities(&self) -> usize {
        self.entities.values().sum()
    }

    pub fn total_edges_created(&self) -> usize {
        self.edges.values().map(|c| c.created).sum()
    }

    pub fn total_edges_skipped(&self) -> usize {
        self.edges.values().map(|c| c.skipped).sum()
    }
}
