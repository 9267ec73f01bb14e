//! Typed relationship records.
//!
//! Edges reference their endpoints by source identifier. Within one
//! relationship kind the pairs form a set, so loading the same edge twice (or
//! synthesizing an edge the source already had) never produces a duplicate.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use super::ids::SourceId;

/// The relationship kinds present in the target graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EdgeKind {
    /// Noble house -> region holding its seat.
    HasSeat,
    /// Child region -> parent region.
    HasParentRegion,
    /// Character -> region.
    LivesIn,
    /// Character or house -> character or house.
    OwesAllegianceTo,
}

impl EdgeKind {
    pub const ALL: [EdgeKind; 4] = [
        EdgeKind::HasSeat,
        EdgeKind::HasParentRegion,
        EdgeKind::LivesIn,
        EdgeKind::OwesAllegianceTo,
    ];

    /// Relationship type used in the target graph.
    pub fn relationship_type(&self) -> &'static str {
        match self {
            EdgeKind::HasSeat => "Has_Seat",
            EdgeKind::HasParentRegion => "Has_Parent_Region",
            EdgeKind::LivesIn => "Lives_In",
            EdgeKind::OwesAllegianceTo => "Owes_Allegiance_To",
        }
    }
}

impl fmt::Display for EdgeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.relationship_type())
    }
}

/// A directed `(source, destination)` pair of source-graph identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EdgePair {
    pub source_id: SourceId,
    pub destination_id: SourceId,
}

impl EdgePair {
    pub fn new(source_id: impl Into<SourceId>, destination_id: impl Into<SourceId>) -> Self {
        Self {
            source_id: source_id.into(),
            destination_id: destination_id.into(),
        }
    }
}

/// Deduplicated edge pairs grouped by relationship kind.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeSet {
    edges: BTreeMap<EdgeKind, BTreeSet<EdgePair>>,
}

impl EdgeSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a pair; returns `false` if it was already present for this kind.
    pub fn insert(&mut self, kind: EdgeKind, pair: EdgePair) -> bool {
        self.edges.entry(kind).or_default().insert(pair)
    }

    pub fn extend(&mut self, kind: EdgeKind, pairs: impl IntoIterator<Item = EdgePair>) {
        self.edges.entry(kind).or_default().extend(pairs);
    }

    pub fn pairs(&self, kind: EdgeKind) -> impl Iterator<Item = &EdgePair> {
        self.edges.get(&kind).into_iter().flatten()
    }

    pub fn contains(&self, kind: EdgeKind, pair: &EdgePair) -> bool {
        self.edges
            .get(&kind)
            .map(|pairs| pairs.contains(pair))
            .unwrap_or(false)
    }

    pub fn len(&self, kind: EdgeKind) -> usize {
        self.edges.get(&kind).map(BTreeSet::len).unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.edges.values().map(BTreeSet::len).sum()
    }
}
