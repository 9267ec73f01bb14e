use tracing::debug;
use westeros_migrate_shared::{EdgeKind, EdgePair, EdgeSet, RawEdge};

/// Turns raw source edges into deduplicated pairs per relationship kind.
///
/// The source stores region containment as parent -> child, while the target
/// points child -> parent, so every raw has-parent-region edge is flipped.
#[derive(Debug, Default)]
pub struct EdgeNormalizer {
    edges: EdgeSet,
}

impl EdgeNormalizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether raw edges of `kind` are stored in the opposite direction.
    pub fn is_inverted(kind: EdgeKind) -> bool {
        matches!(kind, EdgeKind::HasParentRegion)
    }

    pub fn add_raw(&mut self, kind: EdgeKind, raw: impl IntoIterator<Item = RawEdge>) {
        let inverted = Self::is_inverted(kind);
        let before = self.edges.len(kind);
        let mut read = 0usize;

        for edge in raw {
            read += 1;
            let pair = if inverted {
                EdgePair::new(edge.in_id, edge.out_id)
            } else {
                EdgePair::new(edge.out_id, edge.in_id)
            };
            self.edges.insert(kind, pair);
        }

        debug!(
            kind = %kind,
            read,
            added = self.edges.len(kind) - before,
            "Normalized source edges"
        );
    }

    /// Union already-oriented pairs into `kind`.
    pub fn add_synthesized(&mut self, kind: EdgeKind, pairs: impl IntoIterator<Item = EdgePair>) {
        self.edges.extend(kind, pairs);
    }

    pub fn finish(self) -> EdgeSet {
        self.edges
    }
}
