use std::collections::HashMap;
use westeros_migrate_shared::{EdgePair, SourceId, TargetId};

/// Source identifier -> identifier assigned by the target store.
///
/// Built by the entity phase and handed to the edge phase; it only lives for
/// one run.
#[derive(Debug, Default)]
pub struct IdRemap {
    ids: HashMap<SourceId, TargetId>,
}

impl IdRemap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, source_id: SourceId, target_id: TargetId) {
        self.ids.insert(source_id, target_id);
    }

    pub fn get(&self, source_id: &SourceId) -> Option<&TargetId> {
        self.ids.get(source_id)
    }

    /// Both endpoints of `pair`, or `None` if either was never created.
    pub fn resolve(&self, pair: &EdgePair) -> Option<(&TargetId, &TargetId)> {
        Some((self.get(&pair.source_id)?, self.get(&pair.destination_id)?))
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
