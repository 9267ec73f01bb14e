//! Raw records as read from the source graph, before any cleaning.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::ids::SourceId;

/// A vertex read from the source graph.
///
/// Only fields that were present (non-null) in the source record appear in
/// `fields`, so "field absent" and "field present" can be told apart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawVertex {
    pub source_id: SourceId,
    pub fields: HashMap<String, String>,
}

impl RawVertex {
    pub fn new(source_id: impl Into<SourceId>) -> Self {
        Self {
            source_id: source_id.into(),
            fields: HashMap::new(),
        }
    }

    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// Look up a field by its exact source name.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }
}

/// An edge read from the source graph, in the direction it is stored there.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RawEdge {
    /// Tail of the edge.
    pub out_id: SourceId,
    /// Head of the edge.
    pub in_id: SourceId,
}

impl RawEdge {
    pub fn new(out_id: impl Into<SourceId>, in_id: impl Into<SourceId>) -> Self {
        Self {
            out_id: out_id.into(),
            in_id: in_id.into(),
        }
    }
}
