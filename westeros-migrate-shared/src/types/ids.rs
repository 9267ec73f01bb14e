//! Identifier newtypes.
//!
//! Source and target identifiers are both opaque strings, but they live in
//! different stores and must never be mixed up, so each gets its own type.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a record in the source graph.
///
/// Only meaningful while a migration runs; it is discarded once the target
/// graph has been rebuilt.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SourceId(String);

impl SourceId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SourceId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for SourceId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Identifier assigned by the target graph when an entity is created.
///
/// Doubles as the handle used to attach edges to the created entity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TargetId(String);

impl TargetId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TargetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for TargetId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_id_serializes_as_plain_string() {
        let id = SourceId::new("#12:7");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"#12:7\"");

        let back: SourceId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_display_matches_inner_value() {
        assert_eq!(TargetId::new("4:abc:0").to_string(), "4:abc:0");
        assert_eq!(SourceId::from("region:world").as_str(), "region:world");
    }
}
