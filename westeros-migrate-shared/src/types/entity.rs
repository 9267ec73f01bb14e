//! Canonical entity records.
//!
//! These are the cleaned-up shapes produced by normalization. They still carry
//! the source identifier, which the migrator needs to remap edges, but nothing
//! else from the raw record.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::SourceId;

/// The three kinds of entity present in the target graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EntityKind {
    Character,
    NobleHouse,
    Region,
}

impl EntityKind {
    pub const ALL: [EntityKind; 3] = [
        EntityKind::Character,
        EntityKind::NobleHouse,
        EntityKind::Region,
    ];

    /// Vertex label used in the target graph.
    pub fn label(&self) -> &'static str {
        match self {
            EntityKind::Character => "Character",
            EntityKind::NobleHouse => "NobleHouse",
            EntityKind::Region => "Region",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    pub source_id: SourceId,
    pub name: String,
    pub alias: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NobleHouse {
    pub source_id: SourceId,
    pub name: String,
    pub alias: Vec<String>,
    pub motto: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    pub source_id: SourceId,
    pub name: String,
    pub alias: Vec<String>,
}

impl Region {
    /// A region with no aliases, as every region is at normalization time.
    pub fn new(source_id: impl Into<SourceId>, name: impl Into<String>) -> Self {
        Self {
            source_id: source_id.into(),
            name: name.into(),
            alias: Vec::new(),
        }
    }
}

/// The property set written to the target graph for one entity.
///
/// `motto` is only set for noble houses; the other kinds have no such property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewEntity {
    pub kind: EntityKind,
    pub uuid: String,
    pub name: String,
    pub alias: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub motto: Option<Vec<String>>,
}

impl NewEntity {
    pub fn from_character(character: &Character, uuid: impl Into<String>) -> Self {
        Self {
            kind: EntityKind::Character,
            uuid: uuid.into(),
            name: character.name.clone(),
            alias: character.alias.clone(),
            motto: None,
        }
    }

    pub fn from_house(house: &NobleHouse, uuid: impl Into<String>) -> Self {
        Self {
            kind: EntityKind::NobleHouse,
            uuid: uuid.into(),
            name: house.name.clone(),
            alias: house.alias.clone(),
            motto: Some(house.motto.clone()),
        }
    }

    pub fn from_region(region: &Region, uuid: impl Into<String>) -> Self {
        Self {
            kind: EntityKind::Region,
            uuid: uuid.into(),
            name: region.name.clone(),
            alias: region.alias.clone(),
            motto: None,
        }
    }
}
