//! Region hierarchy reconstruction.
//!
//! The source graph only partially links regions to their parents, and it has
//! no vertices at all for the world and its two continents. This module adds
//! those roots and the missing child -> parent links from hand-curated tables.

use std::collections::BTreeMap;
use tracing::debug;
use westeros_migrate_shared::{EdgePair, Region, SourceId};

use crate::errors::NormalizeError;

pub const WORLD_REGION_ID: &str = "region:world";
pub const WESTEROS_REGION_ID: &str = "region:westeros";
pub const ESSOS_REGION_ID: &str = "region:essos";

/// Synthetic roots as `(identifier, name)`.
pub const SYNTHETIC_ROOTS: [(&str, &str); 3] = [
    (WORLD_REGION_ID, "World"),
    (WESTEROS_REGION_ID, "Westeros"),
    (ESSOS_REGION_ID, "Essos"),
];

const WESTEROS_CHILDREN: &[&str] = &[
    "Beyond the Wall",
    "The North",
    "Iron Islands",
    "The Riverlands",
    "The Vale of Arryn",
    "The Westerlands",
    "The Crownlands",
    "The Reach",
    "The Stormlands",
    "Dorne",
];

const ESSOS_CHILDREN: &[&str] = &[
    "Free Cities",
    "Red Waste",
    "Slaver's Bay",
    "Qarth",
    "Asshai",
    "Yi Ti",
    "Valyrian Peninsula",
    "Dothraki Sea",
    "Bayasabhad",
    "Samyrian",
];

// The two continents are attached to the world by identifier, not by name.
const WORLD_CHILDREN: &[&str] = &["Summer Islands", "Basilisk Isles", "Ibben", "Naath"];

/// Root identifier -> names of existing regions directly below it.
pub const ROOT_CHILDREN: [(&str, &[&str]); 3] = [
    (WESTEROS_REGION_ID, WESTEROS_CHILDREN),
    (ESSOS_REGION_ID, ESSOS_CHILDREN),
    (WORLD_REGION_ID, WORLD_CHILDREN),
];

/// Parent region name -> names of settlements the source never attached to it.
///
/// A child appears under exactly one parent.
pub const REGION_LINKS: &[(&str, &[&str])] = &[
    ("Beyond the Wall", &["North Grove", "Thenn"]),
    ("The North", &["Cerwyn", "Winter town"]),
    ("The Wall", &["The Nightfort", "Eastwatch-by-the-Sea"]),
    ("The Riverlands", &["Stone Mill", "Inn at the Crossroads", "Salt Rock"]),
    ("The Reach", &["Long Table"]),
    ("The Westerlands", &["The Banefort", "Ashemark"]),
    ("The Vale of Arryn", &["Baelish Castle", "The Redfort"]),
    ("Iron Islands", &["Hammerhorn"]),
    ("The Stormlands", &["Estermont"]),
    ("Dorne", &["Wyl", "Planky Town"]),
    ("King's Landing", &["Littlefinger's brothel", "Dragonpit"]),
    ("Oldtown", &["The Citadel"]),
    ("Meereen", &["Daznak's Pit"]),
    ("House of Black and White", &["Hall of Faces"]),
    ("Dothraki Sea", &["Vaes Dothrak"]),
];

/// Insert the World, Westeros and Essos roots into `regions`.
///
/// Existing entries with the same identifiers are replaced.
pub fn add_synthetic_roots(regions: &mut BTreeMap<SourceId, Region>) {
    for (id, name) in SYNTHETIC_ROOTS {
        regions.insert(SourceId::new(id), Region::new(id, name));
    }
}

/// Builds the synthesized has-parent-region pairs over a normalized region set.
pub struct RegionHierarchyBuilder<'a> {
    regions: &'a BTreeMap<SourceId, Region>,
}

impl<'a> RegionHierarchyBuilder<'a> {
    pub fn new(regions: &'a BTreeMap<SourceId, Region>) -> Self {
        Self { regions }
    }

    /// Identifier of the first region whose canonical name is exactly `name`.
    pub fn find_by_name(&self, name: &str) -> Result<&'a SourceId, NormalizeError> {
        self.regions
            .iter()
            .find(|(_, region)| region.name == name)
            .map(|(id, _)| id)
            .ok_or_else(|| NormalizeError::lookup_failure(name))
    }

    /// `(child, parent)` pairs for both reference tables.
    ///
    /// Fails on the first table name missing from the region set.
    pub fn parent_edges(&self) -> Result<Vec<EdgePair>, NormalizeError> {
        let mut pairs = Vec::new();

        for (root_id, children) in ROOT_CHILDREN {
            for child in children {
                let child_id = self.find_by_name(child)?;
                pairs.push(EdgePair::new(child_id.clone(), root_id));
            }
        }
        for continent in [WESTEROS_REGION_ID, ESSOS_REGION_ID] {
            pairs.push(EdgePair::new(continent, WORLD_REGION_ID));
        }

        for (parent, children) in REGION_LINKS {
            let parent_id = self.find_by_name(parent)?;
            for child in children.iter() {
                let child_id = self.find_by_name(child)?;
                pairs.push(EdgePair::new(child_id.clone(), parent_id.clone()));
            }
        }

        debug!(pairs = pairs.len(), "Synthesized region hierarchy");
        Ok(pairs)
    }
}
