// Normalized dataset - everything the migrator writes, keyed by source id
use std::collections::BTreeMap;
use tracing::info;
use westeros_migrate_shared::{Character, EdgeKind, EdgeSet, NobleHouse, Region, SourceId};

use crate::errors::MigrateError;
use crate::extractor::Extractor;
use crate::normalize::{
    add_synthetic_roots, normalize_characters, normalize_houses, normalize_regions,
    EdgeNormalizer, RegionHierarchyBuilder,
};

/// Canonical entities and edges, still referencing source identifiers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedDataset {
    pub characters: BTreeMap<SourceId, Character>,
    pub houses: BTreeMap<SourceId, NobleHouse>,
    /// Includes the synthetic World, Westeros and Essos roots.
    pub regions: BTreeMap<SourceId, Region>,
    pub edges: EdgeSet,
}

impl NormalizedDataset {
    /// Extract and normalize the whole source graph.
    ///
    /// Fails if the source cannot be read or a region named by the hierarchy
    /// tables is missing from the snapshot.
    pub async fn load(extractor: &Extractor) -> Result<Self, MigrateError> {
        info!("Reading source vertices");
        let characters = normalize_characters(&extractor.characters().await?);
        let houses = normalize_houses(&extractor.houses().await?);
        let mut regions = normalize_regions(&extractor.regions().await?);
        add_synthetic_roots(&mut regions);

        let hierarchy = RegionHierarchyBuilder::new(&regions).parent_edges()?;

        info!("Reading source edges");
        let mut normalizer = EdgeNormalizer::new();
        for kind in EdgeKind::ALL {
            normalizer.add_raw(kind, extractor.edges(kind).await?);
        }
        normalizer.add_synthesized(EdgeKind::HasParentRegion, hierarchy);
        let edges = normalizer.finish();

        info!(
            characters = characters.len(),
            houses = houses.len(),
            regions = regions.len(),
            edges = edges.total(),
            "Normalized source dataset"
        );

        Ok(Self {
            characters,
            houses,
            regions,
            edges,
        })
    }

    pub fn entity_count(&self) -> usize {
        self.characters.len() + self.houses.len() + self.regions.len()
    }
}
