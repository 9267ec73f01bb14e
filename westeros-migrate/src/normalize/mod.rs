//! Cleaning of raw source records into canonical entities and edge sets.

pub mod edge;
pub mod entity;
pub mod region;
pub mod text;

pub use edge::EdgeNormalizer;
pub use entity::{
    normalize_character, normalize_characters, normalize_house, normalize_houses,
    normalize_region, normalize_regions,
};
pub use region::{add_synthetic_roots, RegionHierarchyBuilder};
pub use text::{clean, split_multi_value, strip_parenthesized, strip_suffixes};
