//! # Westeros Migrate Shared
//!
//! This crate defines the data structures passed between the extraction,
//! normalization and migration stages: raw records read from the source graph,
//! the canonical entities built from them, and typed edge sets.

pub mod types;

pub use types::edge::{EdgeKind, EdgePair, EdgeSet};
pub use types::entity::{Character, EntityKind, NewEntity, NobleHouse, Region};
pub use types::ids::{SourceId, TargetId};
pub use types::record::{RawEdge, RawVertex};
