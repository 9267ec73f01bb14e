//! This module defines the core data structures used across the migration.
//! It re-exports identifiers, raw records, canonical entities and edge types.

pub mod edge;
pub mod entity;
pub mod ids;
pub mod record;

pub use edge::{EdgeKind, EdgePair, EdgeSet};
pub use entity::{Character, EntityKind, NewEntity, NobleHouse, Region};
pub use ids::{SourceId, TargetId};
pub use record::{RawEdge, RawVertex};
