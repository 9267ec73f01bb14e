//! In-memory graph stores.
//!
//! Both implementations evaluate the same structured queries and honour the
//! same contracts as the Neo4j ones, which makes them suitable for exercising
//! the full pipeline in tests without a database.
//!
//! # Example
//!
//! ```ignore
//! use westeros_migrate_repository::{InMemorySourceGraph, InMemoryTargetGraph};
//! use westeros_migrate_shared::RawVertex;
//!
//! let source = InMemorySourceGraph::new()
//!     .with_vertex("Region", RawVertex::new("#12:0").with_field("name", "The North"))
//!     .with_vertex("Settlement", RawVertex::new("#13:0").with_field("name", "Winterfell (castle)"))
//!     .with_edge("Has_Castles", "#12:0", "#13:0");
//! let target = InMemoryTargetGraph::new();
//! ```

mod source;
mod target;

pub use source::InMemorySourceGraph;
pub use target::{InMemoryTargetGraph, TargetSnapshot};
