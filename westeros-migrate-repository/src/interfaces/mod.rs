//! Interface definitions for the graph stores.
//!
//! The migration only talks to stores through these traits, so the pipeline
//! can run against Neo4j in production and against in-memory graphs in tests.

mod source_graph;
mod target_graph;

pub use source_graph::SourceGraph;
pub use target_graph::TargetGraph;
