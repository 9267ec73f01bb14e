//! # Westeros Migrate Repository
//!
//! This crate provides the store seams for the migration: the read-only
//! `SourceGraph` the raw records come from and the `TargetGraph` the canonical
//! graph is rebuilt in. It includes Neo4j implementations of both and
//! in-memory implementations for tests and dry runs.

pub mod config;
pub mod errors;
pub mod interfaces;
pub mod memory;
pub mod neo4j;
pub mod types;

pub use config::StoreConfig;
pub use errors::StoreError;
pub use interfaces::{SourceGraph, TargetGraph};
pub use memory::{InMemorySourceGraph, InMemoryTargetGraph, TargetSnapshot};
pub use neo4j::{Neo4jSourceGraph, Neo4jTargetGraph};
pub use types::{EdgeQuery, VertexQuery};
