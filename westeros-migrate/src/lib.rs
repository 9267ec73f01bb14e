//! # Westeros Migrate
//!
//! Rebuilds the raw Game of Thrones wiki graph as a clean, canonically shaped
//! graph.
//!
//! ## Architecture
//!
//! The migration runs as one sequential batch:
//!
//! 1. **Extractor**: Reads raw vertices and edges from the source graph
//! 2. **Normalizers**: Clean entity fields, add the synthetic region roots and
//!    hierarchy, and turn raw edges into deduplicated pairs
//! 3. **Migrator**: Wipes the target, applies the schema, creates every entity,
//!    then every edge whose endpoints were both created
//!
//! ## Modules
//!
//! - [`config`]: Run configuration read from the environment
//! - [`connectivity`]: Bounded wait for a store to become reachable
//! - [`extractor`]: Source graph reads
//! - [`normalize`]: Text, entity, region hierarchy and edge normalization
//! - [`dataset`]: The normalized dataset handed to the migrator
//! - [`schema`]: Target schema artifact
//! - [`migration`]: The two-phase migrator and its report
//! - [`pipeline`]: End-to-end wiring
//! - [`errors`]: Error types

pub mod config;
pub mod connectivity;
pub mod dataset;
pub mod errors;
pub mod extractor;
pub mod migration;
pub mod normalize;
pub mod pipeline;
pub mod schema;

pub use config::MigrationConfig;
pub use connectivity::{wait_for_store, RetryPolicy};
pub use dataset::NormalizedDataset;
pub use errors::{MigrateError, NormalizeError};
pub use extractor::Extractor;
pub use migration::{EdgeCounts, IdRemap, MigrationReport, Migrator};
pub use schema::{Schema, DEFAULT_SCHEMA};
