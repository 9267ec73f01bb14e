// Migration module - two-phase rebuild of the target graph
mod executor;
mod remap;
mod report;

pub use executor::Migrator;
pub use remap::IdRemap;
pub use report::{EdgeCounts, MigrationReport};
