//! End-to-end wiring: extract, normalize, migrate.

use std::sync::Arc;
use tracing::info;
use westeros_migrate_repository::{Neo4jSourceGraph, Neo4jTargetGraph, SourceGraph, TargetGraph};

use crate::config::MigrationConfig;
use crate::connectivity::wait_for_store;
use crate::dataset::NormalizedDataset;
use crate::errors::MigrateError;
use crate::extractor::Extractor;
use crate::migration::{MigrationReport, Migrator};
use crate::schema::Schema;

/// Migrate everything in `source` into a rebuilt `target`.
pub async fn migrate(
    source: Arc<dyn SourceGraph>,
    target: Arc<dyn TargetGraph>,
    schema: Schema,
) -> Result<MigrationReport, MigrateError> {
    let extractor = Extractor::new(source);
    let dataset = NormalizedDataset::load(&extractor).await?;

    Migrator::new(target, schema).run(&dataset).await
}

/// Run a migration between the Neo4j databases named in `config`.
///
/// Waits for both databases to accept connections first, within the
/// configured retry policy.
pub async fn run(config: &MigrationConfig) -> Result<MigrationReport, MigrateError> {
    let schema = match &config.schema_path {
        Some(path) => Schema::load(path).await?,
        None => Schema::default(),
    };

    info!(location = %config.source.location(), "Waiting for source graph");
    let source = wait_for_store("source", &config.retry, || {
        Neo4jSourceGraph::connect(&config.source)
    })
    .await?;

    info!(location = %config.target.location(), "Waiting for target graph");
    let target = wait_for_store("target", &config.retry, || {
        Neo4jTargetGraph::connect(&config.target)
    })
    .await?;

    migrate(Arc::new(source), Arc::new(target), schema).await
}
