// Migration executor - rebuilds the target graph from a normalized dataset
use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};
use uuid::Uuid;
use westeros_migrate_repository::TargetGraph;
use westeros_migrate_shared::{EdgeKind, EdgeSet, EntityKind, NewEntity, SourceId};

use super::remap::IdRemap;
use super::report::{EdgeCounts, MigrationReport};
use crate::dataset::NormalizedDataset;
use crate::errors::MigrateError;
use crate::schema::Schema;

/// Recreates every entity and edge of a dataset in a freshly wiped target.
///
/// Runs are all-or-nothing from the caller's point of view: any error aborts
/// the run and leaves the target partially populated, and the next run starts
/// by wiping it again.
pub struct Migrator {
    target: Arc<dyn TargetGraph>,
    schema: Schema,
}

impl Migrator {
    pub fn new(target: Arc<dyn TargetGraph>, schema: Schema) -> Self {
        Self { target, schema }
    }

    /// Execute the full migration.
    pub async fn run(&self, dataset: &NormalizedDataset) -> Result<MigrationReport, MigrateError> {
        let start_time = Instant::now();
        let mut report = MigrationReport::default();

        info!("=== Preparing target graph ===");
        report.schema_statements = self.prepare().await?;

        info!(entities = dataset.entity_count(), "=== Creating entities ===");
        let remap = self.create_entities(dataset, &mut report).await?;

        info!(edges = dataset.edges.total(), "=== Creating edges ===");
        report.edges = self.create_edges(&remap, &dataset.edges).await?;

        report.elapsed = start_time.elapsed();
        info!(
            entities = report.total_entities(),
            edges_created = report.total_edges_created(),
            edges_skipped = report.total_edges_skipped(),
            elapsed_secs = report.elapsed.as_secs_f64(),
            "=== Migration complete ==="
        );

        Ok(report)
    }

    /// Wipe the target and apply the schema. Returns the number of statements applied.
    async fn prepare(&self) -> Result<usize, MigrateError> {
        self.target.recreate().await?;
        info!("Cleared target graph");

        for statement in self.schema.statements() {
            self.target
                .apply_statement(&statement.text)
                .await
                .map_err(|source| MigrateError::SchemaApplication {
                    line: statement.line,
                    statement: statement.text.clone(),
                    source,
                })?;
        }
        info!(statements = self.schema.len(), "Applied schema");

        Ok(self.schema.len())
    }

    async fn create_entities(
        &self,
        dataset: &NormalizedDataset,
        report: &mut MigrationReport,
    ) -> Result<IdRemap, MigrateError> {
        let mut remap = IdRemap::new();

        let characters = dataset
            .characters
            .iter()
            .map(|(id, c)| (id, NewEntity::from_character(c, new_uuid())));
        self.create_all(EntityKind::Character, characters, &mut remap, report)
            .await?;

        let houses = dataset
            .houses
            .iter()
            .map(|(id, h)| (id, NewEntity::from_house(h, new_uuid())));
        self.create_all(EntityKind::NobleHouse, houses, &mut remap, report)
            .await?;

        let regions = dataset
            .regions
            .iter()
            .map(|(id, r)| (id, NewEntity::from_region(r, new_uuid())));
        self.create_all(EntityKind::Region, regions, &mut remap, report)
            .await?;

        Ok(remap)
    }

    async fn create_all<'a>(
        &self,
        kind: EntityKind,
        entities: impl Iterator<Item = (&'a SourceId, NewEntity)>,
        remap: &mut IdRemap,
        report: &mut MigrationReport,
    ) -> Result<(), MigrateError> {
        let mut created = 0;
        for (source_id, entity) in entities {
            let target_id = self.target.create_entity(&entity).await?;
            remap.record(source_id.clone(), target_id);
            created += 1;
        }

        report.entities.insert(kind, created);
        info!(kind = %kind, created, "Created entities");
        Ok(())
    }

    async fn create_edges(
        &self,
        remap: &IdRemap,
        edges: &EdgeSet,
    ) -> Result<BTreeMap<EdgeKind, EdgeCounts>, MigrateError> {
        let mut counts = BTreeMap::new();

        for kind in EdgeKind::ALL {
            let mut kind_counts = EdgeCounts::default();

            for pair in edges.pairs(kind) {
                match remap.resolve(pair) {
                    Some((from, to)) => {
                        self.target.create_edge(kind, from, to).await?;
                        kind_counts.created += 1;
                    }
                    None => {
                        debug!(
                            kind = %kind,
                            source_id = %pair.source_id,
                            destination_id = %pair.destination_id,
                            "Skipping edge with missing endpoint"
                        );
                        kind_counts.skipped += 1;
                    }
                }
            }

            info!(
                kind = %kind,
                created = kind_counts.created,
                skipped = kind_counts.skipped,
                "Created edges"
            );
            counts.insert(kind, kind_counts);
        }

        Ok(counts)
    }
}

fn new_uuid() -> String {
    Uuid::new_v4().to_string()
}
