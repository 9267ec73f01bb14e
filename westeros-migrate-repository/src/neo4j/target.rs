// Neo4j target graph writer
use async_trait::async_trait;
use neo4rs::{Graph, Query};
use tracing::{debug, info};
use westeros_migrate_shared::{EdgeKind, NewEntity, TargetId};

use super::{connection, cypher};
use crate::config::StoreConfig;
use crate::errors::StoreError;
use crate::interfaces::TargetGraph;

/// Rebuilds the canonical graph in a Neo4j database.
pub struct Neo4jTargetGraph {
    graph: Graph,
}

impl Neo4jTargetGraph {
    /// Connect to the target database and check it answers.
    pub async fn connect(config: &StoreConfig) -> Result<Self, StoreError> {
        let graph = connection::connect(config)?;
        connection::probe(&graph).await?;

        info!(location = %config.location(), "Connected to target graph");
        Ok(Self { graph })
    }

    /// Collect the `name` column of a `SHOW ...` query.
    async fn names(&self, cypher: &str) -> Result<Vec<String>, StoreError> {
        let mut rows = self.graph.execute(Query::new(cypher.to_string())).await?;
        let mut names = Vec::new();
        while let Some(row) = rows.next().await? {
            names.push(row.get::<String>("name")?);
        }
        Ok(names)
    }
}

#[async_trait]
impl TargetGraph for Neo4jTargetGraph {
    async fn recreate(&self) -> Result<(), StoreError> {
        self.graph
            .run(Query::new("MATCH (n) DETACH DELETE n".to_string()))
            .await?;

        // Constraints own their backing indexes, so they go first.
        let constraints = self.names("SHOW CONSTRAINTS YIELD name RETURN name").await?;
        for name in &constraints {
            let drop = format!("DROP CONSTRAINT {} IF EXISTS", cypher::quote_identifier(name));
            self.graph.run(Query::new(drop)).await?;
        }

        let indexes = self
            .names("SHOW INDEXES YIELD name, type WHERE type <> 'LOOKUP' RETURN name")
            .await?;
        for name in &indexes {
            let drop = format!("DROP INDEX {} IF EXISTS", cypher::quote_identifier(name));
            self.graph.run(Query::new(drop)).await?;
        }

        info!(
            constraints = constraints.len(),
            indexes = indexes.len(),
            "Wiped target graph"
        );
        Ok(())
    }

    async fn apply_statement(&self, statement: &str) -> Result<(), StoreError> {
        debug!(statement = %statement, "Applying schema statement");
        self.graph.run(Query::new(statement.to_string())).await?;
        Ok(())
    }

    async fn create_entity(&self, entity: &NewEntity) -> Result<TargetId, StoreError> {
        let mut query = Query::new(cypher::create_entity(entity))
            .param("uuid", entity.uuid.clone())
            .param("name", entity.name.clone())
            .param("alias", entity.alias.clone());

        if let Some(motto) = &entity.motto {
            query = query.param("motto", motto.clone());
        }

        let mut rows = self.graph.execute(query).await?;
        let row = rows.next().await?.ok_or_else(|| {
            StoreError::query(format!(
                "Creating {} '{}' returned no identifier",
                entity.kind, entity.name
            ))
        })?;

        let id: String = row.get("id")?;
        Ok(TargetId::new(id))
    }

    async fn create_edge(
        &self,
        kind: EdgeKind,
        from: &TargetId,
        to: &TargetId,
    ) -> Result<(), StoreError> {
        let query = Query::new(cypher::create_edge(kind))
            .param("from", from.as_str())
            .param("to", to.as_str());

        let mut rows = self.graph.execute(query).await?;
        let created = match rows.next().await? {
            Some(row) => row.get::<i64>("created")?,
            None => 0,
        };

        if created == 0 {
            return Err(StoreError::query(format!(
                "No {} edge created between {} and {}",
                kind, from, to
            )));
        }

        Ok(())
    }
}
