// Neo4j connection setup
use neo4rs::{ConfigBuilder, Graph, Query};

use crate::config::StoreConfig;
use crate::errors::StoreError;

/// Build a Neo4j `Graph` for the given store.
///
/// Connections are established lazily, so a successful return does not mean
/// the server is reachable; use [`probe`] for that.
pub fn connect(config: &StoreConfig) -> Result<Graph, StoreError> {
    let mut builder = ConfigBuilder::default()
        .uri(config.uri.as_str())
        .user(config.user.as_str())
        .password(config.password.as_str());

    if let Some(database) = &config.database {
        builder = builder.db(database.as_str());
    }

    let neo4j_config = builder
        .build()
        .map_err(|e| StoreError::config(format!("{}: {}", config.location(), e)))?;

    Graph::connect(neo4j_config).map_err(StoreError::from)
}

/// Run a trivial query to check the server answers.
pub async fn probe(graph: &Graph) -> Result<(), StoreError> {
    graph.run(Query::new("RETURN 1".to_string())).await?;
    Ok(())
}
