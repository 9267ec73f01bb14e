//! Run configuration, read once from the environment and passed down.

use std::env;
use std::path::PathBuf;
use std::time::Duration;
use tracing::warn;
use westeros_migrate_repository::StoreConfig;

use crate::connectivity::{RetryPolicy, DEFAULT_MAX_ATTEMPTS, DEFAULT_RETRY_INTERVAL};
use crate::errors::MigrateError;

/// Default Neo4j user when none is configured.
const DEFAULT_NEO4J_USER: &str = "neo4j";

const SOURCE_PREFIX: &str = "SOURCE";
const TARGET_PREFIX: &str = "TARGET";

/// Everything a migration run needs to know about its surroundings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationConfig {
    pub source: StoreConfig,
    pub target: StoreConfig,
    /// Schema file to apply instead of the bundled one.
    pub schema_path: Option<PathBuf>,
    pub retry: RetryPolicy,
}

impl MigrationConfig {
    /// Build the configuration from process environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `SOURCE_NEO4J_URI`: Bolt URI of the raw graph (required)
    /// - `SOURCE_NEO4J_USER`: User name (default: neo4j)
    /// - `SOURCE_NEO4J_PASSWORD`: Password (default: empty)
    /// - `SOURCE_NEO4J_DATABASE`: Database name (default: server default)
    /// - `TARGET_NEO4J_*`: Same four settings for the graph being rebuilt
    /// - `SCHEMA_PATH`: Schema file overriding the bundled schema
    /// - `CONNECT_MAX_RETRIES`: Connection attempts per store (default: 100)
    /// - `CONNECT_RETRY_INTERVAL_MS`: Pause between attempts (default: 1000)
    pub fn from_env() -> Result<Self, MigrateError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, MigrateError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let source = store_config(&lookup, SOURCE_PREFIX)?;
        let target = store_config(&lookup, TARGET_PREFIX)?;

        let schema_path = non_empty(&lookup, "SCHEMA_PATH").map(PathBuf::from);

        let max_attempts = parsed(&lookup, "CONNECT_MAX_RETRIES", DEFAULT_MAX_ATTEMPTS);
        let interval_ms = parsed(
            &lookup,
            "CONNECT_RETRY_INTERVAL_MS",
            DEFAULT_RETRY_INTERVAL.as_millis() as u64,
        );

        Ok(Self {
            source,
            target,
            schema_path,
            retry: RetryPolicy::new(max_attempts, Duration::from_millis(interval_ms)),
        })
    }
}

fn non_empty<F>(lookup: &F, key: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key).filter(|value| !value.trim().is_empty())
}

fn parsed<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr + Copy + std::fmt::Display,
{
    match non_empty(lookup, key) {
        Some(raw) => raw.trim().parse::<T>().unwrap_or_else(|_| {
            warn!(key, value = %raw, default = %default, "Invalid number, using default");
            default
        }),
        None => default,
    }
}

fn store_config<F>(lookup: &F, prefix: &str) -> Result<StoreConfig, MigrateError>
where
    F: Fn(&str) -> Option<String>,
{
    let key = |name: &str| format!("{}_NEO4J_{}", prefix, name);

    let uri = non_empty(lookup, &key("URI"))
        .ok_or_else(|| MigrateError::config(format!("{} must be set", key("URI"))))?;
    let user = non_empty(lookup, &key("USER")).unwrap_or_else(|| DEFAULT_NEO4J_USER.to_string());
    let password = lookup(&key("PASSWORD")).unwrap_or_default();

    let config = StoreConfig::new(uri, user, password);
    Ok(match non_empty(lookup, &key("DATABASE")) {
        Some(database) => config.with_database(database),
        None => config,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_minimal_configuration_uses_defaults() {
        let config = MigrationConfig::from_lookup(lookup(&[
            ("SOURCE_NEO4J_URI", "bolt://source:7687"),
            ("TARGET_NEO4J_URI", "bolt://target:7687"),
        ]))
        .unwrap();

        assert_eq!(config.source.uri, "bolt://source:7687");
        assert_eq!(config.source.user, "neo4j");
        assert_eq!(config.target.database, None);
        assert_eq!(config.schema_path, None);
        assert_eq!(config.retry, RetryPolicy::default());
    }

    #[test]
    fn test_full_configuration() {
        let config = MigrationConfig::from_lookup(lookup(&[
            ("SOURCE_NEO4J_URI", "bolt://source:7687"),
            ("SOURCE_NEO4J_USER", "reader"),
            ("SOURCE_NEO4J_PASSWORD", "secret"),
            ("SOURCE_NEO4J_DATABASE", "got"),
            ("TARGET_NEO4J_URI", "bolt://target:7687"),
            ("TARGET_NEO4J_DATABASE", "westeros"),
            ("SCHEMA_PATH", "/etc/westeros.cypher"),
            ("CONNECT_MAX_RETRIES", "5"),
            ("CONNECT_RETRY_INTERVAL_MS", "200"),
        ]))
        .unwrap();

        assert_eq!(config.source.user, "reader");
        assert_eq!(config.source.password, "secret");
        assert_eq!(config.source.database.as_deref(), Some("got"));
        assert_eq!(config.target.location(), "bolt://target:7687/westeros");
        assert_eq!(config.schema_path, Some(PathBuf::from("/etc/westeros.cypher")));
        assert_eq!(config.retry, RetryPolicy::new(5, Duration::from_millis(200)));
    }

    #[test]
    fn test_missing_uri_is_config_error() {
        let err = MigrationConfig::from_lookup(lookup(&[("SOURCE_NEO4J_URI", "bolt://source:7687")]))
            .unwrap_err();

        assert!(matches!(err, MigrateError::Config(_)));
        assert!(err.to_string().contains("TARGET_NEO4J_URI"));
    }

    #[test]
    fn test_unparsable_numbers_fall_back() {
        let config = MigrationConfig::from_lookup(lookup(&[
            ("SOURCE_NEO4J_URI", "bolt://source:7687"),
            ("TARGET_NEO4J_URI", "bolt://target:7687"),
            ("CONNECT_MAX_RETRIES", "many"),
            ("CONNECT_RETRY_INTERVAL_MS", "-5"),
        ]))
        .unwrap();

        assert_eq!(config.retry, RetryPolicy::default());
    }
}
