//! Top-level error type for a migration run.
use thiserror::Error;
use westeros_migrate_repository::StoreError;

use super::NormalizeError;

/// Errors that abort a migration run.
///
/// Every variant is fatal: a run either rebuilds the whole target graph or
/// stops at the first error. Edges whose endpoints were never created are not
/// errors and never show up here.
#[derive(Debug, Error)]
pub enum MigrateError {
    #[error(transparent)]
    Normalize(#[from] NormalizeError),

    /// A store stayed unreachable for the whole retry budget.
    #[error("Connection unavailable: could not reach {store} after {attempts} attempts")]
    ConnectionUnavailable { store: String, attempts: u32 },

    /// A schema statement failed to apply.
    #[error("Schema application failed on line {line} ({statement}): {source}")]
    SchemaApplication {
        line: usize,
        statement: String,
        #[source]
        source: StoreError,
    },

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl MigrateError {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_failure() {
        let lookup: MigrateError = NormalizeError::lookup_failure("The Gift").into();
        assert_eq!(
            lookup.to_string(),
            "Lookup failure: no region named 'The Gift' found"
        );

        let schema = MigrateError::SchemaApplication {
            line: 3,
            statement: "CREATE NONSENSE".to_string(),
            source: StoreError::query("Invalid input"),
        };
        assert_eq!(
            schema.to_string(),
            "Schema application failed on line 3 (CREATE NONSENSE): Query error: Invalid input"
        );
    }
}
