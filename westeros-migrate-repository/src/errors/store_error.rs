//! Store error types.

use thiserror::Error;

/// Errors from source or target graph store operations.
///
/// `Connection` is the only retryable class: callers waiting for a store to
/// come up retry on it and treat everything else as fatal.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// The store could not be reached.
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// The store rejected or failed to run a query.
    #[error("Query error: {0}")]
    QueryError(String),

    /// A result row did not have the expected shape.
    #[error("Decode error: {0}")]
    DecodeError(String),

    /// The store configuration itself is unusable.
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl StoreError {
    /// Create a connection error.
    pub fn connection(msg: impl Into<String>) -> Self {
        Self::ConnectionError(msg.into())
    }

    /// Create a query error.
    pub fn query(msg: impl Into<String>) -> Self {
        Self::QueryError(msg.into())
    }

    /// Create a decode error.
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::DecodeError(msg.into())
    }

    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }

    pub fn is_connection(&self) -> bool {
        matches!(self, Self::ConnectionError(_))
    }
}

impl From<neo4rs::Error> for StoreError {
    fn from(err: neo4rs::Error) -> Self {
        match &err {
            neo4rs::Error::IOError { .. } | neo4rs::Error::ConnectionError => {
                Self::ConnectionError(err.to_string())
            }
            _ => Self::QueryError(err.to_string()),
        }
    }
}

impl From<neo4rs::DeError> for StoreError {
    fn from(err: neo4rs::DeError) -> Self {
        Self::DecodeError(err.to_string())
    }
}
