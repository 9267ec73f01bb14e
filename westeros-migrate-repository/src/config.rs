//! Connection settings for a graph store.

use std::fmt;

/// Where and how to reach one graph database.
#[derive(Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Bolt URI, e.g. `bolt://localhost:7687`.
    pub uri: String,
    pub user: String,
    pub password: String,
    /// Database name; the server default database when `None`.
    pub database: Option<String>,
}

impl StoreConfig {
    pub fn new(uri: impl Into<String>, user: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            user: user.into(),
            password: password.into(),
            database: None,
        }
    }

    pub fn with_database(mut self, database: impl Into<String>) -> Self {
        self.database = Some(database.into());
        self
    }

    /// `uri/database`, used in log lines and error messages.
    pub fn location(&self) -> String {
        match &self.database {
            Some(db) => format!("{}/{}", self.uri, db),
            None => self.uri.clone(),
        }
    }
}

// Keeps the password out of logs.
impl fmt::Debug for StoreConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoreConfig")
            .field("uri", &self.uri)
            .field("user", &self.user)
            .field("password", &"***")
            .field("database", &self.database)
            .finish()
    }
}
