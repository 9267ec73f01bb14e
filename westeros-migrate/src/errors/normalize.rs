//! Error types for the normalization stage.
use thiserror::Error;

/// Represents errors that can occur while normalizing source records.
///
/// Record-level problems (a missing name, a name that cleans to nothing) are
/// not errors: the record is dropped and the run continues. Only broken
/// structural assumptions about the source snapshot end up here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NormalizeError {
    /// A reference table names a region the source graph does not contain.
    #[error("Lookup failure: no region named '{name}' found")]
    LookupFailure { name: String },
}

impl NormalizeError {
    pub fn lookup_failure(name: impl Into<String>) -> Self {
        Self::LookupFailure { name: name.into() }
    }
}
