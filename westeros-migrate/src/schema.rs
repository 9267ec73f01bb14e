//! The target schema artifact.
//!
//! A schema file holds one statement per line. Blank lines and lines starting
//! with `//` are skipped; everything else is applied verbatim, in file order.

use std::path::Path;
use tracing::info;

use crate::errors::MigrateError;

/// Schema shipped with the binary.
pub const DEFAULT_SCHEMA: &str = include_str!("../schema/westeros.cypher");

const COMMENT_MARKER: &str = "//";

/// A schema statement and the 1-based line it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaStatement {
    pub line: usize,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    statements: Vec<SchemaStatement>,
}

impl Schema {
    pub fn parse(text: &str) -> Self {
        let statements = text
            .lines()
            .enumerate()
            .filter_map(|(idx, line)| {
                let line_text = line.trim();
                if line_text.is_empty() || line_text.starts_with(COMMENT_MARKER) {
                    return None;
                }
                Some(SchemaStatement {
                    line: idx + 1,
                    text: line_text.to_string(),
                })
            })
            .collect();

        Self { statements }
    }

    /// Read and parse a schema file.
    pub async fn load(path: &Path) -> Result<Self, MigrateError> {
        let text = tokio::fs::read_to_string(path).await?;
        let schema = Self::parse(&text);

        info!(
            path = %path.display(),
            statements = schema.len(),
            "Loaded schema file"
        );
        Ok(schema)
    }

    pub fn statements(&self) -> &[SchemaStatement] {
        &self.statements
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

impl Default for Schema {
    fn default() -> Self {
        Self::parse(DEFAULT_SCHEMA)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comments_and_blank_lines_skipped() {
        let schema = Schema::parse(
            "// header\n\nCREATE INDEX a IF NOT EXISTS FOR (n:A) ON (n.name)\n   \n  // indented\nCREATE INDEX b IF NOT EXISTS FOR (n:B) ON (n.name)\n",
        );

        let lines: Vec<usize> = schema.statements().iter().map(|s| s.line).collect();
        assert_eq!(lines, vec![3, 6]);
        assert!(schema.statements()[1].text.starts_with("CREATE INDEX b"));
    }

    #[test]
    fn test_empty_schema() {
        assert!(Schema::parse("").is_empty());
        assert!(Schema::parse("// only a comment\n\n").is_empty());
    }

    #[test]
    fn test_default_schema_covers_every_label() {
        let schema = Schema::default();
        assert!(!schema.is_empty());

        for label in ["Character", "NobleHouse", "Region"] {
            let pattern = format!(":{})", label);
            assert!(
                schema.statements().iter().any(|s| s.text.contains(&pattern)),
                "no statement for {}",
                label
            );
        }
        assert!(schema
            .statements()
            .iter()
            .all(|s| !s.text.starts_with(COMMENT_MARKER)));
    }

    #[tokio::test]
    async fn test_load_missing_file_is_io_error() {
        let err = Schema::load(Path::new("/nonexistent/westeros.cypher"))
            .await
            .unwrap_err();
        assert!(matches!(err, MigrateError::Io(_)));
    }
}
