//! Structured read queries against the source graph.
//!
//! The extractor describes what it wants in these terms and each `SourceGraph`
//! implementation decides how to evaluate them, so normalization code never
//! deals with a query language.

/// Select vertices carrying any of `labels`, projecting `fields`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VertexQuery {
    pub labels: &'static [&'static str],
    pub fields: &'static [&'static str],
}

impl VertexQuery {
    pub const fn new(labels: &'static [&'static str], fields: &'static [&'static str]) -> Self {
        Self { labels, fields }
    }
}

/// Select edges of any of `relationship_types` between constrained endpoints.
///
/// An empty label list leaves that endpoint unconstrained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeQuery {
    pub relationship_types: &'static [&'static str],
    pub out_labels: &'static [&'static str],
    pub in_labels: &'static [&'static str],
}

impl EdgeQuery {
    pub const fn new(relationship_types: &'static [&'static str]) -> Self {
        Self {
            relationship_types,
            out_labels: &[],
            in_labels: &[],
        }
    }

    pub const fn from_labels(mut self, labels: &'static [&'static str]) -> Self {
        self.out_labels = labels;
        self
    }

    pub const fn to_labels(mut self, labels: &'static [&'static str]) -> Self {
        self.in_labels = labels;
        self
    }
}
