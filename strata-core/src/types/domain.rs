//! The Domain model consumed by the analysis engine.

use serde::{Deserialize, Serialize};

/// A logical code domain from the registry: a named group of files described
/// by filesystem patterns, with declared dependencies on other domains.
///
/// The analysis engine reads domains and never mutates them. Declared
/// dependencies may reference names absent from the registry (dangling) or
/// the domain itself (self-loop); duplicates are permitted. Size metrics are
/// precomputed by the registry and used only as weights in impact scoring.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Domain {
    /// Unique name, the key in the domain collection.
    pub name: String,
    /// Declared dependency names, in declaration order.
    pub dependencies: Vec<String>,
    /// Glob-like patterns describing which files belong to this domain,
    /// e.g. `src/billing/**/*.py`.
    pub patterns: Vec<String>,
    /// Number of files currently matched by the patterns.
    pub file_count: usize,
    /// Total line count across those files.
    pub line_count: usize,
}

impl Domain {
    /// Create a domain with the given name and no dependencies or patterns.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Set the declared dependencies.
    pub fn with_dependencies<I, S>(mut self, deps: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.dependencies = deps.into_iter().map(Into::into).collect();
        self
    }

    /// Set the file patterns.
    pub fn with_patterns<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.patterns = patterns.into_iter().map(Into::into).collect();
        self
    }

    /// Set the precomputed size metrics.
    pub fn with_size(mut self, file_count: usize, line_count: usize) -> Self {
        self.file_count = file_count;
        self.line_count = line_count;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_chain() {
        let domain = Domain::new("billing")
            .with_dependencies(["auth", "storage"])
            .with_patterns(["src/billing/**/*.py"])
            .with_size(12, 3400);

        assert_eq!(domain.name, "billing");
        assert_eq!(domain.dependencies, vec!["auth", "storage"]);
        assert_eq!(domain.patterns, vec!["src/billing/**/*.py"]);
        assert_eq!(domain.file_count, 12);
        assert_eq!(domain.line_count, 3400);
    }

    #[test]
    fn test_deserialize_with_missing_fields() {
        let domain: Domain = serde_json::from_str(r#"{"name": "auth"}"#).unwrap();
        assert_eq!(domain.name, "auth");
        assert!(domain.dependencies.is_empty());
        assert!(domain.patterns.is_empty());
        assert_eq!(domain.file_count, 0);
    }
}
