//! Domain pattern matching: compiled globs with a permissive fallback.

use globset::{Glob, GlobSet, GlobSetBuilder};
use strata_core::types::Domain;

/// Compiled matcher for one domain's pattern list.
///
/// Patterns that compile become one glob set. A pattern that fails to
/// compile falls back to a substring probe with its wildcard characters
/// stripped; a pattern that strips to nothing matches nothing. The bias
/// is toward matching: a bad pattern should not flag false orphans.
pub struct DomainMatcher {
    name: String,
    globs: GlobSet,
    fallbacks: Vec<String>,
}

impl DomainMatcher {
    pub fn new(domain: &Domain) -> Self {
        let mut builder = GlobSetBuilder::new();
        let mut fallbacks = Vec::new();
        for pattern in &domain.patterns {
            match Glob::new(pattern) {
                Ok(glob) => {
                    builder.add(glob);
                }
                Err(err) => {
                    tracing::debug!(
                        domain = %domain.name,
                        pattern = %pattern,
                        error = %err,
                        "pattern failed to compile, using substring fallback"
                    );
                    let stripped: String = pattern
                        .chars()
                        .filter(|c| !matches!(c, '*' | '?' | '[' | ']'))
                        .collect();
                    if !stripped.is_empty() {
                        fallbacks.push(stripped);
                    }
                }
            }
        }
        Self {
            name: domain.name.clone(),
            globs: builder.build().unwrap_or_else(|_| GlobSet::empty()),
            fallbacks,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether any pattern of this domain covers the relative path.
    pub fn covers(&self, rel_path: &str) -> bool {
        if self.globs.is_match(rel_path) {
            return true;
        }
        self.fallbacks.iter().any(|fragment| rel_path.contains(fragment))
    }
}
