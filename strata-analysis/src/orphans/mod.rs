//! Orphaned-file detection: which source files no domain pattern covers.

pub mod analyzer;
pub mod matcher;
pub mod types;
pub mod walker;

pub use analyzer::OrphanAnalyzer;
pub use matcher::DomainMatcher;
pub use types::{AssignmentSuggestion, OrphanReport};
pub use walker::{collect_source_files, EXCLUDED_DIRS, SOURCE_EXTENSIONS};
