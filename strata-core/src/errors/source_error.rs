//! Domain source (registry) errors.

use super::error_code::{self, StrataErrorCode};

/// Errors surfaced by `DomainSource` implementations.
///
/// The registry itself lives outside this workspace; implementations read
/// JSON registries, databases, or in-memory fixtures. At the orchestrator
/// boundary these convert into `AnalysisError::SourceUnavailable`.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("Registry unavailable: {0}")]
    Unavailable(String),

    #[error("Failed to read registry: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse registry: {0}")]
    Parse(#[from] serde_json::Error),
}

impl StrataErrorCode for SourceError {
    fn error_code(&self) -> &'static str {
        error_code::SOURCE_ERROR
    }
}
