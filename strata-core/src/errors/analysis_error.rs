//! Analysis errors.

use super::error_code::{self, StrataErrorCode};
use super::source_error::SourceError;

/// Errors returned by the analysis entry points.
///
/// This is a closed set: every analyzer and the orchestrator return
/// `Result<_, AnalysisError>`, and nothing panics across that boundary.
/// Batch callers match on the variant and continue with other domains.
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("Domain not found: {domain}")]
    NotFound { domain: String },

    #[error("Domain source unavailable: {0}")]
    SourceUnavailable(String),

    #[error("Analysis failed: {0}")]
    AnalysisFailed(String),
}

impl StrataErrorCode for AnalysisError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => error_code::NOT_FOUND,
            Self::SourceUnavailable(_) => error_code::SOURCE_UNAVAILABLE,
            Self::AnalysisFailed(_) => error_code::ANALYSIS_FAILED,
        }
    }
}

impl From<SourceError> for AnalysisError {
    fn from(err: SourceError) -> Self {
        Self::SourceUnavailable(err.to_string())
    }
}
