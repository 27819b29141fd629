//! Analysis configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the dependency-analysis subsystem.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Run the three comprehensive analyses on a worker pool. Default: false.
    pub parallel_dependency_analysis: Option<bool>,
    /// Worker pool size for parallel analysis. Default: 3.
    pub dependency_analysis_workers: Option<usize>,
    /// Dependency count above which a domain counts as highly coupled. Default: 8.
    pub coupling_threshold: Option<usize>,
    /// Include test/spec files in orphan detection. Default: false.
    pub include_tests: Option<bool>,
}

impl AnalysisConfig {
    /// Returns whether parallel analysis is enabled, defaulting to false.
    pub fn effective_parallel(&self) -> bool {
        self.parallel_dependency_analysis.unwrap_or(false)
    }

    /// Returns the effective worker pool size, defaulting to 3.
    pub fn effective_workers(&self) -> usize {
        self.dependency_analysis_workers.unwrap_or(3)
    }

    /// Returns the effective coupling threshold, defaulting to 8.
    pub fn effective_coupling_threshold(&self) -> usize {
        self.coupling_threshold.unwrap_or(8)
    }

    /// Returns whether test files are included in orphan detection,
    /// defaulting to false.
    pub fn effective_include_tests(&self) -> bool {
        self.include_tests.unwrap_or(false)
    }
}
