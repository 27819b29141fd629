//! Orchestrator report types: per-slot outcomes, summary, recommendations.

use serde::Serialize;

use crate::cycles::CycleReport;
use crate::orphans::OrphanReport;

use super::dependency::DependencyHealthReport;

/// Outcome of one analysis slot.
///
/// A failed slot serializes as `{"error": "..."}` under its key while the
/// other slots keep their full reports. Partial results always beat total
/// failure.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum AnalysisOutcome<T> {
    Report(T),
    Failed { error: String },
}

impl<T> AnalysisOutcome<T> {
    pub fn report(&self) -> Option<&T> {
        match self {
            Self::Report(report) => Some(report),
            Self::Failed { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Report(_) => None,
            Self::Failed { error } => Some(error),
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

/// Three-tier health classification for the whole registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OverallHealth {
    Healthy,
    Warning,
    Critical,
}

impl OverallHealth {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Healthy => "healthy",
            Self::Warning => "warning",
            Self::Critical => "critical",
        }
    }
}

/// Summary block. Present on every report, even when all slots failed.
#[derive(Debug, Clone, Serialize)]
pub struct HealthSummary {
    pub overall_health: OverallHealth,
    pub total_domains: usize,
    pub cycles_found: usize,
    pub orphaned_files: usize,
    pub coverage_percentage: f64,
    pub highly_coupled_domains: usize,
    /// Slot keys that failed this run, in execution order. Empty on a
    /// clean run.
    pub failed_analyses: Vec<String>,
}

/// Priority tier for a recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationPriority {
    High,
    Medium,
}

/// One actionable item assembled from the sub-analyses.
#[derive(Debug, Clone, Serialize)]
pub struct Recommendation {
    /// Source analysis: `circular_dependency`, `orphaned_files` or
    /// `high_coupling`.
    #[serde(rename = "type")]
    pub kind: String,
    pub priority: RecommendationPriority,
    pub message: String,
}

/// Wall-clock milliseconds per slot plus the whole run.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct AnalysisTimings {
    pub circular_dependencies_ms: u64,
    pub orphaned_files_ms: u64,
    pub dependency_health_ms: u64,
    pub total_ms: u64,
}

/// Aggregate of the three analyses under fixed keys.
#[derive(Debug, Clone, Serialize)]
pub struct OrchestratorReport {
    pub circular_dependencies: AnalysisOutcome<CycleReport>,
    pub orphaned_files: AnalysisOutcome<OrphanReport>,
    pub dependency_health: AnalysisOutcome<DependencyHealthReport>,
    pub summary: HealthSummary,
    pub recommendations: Vec<Recommendation>,
    pub timings: AnalysisTimings,
}

/// Counters accumulated across runs of one analyzer instance. The only
/// state that survives between `perform_comprehensive_analysis` calls.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct PerformanceStats {
    pub runs: u64,
    /// Runs where at least one slot failed.
    pub degraded_runs: u64,
    pub total_elapsed_ms: u64,
    pub last_elapsed_ms: u64,
}
