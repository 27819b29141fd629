//! Health reporting: dependency hygiene, the comprehensive orchestrator
//! and the background monitor.

pub mod dependency;
pub mod monitor;
pub mod orchestrator;
pub mod summary;
pub mod types;

pub use dependency::{analyze_dependency_health, DependencyHealthReport, DomainDependencyHealth};
pub use monitor::HealthMonitor;
pub use orchestrator::ComprehensiveAnalyzer;
pub use types::{
    AnalysisOutcome, AnalysisTimings, HealthSummary, OrchestratorReport, OverallHealth,
    PerformanceStats, Recommendation, RecommendationPriority,
};
