//! Summary classification and recommendation assembly.

use crate::cycles::CycleReport;
use crate::orphans::OrphanReport;

use super::dependency::DependencyHealthReport;
use super::types::{
    AnalysisOutcome, HealthSummary, OverallHealth, Recommendation, RecommendationPriority,
};

/// Coverage below this percentage is a critical condition.
pub(crate) const CRITICAL_COVERAGE_THRESHOLD: f64 = 80.0;

/// Build the summary block from the three slot outcomes.
///
/// A failed slot contributes neutral values (no cycles, no orphans, full
/// coverage): classification uses only the signals that are available,
/// and the failure itself is listed in `failed_analyses`.
pub(crate) fn build_summary(
    total_domains: usize,
    cycles: &AnalysisOutcome<CycleReport>,
    orphans: &AnalysisOutcome<OrphanReport>,
    dependency: &AnalysisOutcome<DependencyHealthReport>,
) -> HealthSummary {
    let cycles_found = cycles.report().map_or(0, |r| r.cycles_found);
    let orphaned_files = orphans.report().map_or(0, |r| r.orphaned_files.len());
    let coverage_percentage = orphans.report().map_or(100.0, |r| r.coverage_percentage);
    let highly_coupled_domains = dependency
        .report()
        .map_or(0, |r| r.highly_coupled_domains.len());

    let mut failed_analyses = Vec::new();
    if cycles.is_failed() {
        failed_analyses.push("circular_dependencies".to_string());
    }
    if orphans.is_failed() {
        failed_analyses.push("orphaned_files".to_string());
    }
    if dependency.is_failed() {
        failed_analyses.push("dependency_health".to_string());
    }

    let overall_health = classify(
        cycles_found,
        orphaned_files,
        coverage_percentage,
        highly_coupled_domains,
    );

    HealthSummary {
        overall_health,
        total_domains,
        cycles_found,
        orphaned_files,
        coverage_percentage,
        highly_coupled_domains,
        failed_analyses,
    }
}

/// Presence-check classifier, most severe condition first.
fn classify(
    cycles_found: usize,
    orphaned_files: usize,
    coverage_percentage: f64,
    highly_coupled_domains: usize,
) -> OverallHealth {
    if cycles_found > 0 {
        OverallHealth::Critical
    } else if coverage_percentage < CRITICAL_COVERAGE_THRESHOLD {
        OverallHealth::Critical
    } else if orphaned_files > 0 {
        OverallHealth::Warning
    } else if highly_coupled_domains > 0 {
        OverallHealth::Warning
    } else {
        OverallHealth::Healthy
    }
}

/// Flatten the sub-analyses into one prioritized recommendation list:
/// cycle-breaking first, then orphan assignment, then coupling hints.
pub(crate) fn build_recommendations(
    cycles: &AnalysisOutcome<CycleReport>,
    orphans: &AnalysisOutcome<OrphanReport>,
    dependency: &AnalysisOutcome<DependencyHealthReport>,
) -> Vec<Recommendation> {
    let mut recommendations = Vec::new();

    if let Some(report) = cycles.report() {
        for impact in &report.impacts {
            if let Some(suggestion) = impact.suggestions.first() {
                recommendations.push(Recommendation {
                    kind: "circular_dependency".to_string(),
                    priority: RecommendationPriority::High,
                    message: format!(
                        "{} (consider: {})",
                        suggestion.description,
                        suggestion.alternative_patterns.join(", ")
                    ),
                });
            }
        }
    }

    if let Some(report) = orphans.report() {
        for suggestion in &report.suggestions {
            let message = match &suggestion.suggested_domain {
                Some(domain) => format!(
                    "Assign {} orphaned file(s) in '{}' to domain '{}'",
                    suggestion.orphan_count, suggestion.directory, domain
                ),
                None => format!(
                    "Create a domain for {} orphaned file(s) in '{}'",
                    suggestion.orphan_count, suggestion.directory
                ),
            };
            recommendations.push(Recommendation {
                kind: "orphaned_files".to_string(),
                priority: RecommendationPriority::Medium,
                message,
            });
        }
    }

    if let Some(report) = dependency.report() {
        for entry in report.domains.iter().filter(|d| d.highly_coupled) {
            recommendations.push(Recommendation {
                kind: "high_coupling".to_string(),
                priority: RecommendationPriority::Medium,
                message: format!(
                    "Domain '{}' depends on {} domains; consider splitting it",
                    entry.domain, entry.dependency_count
                ),
            });
        }
    }

    recommendations
}
