//! Change impact analysis over the reverse dependency graph.

use std::collections::VecDeque;

use petgraph::stable_graph::NodeIndex;
use strata_core::errors::AnalysisError;
use strata_core::types::collections::{FxHashMap, FxHashSet};
use strata_core::types::Domain;

use crate::cycles::detect_cycles_dfs;
use crate::graph::DomainGraph;

use super::types::{ChangeType, ImpactReport, ImpactSeverity, RiskAssessment, RiskLevel};

/// Analyze the impact of changing one domain.
///
/// `change_type` is matched case-insensitively against `modify` and
/// `delete`; any other label still reports direct dependents but leaves
/// the transitive set empty. An unknown `target` is an error, so batch
/// callers can skip it and continue.
pub fn analyze_change_impact(
    graph: &DomainGraph,
    domains: &[Domain],
    target: &str,
    change_type: &str,
) -> Result<ImpactReport, AnalysisError> {
    let start = graph
        .index_of(target)
        .ok_or_else(|| AnalysisError::NotFound {
            domain: target.to_string(),
        })?;
    let change = ChangeType::parse(change_type);

    let mut directly_affected: Vec<String> = graph
        .predecessors(start)
        .map(|idx| graph.name_of(idx).to_string())
        .collect();
    directly_affected.sort_unstable();

    let mut transitively_affected: Vec<String> = if change.traverses() {
        transitive_dependents(graph, start)
            .into_iter()
            .map(|idx| graph.name_of(idx).to_string())
            .collect()
    } else {
        Vec::new()
    };
    transitively_affected.sort_unstable();

    let by_name: FxHashMap<&str, &Domain> =
        domains.iter().map(|d| (d.name.as_str(), d)).collect();
    let mut total_files_affected = 0;
    let mut total_lines_affected = 0;
    for name in std::iter::once(target).chain(transitively_affected.iter().map(String::as_str)) {
        if let Some(domain) = by_name.get(name) {
            total_files_affected += domain.file_count;
            total_lines_affected += domain.line_count;
        }
    }

    let coupling_score = directly_affected.len() as f64 / graph.node_count() as f64;
    let max_dependency_depth = dependent_depth(graph, start);
    let affected = transitively_affected.len();
    let severity = classify_severity(affected, coupling_score);

    // Cycle membership re-runs the DFS enumeration on every query;
    // nothing is cached between calls.
    let in_cycle = detect_cycles_dfs(graph)
        .iter()
        .any(|cycle| cycle.iter().any(|name| name == target));
    let risk = assess_risk(affected, coupling_score, in_cycle, change);
    let recommendations = build_recommendations(
        change,
        target,
        directly_affected.len(),
        affected,
        severity,
    );

    tracing::debug!(
        domain = %target,
        change = %change_type,
        affected = affected,
        severity = severity.name(),
        risk = risk.level.name(),
        "change impact analyzed"
    );

    Ok(ImpactReport {
        target: target.to_string(),
        change_type: change_type.to_string(),
        directly_affected,
        transitively_affected,
        total_files_affected,
        total_lines_affected,
        max_dependency_depth,
        coupling_score,
        severity,
        risk,
        recommendations,
    })
}

/// Inverse BFS from `start`. Each node is visited once; `start` itself is
/// excluded from the result even when a self-loop reaches it again.
fn transitive_dependents(graph: &DomainGraph, start: NodeIndex) -> Vec<NodeIndex> {
    let mut visited = FxHashSet::default();
    let mut queue = VecDeque::new();
    let mut result = Vec::new();

    visited.insert(start);
    queue.push_back(start);

    while let Some(node) = queue.pop_front() {
        if node != start {
            result.push(node);
        }
        for pred in graph.predecessors(node) {
            if visited.insert(pred) {
                queue.push_back(pred);
            }
        }
    }

    result
}

/// Longest simple dependent chain above `start`, counted in edges.
fn dependent_depth(graph: &DomainGraph, start: NodeIndex) -> usize {
    let mut on_path = FxHashSet::default();
    on_path.insert(start);
    longest_chain(graph, start, &mut on_path)
}

fn longest_chain(
    graph: &DomainGraph,
    node: NodeIndex,
    on_path: &mut FxHashSet<NodeIndex>,
) -> usize {
    let mut max = 0;
    for pred in graph.predecessors(node) {
        if on_path.insert(pred) {
            max = max.max(1 + longest_chain(graph, pred, on_path));
            on_path.remove(&pred);
        }
    }
    max
}

/// Severity tiers on affected count and coupling.
fn classify_severity(affected: usize, coupling: f64) -> ImpactSeverity {
    if affected == 0 {
        ImpactSeverity::Low
    } else if affected <= 2 && coupling < 0.3 {
        ImpactSeverity::Low
    } else if affected <= 5 && coupling < 0.6 {
        ImpactSeverity::Medium
    } else {
        ImpactSeverity::High
    }
}

/// Additive risk score from three independent factors, clamped to 0.0-1.0.
fn assess_risk(
    affected: usize,
    coupling: f64,
    in_cycle: bool,
    change: ChangeType,
) -> RiskAssessment {
    let mut score: f64 = 0.0;
    let mut factors = Vec::new();

    if affected > 10 {
        score += 0.4;
        factors.push(format!("very high number of affected domains ({affected})"));
    } else if affected > 5 {
        score += 0.3;
        factors.push(format!("high number of affected domains ({affected})"));
    } else if affected > 2 {
        score += 0.2;
        factors.push(format!("moderate number of affected domains ({affected})"));
    }

    if coupling > 0.6 {
        score += 0.3;
        factors.push(format!("very high coupling score ({coupling:.2})"));
    } else if coupling > 0.3 {
        score += 0.2;
        factors.push(format!("high coupling score ({coupling:.2})"));
    }

    if in_cycle {
        score += 0.3;
        factors.push("target participates in a circular dependency".to_string());
    }

    let score = score.clamp(0.0, 1.0);

    RiskAssessment {
        level: RiskLevel::from_score(score),
        score,
        factors,
        mitigations: build_mitigations(change, in_cycle, coupling, affected),
    }
}

fn build_mitigations(
    change: ChangeType,
    in_cycle: bool,
    coupling: f64,
    affected: usize,
) -> Vec<String> {
    let mut mitigations = Vec::new();
    match change {
        ChangeType::Delete => {
            mitigations
                .push("Migrate dependent domains away before removing the target".to_string());
            mitigations
                .push("Keep the old domain available during a deprecation window".to_string());
        }
        ChangeType::Modify => {
            mitigations
                .push("Keep the interface seen by dependent domains compatible".to_string());
        }
        ChangeType::Other => {}
    }
    if in_cycle {
        mitigations.push("Break the circular dependency before applying the change".to_string());
    }
    if coupling > 0.3 {
        mitigations.push("Split the target domain to shrink its dependent surface".to_string());
    }
    if affected > 0 {
        mitigations.push("Run the dependent domains' test suites against the change".to_string());
    }
    mitigations
}

fn build_recommendations(
    change: ChangeType,
    target: &str,
    direct: usize,
    transitive: usize,
    severity: ImpactSeverity,
) -> Vec<String> {
    let mut recommendations = Vec::new();
    if direct == 0 && transitive == 0 {
        recommendations.push(format!(
            "No dependents found: changes to '{target}' are isolated"
        ));
        return recommendations;
    }
    match change {
        ChangeType::Delete => {
            recommendations.push(format!(
                "Plan a migration path for the {direct} direct dependent(s) before deleting '{target}'"
            ));
        }
        ChangeType::Modify => {
            recommendations.push(format!(
                "Coordinate the change with the {direct} direct dependent(s) of '{target}'"
            ));
        }
        ChangeType::Other => {
            recommendations.push(format!(
                "Unrecognized change type: review the {direct} direct dependent(s) of '{target}' manually"
            ));
        }
    }
    if severity == ImpactSeverity::High {
        recommendations
            .push("Stage the rollout: the change reaches a large share of the graph".to_string());
    }
    recommendations
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_thresholds() {
        assert_eq!(classify_severity(0, 0.9), ImpactSeverity::Low);
        assert_eq!(classify_severity(2, 0.2), ImpactSeverity::Low);
        assert_eq!(classify_severity(2, 0.3), ImpactSeverity::Medium);
        assert_eq!(classify_severity(5, 0.5), ImpactSeverity::Medium);
        assert_eq!(classify_severity(6, 0.1), ImpactSeverity::High);
        assert_eq!(classify_severity(3, 0.7), ImpactSeverity::High);
    }

    #[test]
    fn test_risk_score_is_additive_and_clamped() {
        let risk = assess_risk(12, 0.7, true, ChangeType::Modify);
        // 0.4 + 0.3 + 0.3 caps exactly at 1.0
        assert_eq!(risk.score, 1.0);
        assert_eq!(risk.level, RiskLevel::High);
        assert_eq!(risk.factors.len(), 3);

        let quiet = assess_risk(0, 0.0, false, ChangeType::Modify);
        assert_eq!(quiet.score, 0.0);
        assert_eq!(quiet.level, RiskLevel::Low);
        assert!(quiet.factors.is_empty());
    }

    #[test]
    fn test_cycle_membership_alone_stays_low() {
        let risk = assess_risk(0, 0.0, true, ChangeType::Modify);
        assert_eq!(risk.score, 0.3);
        assert_eq!(risk.level, RiskLevel::Low);
    }
}
