//! Per-cycle impact scoring and breaking suggestions.

use strata_core::types::collections::{FxHashMap, FxHashSet};
use strata_core::types::Domain;

use crate::graph::DomainGraph;

use super::types::{
    BreakingSuggestion, CycleImpact, ALTERNATIVE_PATTERNS, DEFAULT_SUGGESTION_IMPACT,
};

/// Assess one cycle: size-weighted complexity, file/line weight of the
/// unique member domains, the cycle's boundary (external dependencies and
/// dependents), and a breaking suggestion per consecutive edge.
///
/// The repeated terminal node counts once in the file/line sums.
pub fn analyze_cycle_impact(
    cycle: &[String],
    graph: &DomainGraph,
    domains: &[Domain],
) -> CycleImpact {
    let members: FxHashSet<&str> = cycle.iter().map(String::as_str).collect();
    let by_name: FxHashMap<&str, &Domain> =
        domains.iter().map(|d| (d.name.as_str(), d)).collect();

    let mut total_files_affected = 0;
    let mut total_lines_affected = 0;
    for name in &members {
        if let Some(domain) = by_name.get(name) {
            total_files_affected += domain.file_count;
            total_lines_affected += domain.line_count;
        }
    }

    let (external_dependencies, external_dependents) = cycle_boundary(graph, &members);

    let suggestions = cycle
        .windows(2)
        .map(|edge| BreakingSuggestion {
            from_domain: edge[0].clone(),
            to_domain: edge[1].clone(),
            impact_score: DEFAULT_SUGGESTION_IMPACT,
            alternative_patterns: ALTERNATIVE_PATTERNS
                .iter()
                .map(|p| p.to_string())
                .collect(),
            description: format!(
                "Break the dependency from '{}' to '{}' to open this cycle",
                edge[0], edge[1]
            ),
        })
        .collect();

    CycleImpact {
        cycle: cycle.to_vec(),
        cycle_length: cycle.len(),
        complexity_score: (cycle.len() as f64 / 10.0).min(1.0),
        total_files_affected,
        total_lines_affected,
        external_dependencies,
        external_dependents,
        suggestions,
    }
}

/// Edges crossing the cycle boundary, both directions, sorted and deduplicated.
fn cycle_boundary(
    graph: &DomainGraph,
    members: &FxHashSet<&str>,
) -> (Vec<String>, Vec<String>) {
    let mut dependencies: FxHashSet<&str> = FxHashSet::default();
    let mut dependents: FxHashSet<&str> = FxHashSet::default();

    for name in members {
        let Some(idx) = graph.index_of(name) else {
            continue;
        };
        for succ in graph.successors(idx) {
            let succ_name = graph.name_of(succ);
            if !members.contains(succ_name) {
                dependencies.insert(succ_name);
            }
        }
        for pred in graph.predecessors(idx) {
            let pred_name = graph.name_of(pred);
            if !members.contains(pred_name) {
                dependents.insert(pred_name);
            }
        }
    }

    let mut dependencies: Vec<String> =
        dependencies.into_iter().map(str::to_string).collect();
    let mut dependents: Vec<String> = dependents.into_iter().map(str::to_string).collect();
    dependencies.sort_unstable();
    dependents.sort_unstable();
    (dependencies, dependents)
}
