//! Registry-wide dependency hygiene: dangling references, coupling,
//! isolation, and a 0-100 health score.

use serde::Serialize;
use strata_core::types::collections::FxHashMap;
use strata_core::types::Domain;

use crate::graph::DomainGraph;

/// Per-domain dependency health.
#[derive(Debug, Clone, Serialize)]
pub struct DomainDependencyHealth {
    pub domain: String,
    /// Resolved dependencies (graph out-degree).
    pub dependency_count: usize,
    /// Domains depending on this one (graph in-degree).
    pub dependent_count: usize,
    /// Declared dependencies that resolved to no known domain.
    pub dangling_references: Vec<String>,
    pub highly_coupled: bool,
    /// No resolved dependencies and no dependents.
    pub isolated: bool,
}

/// Dependency hygiene report for the whole registry.
#[derive(Debug, Clone, Serialize)]
pub struct DependencyHealthReport {
    /// One entry per domain, in registry declaration order.
    pub domains: Vec<DomainDependencyHealth>,
    pub highly_coupled_domains: Vec<String>,
    pub isolated_domains: Vec<String>,
    pub dangling_reference_count: usize,
    /// 0-100. Penalties for dangling references, high coupling and
    /// isolation, each capped so one category cannot zero the score alone.
    pub health_score: f64,
}

/// Assess dependency hygiene across the registry.
///
/// A domain is highly coupled when its resolved dependency count exceeds
/// `coupling_threshold`, and isolated when it has neither dependencies
/// nor dependents.
pub fn analyze_dependency_health(
    graph: &DomainGraph,
    domains: &[Domain],
    coupling_threshold: usize,
) -> DependencyHealthReport {
    let mut dangling_by_domain: FxHashMap<&str, Vec<String>> = FxHashMap::default();
    for dangling in graph.dangling_references() {
        dangling_by_domain
            .entry(dangling.domain.as_str())
            .or_default()
            .push(dangling.reference.clone());
    }

    let mut entries = Vec::with_capacity(domains.len());
    let mut highly_coupled_domains = Vec::new();
    let mut isolated_domains = Vec::new();
    let mut dangling_reference_count = 0;

    for domain in domains {
        let (dependency_count, dependent_count) = match graph.index_of(&domain.name) {
            Some(idx) => (graph.out_degree(idx), graph.in_degree(idx)),
            None => (0, 0),
        };
        let dangling_references = dangling_by_domain
            .remove(domain.name.as_str())
            .unwrap_or_default();
        dangling_reference_count += dangling_references.len();

        let highly_coupled = dependency_count > coupling_threshold;
        let isolated = dependency_count == 0 && dependent_count == 0;
        if highly_coupled {
            highly_coupled_domains.push(domain.name.clone());
        }
        if isolated {
            isolated_domains.push(domain.name.clone());
        }

        entries.push(DomainDependencyHealth {
            domain: domain.name.clone(),
            dependency_count,
            dependent_count,
            dangling_references,
            highly_coupled,
            isolated,
        });
    }

    let health_score = compute_health_score(
        dangling_reference_count,
        highly_coupled_domains.len(),
        isolated_domains.len(),
    );

    tracing::debug!(
        domains = domains.len(),
        dangling = dangling_reference_count,
        highly_coupled = highly_coupled_domains.len(),
        isolated = isolated_domains.len(),
        score = health_score,
        "dependency health analyzed"
    );

    DependencyHealthReport {
        domains: entries,
        highly_coupled_domains,
        isolated_domains,
        dangling_reference_count,
        health_score,
    }
}

/// 100 minus capped penalties per category.
fn compute_health_score(dangling: usize, highly_coupled: usize, isolated: usize) -> f64 {
    let mut score = 100.0;

    // Dangling references (capped at -40)
    score -= (dangling as f64 * 5.0).min(40.0);

    // Highly coupled domains (capped at -40)
    score -= (highly_coupled as f64 * 10.0).min(40.0);

    // Isolated domains (capped at -10)
    score -= (isolated as f64 * 2.0).min(10.0);

    score.clamp(0.0, 100.0)
}
