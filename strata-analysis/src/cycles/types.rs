//! Cycle detection report types.

use serde::Serialize;

/// Default impact score attached to every cycle-breaking suggestion.
/// A generic constant, deliberately not derived from graph centrality.
pub(crate) const DEFAULT_SUGGESTION_IMPACT: f64 = 0.5;

/// Alternative architectural patterns offered when breaking a cycle edge.
/// Free-text hints, not prescriptive fixes.
pub(crate) const ALTERNATIVE_PATTERNS: &[&str] = &[
    "observer pattern",
    "event-driven communication",
    "dependency inversion",
];

/// One suggested place to break a cycle: a single edge of the traversal path.
#[derive(Debug, Clone, Serialize)]
pub struct BreakingSuggestion {
    pub from_domain: String,
    pub to_domain: String,
    /// Generic effort/impact estimate for removing this edge.
    pub impact_score: f64,
    pub alternative_patterns: Vec<String>,
    pub description: String,
}

/// Impact assessment for a single cycle.
#[derive(Debug, Clone, Serialize)]
pub struct CycleImpact {
    /// The cycle path, repeated node at both ends.
    pub cycle: Vec<String>,
    /// Node count of the path, including the repeated terminal.
    pub cycle_length: usize,
    /// `min(1.0, cycle_length / 10.0)`.
    pub complexity_score: f64,
    /// File count summed over the unique domains in the cycle.
    pub total_files_affected: usize,
    /// Line count summed over the unique domains in the cycle.
    pub total_lines_affected: usize,
    /// Domains outside the cycle that cycle members depend on.
    pub external_dependencies: Vec<String>,
    /// Domains outside the cycle that depend on cycle members.
    pub external_dependents: Vec<String>,
    /// One suggestion per consecutive edge of the cycle.
    pub suggestions: Vec<BreakingSuggestion>,
}

/// Combined output of circular-dependency analysis.
///
/// DFS cycles and Tarjan components answer different questions: DFS
/// enumerates traversal paths (the same component can surface through
/// several entry edges, and self-loops only show up here), while Tarjan
/// reports each multi-node component exactly once. The two counts are not
/// comparable and callers must not expect them to match.
#[derive(Debug, Clone, Serialize)]
pub struct CycleReport {
    /// Number of DFS cycles found. Convenience mirror of `cycles.len()`.
    pub cycles_found: usize,
    /// Number of multi-node components. Convenience mirror of `sccs.len()`.
    pub sccs_found: usize,
    /// Cycle paths from DFS enumeration.
    pub cycles: Vec<Vec<String>>,
    /// Strongly connected components with more than one member.
    pub sccs: Vec<Vec<String>>,
    /// Per-cycle impact assessments, parallel to `cycles`.
    pub impacts: Vec<CycleImpact>,
}
