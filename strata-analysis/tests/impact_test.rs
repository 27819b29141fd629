//! Change impact tests over the reverse dependency graph.
//!
//! Fixture used by the chain tests (arrows point at dependencies):
//!
//! ```text
//!   a ──> b ──> c ──> d
//! ```
//!
//! Dependents flow the other way: changing `c` reaches `b` directly and
//! `a` transitively.

use strata_analysis::graph::DomainGraph;
use strata_analysis::impact::{analyze_change_impact, ImpactSeverity, RiskLevel};
use strata_core::errors::AnalysisError;
use strata_core::types::Domain;

fn make_domain(name: &str, deps: &[&str]) -> Domain {
    Domain::new(name).with_dependencies(deps.iter().copied())
}

fn chain() -> Vec<Domain> {
    vec![
        make_domain("a", &["b"]).with_size(1, 100),
        make_domain("b", &["c"]).with_size(2, 200),
        make_domain("c", &["d"]).with_size(3, 300),
        make_domain("d", &[]).with_size(4, 400),
    ]
}

#[test]
fn test_modify_reaches_transitive_dependents() {
    let domains = chain();
    let graph = DomainGraph::build(&domains);

    let report = analyze_change_impact(&graph, &domains, "c", "modify").unwrap();
    assert_eq!(report.directly_affected, vec!["b"]);
    assert_eq!(report.transitively_affected, vec!["a", "b"]);
}

#[test]
fn test_delete_reports_direct_dependents() {
    let domains = chain();
    let graph = DomainGraph::build(&domains);

    let report = analyze_change_impact(&graph, &domains, "b", "delete").unwrap();
    assert_eq!(report.directly_affected, vec!["a"]);
    assert_eq!(report.transitively_affected, vec!["a"]);
}

#[test]
fn test_unknown_target_is_an_error() {
    let domains = chain();
    let graph = DomainGraph::build(&domains);

    let err = analyze_change_impact(&graph, &domains, "ghost", "modify").unwrap_err();
    assert!(matches!(err, AnalysisError::NotFound { ref domain } if domain == "ghost"));
}

#[test]
fn test_unrecognized_change_type_skips_traversal() {
    let domains = chain();
    let graph = DomainGraph::build(&domains);

    let report = analyze_change_impact(&graph, &domains, "c", "rename").unwrap();
    assert_eq!(report.change_type, "rename");
    assert_eq!(report.directly_affected, vec!["b"]);
    assert!(report.transitively_affected.is_empty());
    assert_eq!(report.severity, ImpactSeverity::Low);
}

#[test]
fn test_change_type_matching_ignores_case() {
    let domains = chain();
    let graph = DomainGraph::build(&domains);

    let report = analyze_change_impact(&graph, &domains, "c", "MODIFY").unwrap();
    assert_eq!(report.change_type, "MODIFY");
    assert_eq!(report.transitively_affected, vec!["a", "b"]);
}

#[test]
fn test_size_totals_cover_target_and_transitive_set() {
    let domains = chain();
    let graph = DomainGraph::build(&domains);

    // c (3, 300) + a (1, 100) + b (2, 200)
    let report = analyze_change_impact(&graph, &domains, "c", "modify").unwrap();
    assert_eq!(report.total_files_affected, 6);
    assert_eq!(report.total_lines_affected, 600);
}

#[test]
fn test_dependent_depth_counts_chain_layers() {
    let domains = chain();
    let graph = DomainGraph::build(&domains);

    let top = analyze_change_impact(&graph, &domains, "a", "modify").unwrap();
    assert_eq!(top.max_dependency_depth, 0);

    let mid = analyze_change_impact(&graph, &domains, "c", "modify").unwrap();
    assert_eq!(mid.max_dependency_depth, 2);

    let bottom = analyze_change_impact(&graph, &domains, "d", "modify").unwrap();
    assert_eq!(bottom.max_dependency_depth, 3);
}

#[test]
fn test_coupling_is_direct_share_of_graph() {
    let domains = chain();
    let graph = DomainGraph::build(&domains);

    let report = analyze_change_impact(&graph, &domains, "c", "modify").unwrap();
    assert!((report.coupling_score - 0.25).abs() < 1e-9);
}

#[test]
fn test_hub_domain_scores_high_severity_medium_risk() {
    // Six leaves all depending on one core domain, seven domains total.
    let mut domains = vec![make_domain("core", &[])];
    for i in 1..=6 {
        domains.push(make_domain(&format!("leaf{i}"), &["core"]));
    }
    let graph = DomainGraph::build(&domains);

    let report = analyze_change_impact(&graph, &domains, "core", "modify").unwrap();
    assert_eq!(report.transitively_affected.len(), 6);
    assert_eq!(report.severity, ImpactSeverity::High);

    // affected > 5 adds 0.3, coupling 6/7 adds 0.3; no cycle.
    assert_eq!(report.risk.score, 0.6);
    assert_eq!(report.risk.level, RiskLevel::Medium);
    assert_eq!(report.risk.factors.len(), 2);
    assert!(report
        .recommendations
        .iter()
        .any(|r| r.contains("Stage the rollout")));
}

#[test]
fn test_cycle_membership_raises_risk() {
    let domains = vec![make_domain("a", &["b"]), make_domain("b", &["a"])];
    let graph = DomainGraph::build(&domains);

    let report = analyze_change_impact(&graph, &domains, "a", "modify").unwrap();
    // coupling 0.5 adds 0.2, cycle membership adds 0.3.
    assert_eq!(report.risk.score, 0.5);
    assert_eq!(report.risk.level, RiskLevel::Medium);
    assert!(report
        .risk
        .factors
        .iter()
        .any(|f| f.contains("circular dependency")));
    assert!(report
        .risk
        .mitigations
        .iter()
        .any(|m| m.contains("Break the circular dependency")));
}

#[test]
fn test_self_loop_is_direct_but_not_transitive() {
    let domains = vec![make_domain("solo", &["solo"]).with_size(2, 40)];
    let graph = DomainGraph::build(&domains);

    let report = analyze_change_impact(&graph, &domains, "solo", "modify").unwrap();
    assert_eq!(report.directly_affected, vec!["solo"]);
    assert!(report.transitively_affected.is_empty());
    assert_eq!(report.total_files_affected, 2);
    assert_eq!(report.max_dependency_depth, 0);
}

#[test]
fn test_isolated_domain_gets_isolation_recommendation() {
    let domains = vec![make_domain("island", &[]), make_domain("other", &[])];
    let graph = DomainGraph::build(&domains);

    let report = analyze_change_impact(&graph, &domains, "island", "delete").unwrap();
    assert!(report.directly_affected.is_empty());
    assert_eq!(report.risk.score, 0.0);
    assert_eq!(report.recommendations.len(), 1);
    assert!(report.recommendations[0].contains("isolated"));
}
