//! Graph builder tests: adjacency construction, dangling references,
//! rebuild determinism.

use strata_analysis::graph::DomainGraph;
use strata_core::types::Domain;

fn make_domain(name: &str, deps: &[&str]) -> Domain {
    Domain::new(name).with_dependencies(deps.iter().copied())
}

#[test]
fn test_dangling_dependency_creates_no_edge() {
    let domains = vec![make_domain("a", &["ghost"]), make_domain("b", &[])];
    let graph = DomainGraph::build(&domains);

    assert_eq!(graph.node_count(), 2);
    assert!(graph.dependencies_of("a").is_empty());

    let dangling = graph.dangling_references();
    assert_eq!(dangling.len(), 1);
    assert_eq!(dangling[0].domain, "a");
    assert_eq!(dangling[0].reference, "ghost");
}

#[test]
fn test_duplicate_dependencies_collapse_to_one_edge() {
    let domains = vec![make_domain("a", &["b", "b", "b"]), make_domain("b", &[])];
    let graph = DomainGraph::build(&domains);

    assert_eq!(graph.dependencies_of("a"), vec!["b"]);
}

#[test]
fn test_self_loop_is_a_valid_edge() {
    let domains = vec![make_domain("a", &["a"])];
    let graph = DomainGraph::build(&domains);

    assert_eq!(graph.dependencies_of("a"), vec!["a"]);
    assert_eq!(graph.dependents_of("a"), vec!["a"]);
}

#[test]
fn test_reverse_adjacency_lists_dependents() {
    let domains = vec![
        make_domain("a", &["c"]),
        make_domain("b", &["c"]),
        make_domain("c", &[]),
    ];
    let graph = DomainGraph::build(&domains);

    let mut dependents = graph.dependents_of("c");
    dependents.sort_unstable();
    assert_eq!(dependents, vec!["a", "b"]);
    assert!(graph.dependents_of("a").is_empty());
}

#[test]
fn test_nodes_keep_declaration_order() {
    let domains = vec![
        make_domain("zeta", &[]),
        make_domain("alpha", &[]),
        make_domain("mid", &[]),
    ];
    let graph = DomainGraph::build(&domains);

    assert_eq!(graph.domain_names(), vec!["zeta", "alpha", "mid"]);
}

#[test]
fn test_rebuild_from_same_domains_is_identical() {
    let domains = vec![
        make_domain("a", &["b", "c"]),
        make_domain("b", &["c"]),
        make_domain("c", &["a"]),
    ];
    let first = DomainGraph::build(&domains);
    let second = DomainGraph::build(&domains);

    assert_eq!(first.domain_names(), second.domain_names());
    for name in ["a", "b", "c"] {
        assert_eq!(first.dependencies_of(name), second.dependencies_of(name));
        assert_eq!(first.dependents_of(name), second.dependents_of(name));
    }
}

#[test]
fn test_duplicate_domain_names_keep_first_definition() {
    let domains = vec![
        make_domain("a", &["b"]),
        make_domain("a", &[]),
        make_domain("b", &[]),
    ];
    let graph = DomainGraph::build(&domains);

    assert_eq!(graph.node_count(), 2);
    assert_eq!(graph.dependencies_of("a"), vec!["b"]);
}
