use std::collections::{BTreeSet, VecDeque};

use proptest::prelude::*;
use strata_analysis::cycles::{detect_cycles_dfs, detect_cycles_tarjan};
use strata_analysis::graph::DomainGraph;
use strata_core::types::Domain;

const NODES: usize = 6;

fn domain_name(i: usize) -> String {
    format!("d{i}")
}

fn build_domains(edges: &BTreeSet<(usize, usize)>) -> Vec<Domain> {
    (0..NODES)
        .map(|i| {
            let deps: Vec<String> = edges
                .iter()
                .filter(|(from, _)| *from == i)
                .map(|(_, to)| domain_name(*to))
                .collect();
            Domain::new(domain_name(i)).with_dependencies(deps)
        })
        .collect()
}

/// Kahn's algorithm as an independent cyclicity oracle. A self loop keeps
/// its node's in-degree above zero forever, so it counts as a cycle.
fn kahn_has_cycle(edges: &BTreeSet<(usize, usize)>) -> bool {
    let mut in_degree = [0usize; NODES];
    for &(_, to) in edges {
        in_degree[to] += 1;
    }
    let mut queue: VecDeque<usize> = (0..NODES).filter(|&n| in_degree[n] == 0).collect();
    let mut processed = 0;
    while let Some(node) = queue.pop_front() {
        processed += 1;
        for &(from, to) in edges {
            if from == node {
                in_degree[to] -= 1;
                if in_degree[to] == 0 {
                    queue.push_back(to);
                }
            }
        }
    }
    processed < NODES
}

proptest! {
    #[test]
    fn dfs_agrees_with_kahn_on_cyclicity(
        raw in proptest::collection::vec((0..NODES, 0..NODES), 0..=12)
    ) {
        let edges: BTreeSet<(usize, usize)> = raw.into_iter().collect();
        let domains = build_domains(&edges);
        let graph = DomainGraph::build(&domains);

        let cycles = detect_cycles_dfs(&graph);
        prop_assert_eq!(cycles.is_empty(), !kahn_has_cycle(&edges));
    }

    #[test]
    fn tarjan_matches_multi_node_cycles_exactly(
        raw in proptest::collection::vec((0..NODES, 0..NODES), 0..=12)
    ) {
        let edges: BTreeSet<(usize, usize)> = raw.into_iter().collect();
        let without_self_loops: BTreeSet<(usize, usize)> =
            edges.iter().copied().filter(|&(from, to)| from != to).collect();
        let domains = build_domains(&edges);
        let graph = DomainGraph::build(&domains);

        // Tarjan ignores self loops; the oracle must too.
        let sccs = detect_cycles_tarjan(&graph);
        prop_assert_eq!(sccs.is_empty(), !kahn_has_cycle(&without_self_loops));

        // A multi-node component always surfaces as a DFS cycle through
        // more than one node, and vice versa.
        let multi_node_cycle = detect_cycles_dfs(&graph).iter().any(|c| c.len() > 2);
        prop_assert_eq!(!sccs.is_empty(), multi_node_cycle);
    }

    #[test]
    fn every_reported_cycle_closes_on_itself(
        raw in proptest::collection::vec((0..NODES, 0..NODES), 0..=12)
    ) {
        let edges: BTreeSet<(usize, usize)> = raw.into_iter().collect();
        let domains = build_domains(&edges);
        let graph = DomainGraph::build(&domains);

        for cycle in detect_cycles_dfs(&graph) {
            prop_assert!(cycle.len() >= 2);
            prop_assert_eq!(cycle.first(), cycle.last());
            // Every consecutive pair is a real declared dependency.
            for pair in cycle.windows(2) {
                let deps = graph.dependencies_of(&pair[0]);
                prop_assert!(deps.contains(&pair[1].as_str()));
            }
        }
    }
}
