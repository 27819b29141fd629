//! Building the DomainGraph from a domain collection.

use petgraph::stable_graph::StableDiGraph;
use strata_core::types::collections::{FxHashMap, FxHashSet};
use strata_core::types::Domain;

use super::types::{DanglingReference, DomainGraph};

impl DomainGraph {
    /// Build the dependency graph from a domain collection.
    ///
    /// Nodes are created in slice order. A declared dependency only gets an
    /// edge when its name is present in the collection; everything else is
    /// recorded as a dangling reference. Duplicate dependency declarations
    /// collapse to a single edge, and a duplicate domain name keeps the
    /// first occurrence and ignores the rest.
    pub fn build(domains: &[Domain]) -> Self {
        let mut graph = StableDiGraph::with_capacity(domains.len(), domains.len() * 2);
        let mut node_indices =
            FxHashMap::with_capacity_and_hasher(domains.len(), Default::default());

        for domain in domains {
            if node_indices.contains_key(&domain.name) {
                tracing::warn!(domain = %domain.name, "duplicate domain name in collection; keeping first occurrence");
                continue;
            }
            let idx = graph.add_node(domain.name.clone());
            node_indices.insert(domain.name.clone(), idx);
        }

        let mut dangling = Vec::new();
        let mut seen: FxHashSet<&str> = FxHashSet::default();
        for domain in domains {
            if !seen.insert(domain.name.as_str()) {
                continue;
            }
            let from = node_indices[&domain.name];
            for dep in &domain.dependencies {
                match node_indices.get(dep) {
                    Some(&to) => {
                        graph.update_edge(from, to, ());
                    }
                    None => dangling.push(DanglingReference {
                        domain: domain.name.clone(),
                        reference: dep.clone(),
                    }),
                }
            }
        }

        tracing::debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            dangling = dangling.len(),
            "domain graph built"
        );

        Self {
            graph,
            node_indices,
            dangling,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_domain(name: &str, deps: &[&str]) -> Domain {
        Domain::new(name).with_dependencies(deps.iter().copied())
    }

    #[test]
    fn test_dangling_references_get_no_edge() {
        let domains = vec![
            make_domain("a", &["b", "ghost"]),
            make_domain("b", &[]),
        ];
        let graph = DomainGraph::build(&domains);

        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.dependencies_of("a"), vec!["b"]);
        assert_eq!(
            graph.dangling_references(),
            &[DanglingReference {
                domain: "a".to_string(),
                reference: "ghost".to_string(),
            }]
        );
    }

    #[test]
    fn test_duplicate_dependencies_collapse_to_one_edge() {
        let domains = vec![
            make_domain("a", &["b", "b", "b"]),
            make_domain("b", &[]),
        ];
        let graph = DomainGraph::build(&domains);
        assert_eq!(graph.dependencies_of("a"), vec!["b"]);
        assert_eq!(graph.inner().edge_count(), 1);
    }

    #[test]
    fn test_duplicate_domain_name_keeps_first() {
        let domains = vec![
            make_domain("a", &["b"]),
            make_domain("b", &[]),
            make_domain("a", &["a"]),
        ];
        let graph = DomainGraph::build(&domains);

        assert_eq!(graph.node_count(), 2);
        // Second "a" is ignored entirely, including its self-loop
        assert_eq!(graph.dependencies_of("a"), vec!["b"]);
        assert_eq!(graph.inner().edge_count(), 1);
    }
}
