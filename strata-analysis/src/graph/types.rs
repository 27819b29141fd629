//! DomainGraph: adjacency over the domain collection.

use petgraph::stable_graph::{NodeIndex, StableDiGraph};
use petgraph::Direction;
use serde::Serialize;
use strata_core::types::collections::FxHashMap;

/// A dependency reference that did not resolve to a known domain.
///
/// Dangling references are dropped from the graph (no edge is created) and
/// collected here for the dependency-health analyzer to report. They are not
/// errors at this layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DanglingReference {
    /// Domain that declared the reference.
    pub domain: String,
    /// The dependency name that resolved to nothing.
    pub reference: String,
}

/// Directed dependency graph over a domain collection.
///
/// Nodes are domain names in registry declaration order; an edge `a -> b`
/// means domain `a` declares a dependency on domain `b`. Dependencies naming
/// unknown domains get no edge, duplicate declarations collapse to one edge,
/// and self-loops are valid edges. Rebuilt from scratch on every analysis
/// run; traversal order is deterministic for a given domain slice.
pub struct DomainGraph {
    pub(crate) graph: StableDiGraph<String, ()>,
    pub(crate) node_indices: FxHashMap<String, NodeIndex>,
    pub(crate) dangling: Vec<DanglingReference>,
}

impl DomainGraph {
    /// Number of domains in the graph.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Whether a domain with this name is in the graph.
    pub fn contains(&self, name: &str) -> bool {
        self.node_indices.contains_key(name)
    }

    /// Node index for a domain name.
    pub fn index_of(&self, name: &str) -> Option<NodeIndex> {
        self.node_indices.get(name).copied()
    }

    /// Domain name at a node index.
    pub fn name_of(&self, idx: NodeIndex) -> &str {
        self.graph[idx].as_str()
    }

    /// Node indices in insertion (registry declaration) order.
    pub fn node_order(&self) -> impl Iterator<Item = NodeIndex> + '_ {
        self.graph.node_indices()
    }

    /// Domain names in insertion order.
    pub fn domain_names(&self) -> Vec<&str> {
        self.graph
            .node_indices()
            .map(|idx| self.graph[idx].as_str())
            .collect()
    }

    /// Forward neighbors: the domains `idx` depends on.
    pub fn successors(&self, idx: NodeIndex) -> impl Iterator<Item = NodeIndex> + '_ {
        self.graph.neighbors_directed(idx, Direction::Outgoing)
    }

    /// Reverse neighbors: the domains that depend on `idx`.
    pub fn predecessors(&self, idx: NodeIndex) -> impl Iterator<Item = NodeIndex> + '_ {
        self.graph.neighbors_directed(idx, Direction::Incoming)
    }

    /// Resolved dependency names of a domain.
    pub fn dependencies_of(&self, name: &str) -> Vec<&str> {
        match self.index_of(name) {
            Some(idx) => self
                .successors(idx)
                .map(|succ| self.graph[succ].as_str())
                .collect(),
            None => Vec::new(),
        }
    }

    /// Names of the domains that depend on `name`.
    pub fn dependents_of(&self, name: &str) -> Vec<&str> {
        match self.index_of(name) {
            Some(idx) => self
                .predecessors(idx)
                .map(|pred| self.graph[pred].as_str())
                .collect(),
            None => Vec::new(),
        }
    }

    /// Number of resolved dependencies of a node.
    pub fn out_degree(&self, idx: NodeIndex) -> usize {
        self.successors(idx).count()
    }

    /// Number of dependents of a node.
    pub fn in_degree(&self, idx: NodeIndex) -> usize {
        self.predecessors(idx).count()
    }

    /// Dependency references that resolved to no known domain, in the order
    /// they were encountered during the build.
    pub fn dangling_references(&self) -> &[DanglingReference] {
        &self.dangling
    }

    /// The underlying petgraph structure, for algorithm passes.
    pub(crate) fn inner(&self) -> &StableDiGraph<String, ()> {
        &self.graph
    }
}
