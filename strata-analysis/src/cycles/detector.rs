//! Cycle detection: DFS path enumeration and Tarjan SCC.

use petgraph::algo::tarjan_scc;
use petgraph::stable_graph::NodeIndex;
use smallvec::SmallVec;
use strata_core::types::collections::FxHashSet;
use strata_core::types::Domain;

use crate::graph::DomainGraph;

use super::impact::analyze_cycle_impact;
use super::types::CycleReport;

/// Current DFS path. Cycles in domain graphs are short; this stays on the
/// stack for anything under 16 nodes deep.
type DfsPath = SmallVec<[NodeIndex; 16]>;

/// Enumerate cycles by depth-first traversal with path tracking.
///
/// One DFS forest pass over the whole graph: every node is fully explored
/// exactly once, and cycles fall out as side effects whenever an edge leads
/// back to a node on the current recursion stack. The emitted path runs from
/// that node's first occurrence through the current node, with the repeated
/// node closing the list (`[a, b, a]`; a self-loop yields `[a, a]`).
///
/// Paths are not deduplicated: a component reachable through two different
/// entry edges produces two cycles. Node order follows registry declaration
/// order, so the result is deterministic for a given domain slice.
pub fn detect_cycles_dfs(graph: &DomainGraph) -> Vec<Vec<String>> {
    let mut visited: FxHashSet<NodeIndex> = FxHashSet::default();
    let mut on_stack: FxHashSet<NodeIndex> = FxHashSet::default();
    let mut path = DfsPath::new();
    let mut cycles = Vec::new();

    for node in graph.node_order() {
        if !visited.contains(&node) {
            visit(
                graph,
                node,
                &mut visited,
                &mut on_stack,
                &mut path,
                &mut cycles,
            );
        }
    }

    tracing::debug!(cycles = cycles.len(), "dfs cycle enumeration complete");
    cycles
}

fn visit(
    graph: &DomainGraph,
    node: NodeIndex,
    visited: &mut FxHashSet<NodeIndex>,
    on_stack: &mut FxHashSet<NodeIndex>,
    path: &mut DfsPath,
    cycles: &mut Vec<Vec<String>>,
) {
    visited.insert(node);
    on_stack.insert(node);
    path.push(node);

    for succ in graph.successors(node) {
        if on_stack.contains(&succ) {
            // Back edge: the sub-path from succ's first occurrence to here
            // is a cycle. succ is on the stack, so the position lookup
            // always finds it.
            if let Some(start) = path.iter().position(|&n| n == succ) {
                let mut cycle: Vec<String> = path[start..]
                    .iter()
                    .map(|&n| graph.name_of(n).to_string())
                    .collect();
                cycle.push(graph.name_of(succ).to_string());
                cycles.push(cycle);
            }
        } else if !visited.contains(&succ) {
            visit(graph, succ, visited, on_stack, path, cycles);
        }
    }

    on_stack.remove(&node);
    path.pop();
}

/// Find strongly connected components with more than one member.
///
/// A self-loop leaves its component at size 1 and is filtered out here;
/// self-loops are detected by [`detect_cycles_dfs`] only. Use this as a
/// cross-check for multi-node cycles, not as a cycle count.
pub fn detect_cycles_tarjan(graph: &DomainGraph) -> Vec<Vec<String>> {
    tarjan_scc(graph.inner())
        .into_iter()
        .filter(|scc| scc.len() > 1)
        .map(|scc| {
            scc.into_iter()
                .map(|idx| graph.name_of(idx).to_string())
                .collect()
        })
        .collect()
}

/// Run both detection passes and score every DFS cycle.
pub fn analyze_circular_dependencies(graph: &DomainGraph, domains: &[Domain]) -> CycleReport {
    let cycles = detect_cycles_dfs(graph);
    let sccs = detect_cycles_tarjan(graph);
    let impacts = cycles
        .iter()
        .map(|cycle| analyze_cycle_impact(cycle, graph, domains))
        .collect();

    CycleReport {
        cycles_found: cycles.len(),
        sccs_found: sccs.len(),
        cycles,
        sccs,
        impacts,
    }
}
