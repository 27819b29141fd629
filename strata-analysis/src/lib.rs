//! # strata-analysis
//!
//! The dependency graph analysis engine: builds the domain graph, detects
//! circular dependencies (DFS enumeration + Tarjan SCC), computes change
//! impact over the reverse graph, finds files no domain pattern covers, and
//! orchestrates the three analyses into one health report.
//!
//! All derived structures are rebuilt per analysis run; the engine borrows
//! the domain collection and never mutates it.

pub mod cycles;
pub mod graph;
pub mod health;
pub mod impact;
pub mod orphans;

pub use cycles::{
    analyze_circular_dependencies, analyze_cycle_impact, detect_cycles_dfs,
    detect_cycles_tarjan, CycleReport,
};
pub use graph::DomainGraph;
pub use health::{
    analyze_dependency_health, ComprehensiveAnalyzer, HealthMonitor, OrchestratorReport,
    OverallHealth,
};
pub use impact::{analyze_change_impact, ImpactReport};
pub use orphans::{OrphanAnalyzer, OrphanReport};
