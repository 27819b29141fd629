//! Circular dependency detection and cycle impact analysis.

pub mod detector;
pub mod impact;
pub mod types;

pub use detector::{analyze_circular_dependencies, detect_cycles_dfs, detect_cycles_tarjan};
pub use impact::analyze_cycle_impact;
pub use types::{BreakingSuggestion, CycleImpact, CycleReport};
