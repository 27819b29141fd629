//! Change impact analysis: who depends on a domain, and how risky a
//! change to it would be.

pub mod analyzer;
pub mod types;

pub use analyzer::analyze_change_impact;
pub use types::{ChangeType, ImpactReport, ImpactSeverity, RiskAssessment, RiskLevel};
