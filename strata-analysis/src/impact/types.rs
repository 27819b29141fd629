//! Impact analysis types: affected sets, severity tiers, risk assessment.

use serde::Serialize;

/// How a domain is about to change.
///
/// Only `modify` and `delete` drive the transitive traversal. Any other
/// label is accepted and echoed back in the report, but yields an empty
/// transitive set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeType {
    Modify,
    Delete,
    /// Unrecognized label, reported as-is but never traversed.
    Other,
}

impl ChangeType {
    /// Case-insensitive parse. Unknown labels map to `Other`.
    pub fn parse(raw: &str) -> Self {
        match raw.to_ascii_lowercase().as_str() {
            "modify" => Self::Modify,
            "delete" => Self::Delete,
            _ => Self::Other,
        }
    }

    /// Whether this change type drives the transitive traversal.
    pub fn traverses(&self) -> bool {
        matches!(self, Self::Modify | Self::Delete)
    }
}

/// Severity tier derived from affected count and coupling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ImpactSeverity {
    Low,
    Medium,
    High,
}

impl ImpactSeverity {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

/// Risk tier mapped from the additive risk score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    /// Map a clamped risk score onto a tier.
    pub fn from_score(score: f64) -> Self {
        if score < 0.4 {
            Self::Low
        } else if score < 0.7 {
            Self::Medium
        } else {
            Self::High
        }
    }
}

/// Additive risk assessment for one change.
#[derive(Debug, Clone, Serialize)]
pub struct RiskAssessment {
    /// Tier mapped from `score`.
    pub level: RiskLevel,
    /// Additive score in 0.0-1.0.
    pub score: f64,
    /// Contributing factors, one line each.
    pub factors: Vec<String>,
    /// Mitigations for the factors present.
    pub mitigations: Vec<String>,
}

/// Full impact report for a `(target, change_type)` query.
#[derive(Debug, Clone, Serialize)]
pub struct ImpactReport {
    /// Domain the change targets.
    pub target: String,
    /// Change label exactly as supplied by the caller.
    pub change_type: String,
    /// Immediate dependents, sorted. Populated regardless of change type.
    pub directly_affected: Vec<String>,
    /// Every dependent reachable in the reverse graph, excluding the
    /// target itself, sorted. Empty for unrecognized change types.
    pub transitively_affected: Vec<String>,
    /// Files in the target plus all transitively affected domains.
    pub total_files_affected: usize,
    /// Lines in the target plus all transitively affected domains.
    pub total_lines_affected: usize,
    /// Longest simple chain of dependents above the target, in edges.
    /// The name is historical: this measures how many layers of consumers
    /// sit above the domain, not how deep its own dependencies go.
    pub max_dependency_depth: usize,
    /// Direct dependent count over total domain count.
    pub coupling_score: f64,
    /// Severity tier from affected count and coupling.
    pub severity: ImpactSeverity,
    /// Additive risk assessment.
    pub risk: RiskAssessment,
    /// Rule-based guidance keyed off the change type and risk factors.
    pub recommendations: Vec<String>,
}
