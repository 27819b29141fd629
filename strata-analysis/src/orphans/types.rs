//! Orphan detection report types.

use std::collections::BTreeMap;

use serde::Serialize;

/// Assignment proposal for one directory containing orphaned files.
#[derive(Debug, Clone, Serialize)]
pub struct AssignmentSuggestion {
    /// Directory holding the orphans, relative to the project root.
    /// `.` for the root itself.
    pub directory: String,
    /// Orphaned files in this directory.
    pub orphan_count: usize,
    /// Existing domain whose name overlaps the directory name, if any.
    pub suggested_domain: Option<String>,
    /// Proposed actions, most specific first.
    pub actions: Vec<String>,
}

/// Result of one orphan detection run.
///
/// Maps use `BTreeMap` so serialized reports are stable across runs.
#[derive(Debug, Clone, Serialize)]
pub struct OrphanReport {
    /// Relative paths matched by no domain pattern, sorted.
    pub orphaned_files: Vec<String>,
    /// Candidate files examined.
    pub total_files_checked: usize,
    /// `(checked - orphaned) / max(checked, 1) * 100`.
    pub coverage_percentage: f64,
    /// Covering domain names per non-orphaned file.
    pub coverage_map: BTreeMap<String, Vec<String>>,
    /// Orphaned files grouped by extension (`.py`, `.ts`, ...).
    pub by_extension: BTreeMap<String, Vec<String>>,
    /// Orphaned files grouped by parent directory.
    pub by_directory: BTreeMap<String, Vec<String>>,
    /// One assignment proposal per orphan-holding directory.
    pub suggestions: Vec<AssignmentSuggestion>,
}
