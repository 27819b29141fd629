//! Filesystem walk for orphan detection.

use std::path::Path;

use aho_corasick::{AhoCorasick, AhoCorasickBuilder};
use ignore::WalkBuilder;
use strata_core::errors::AnalysisError;

/// Source file extensions considered for domain coverage.
pub const SOURCE_EXTENSIONS: &[&str] = &["py", "js", "ts", "java", "cpp", "c", "h", "hpp"];

/// Path fragments excluded from the walk. A relative path containing any
/// of these as a substring is skipped, directories and files alike.
pub const EXCLUDED_DIRS: &[&str] = &[
    "__pycache__",
    ".git",
    "node_modules",
    ".venv",
    "venv",
    ".pytest_cache",
    ".mypy_cache",
    "build",
    "dist",
];

/// Substrings marking test files, matched case-insensitively when tests
/// are excluded from the walk.
pub const TEST_MARKERS: &[&str] = &["test", "spec"];

/// Collect candidate source files under `root` as sorted relative paths.
///
/// Gitignore semantics are fully disabled; exclusion is exactly the
/// substring rules above. Unreadable entries are skipped, not errors.
pub fn collect_source_files(root: &Path, include_tests: bool) -> Result<Vec<String>, AnalysisError> {
    let excluded = AhoCorasick::new(EXCLUDED_DIRS)
        .map_err(|e| AnalysisError::AnalysisFailed(format!("exclusion matcher: {e}")))?;
    let test_markers = AhoCorasickBuilder::new()
        .ascii_case_insensitive(true)
        .build(TEST_MARKERS)
        .map_err(|e| AnalysisError::AnalysisFailed(format!("test marker matcher: {e}")))?;

    // Pruning happens during descent: once a directory's relative path
    // matches, nothing under it is visited.
    let walk_root = root.to_path_buf();
    let walker = WalkBuilder::new(root)
        .hidden(false)
        .git_ignore(false)
        .git_global(false)
        .git_exclude(false)
        .ignore(false)
        .parents(false)
        .filter_entry(move |entry| {
            let rel = entry.path().strip_prefix(&walk_root).unwrap_or(entry.path());
            !excluded.is_match(rel.to_string_lossy().as_ref())
        })
        .build();

    let mut files = Vec::new();
    for entry in walker.flatten() {
        if !entry.file_type().is_some_and(|t| t.is_file()) {
            continue;
        }
        let path = entry.path();
        if !has_source_extension(path) {
            continue;
        }
        let rel = path.strip_prefix(root).unwrap_or(path).to_string_lossy();
        if !include_tests && test_markers.is_match(rel.as_ref()) {
            continue;
        }
        files.push(rel.into_owned());
    }
    files.sort_unstable();
    Ok(files)
}

fn has_source_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| SOURCE_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
}
