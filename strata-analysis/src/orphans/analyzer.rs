//! Orphan detection: walk the tree, test every file against every domain.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use strata_core::errors::AnalysisError;
use strata_core::types::Domain;

use super::matcher::DomainMatcher;
use super::types::{AssignmentSuggestion, OrphanReport};
use super::walker::collect_source_files;

/// Finds source files that no domain pattern covers.
///
/// Holds only the project root; the domain collection is borrowed per
/// call and every run re-walks the filesystem from scratch.
pub struct OrphanAnalyzer {
    root: PathBuf,
}

impl OrphanAnalyzer {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn project_root(&self) -> &Path {
        &self.root
    }

    /// Walk the project tree and report files no domain pattern matches.
    ///
    /// A file is covered when any pattern of any domain matches it. With
    /// `include_tests` false, paths containing `test` or `spec` (any
    /// case) are not examined at all.
    pub fn detect_orphaned_files(
        &self,
        domains: &[Domain],
        include_tests: bool,
    ) -> Result<OrphanReport, AnalysisError> {
        let files = collect_source_files(&self.root, include_tests)?;
        let matchers: Vec<DomainMatcher> = domains.iter().map(DomainMatcher::new).collect();

        let mut orphaned_files = Vec::new();
        let mut coverage_map: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for file in &files {
            let covering: Vec<String> = matchers
                .iter()
                .filter(|m| m.covers(file))
                .map(|m| m.name().to_string())
                .collect();
            if covering.is_empty() {
                orphaned_files.push(file.clone());
            } else {
                coverage_map.insert(file.clone(), covering);
            }
        }

        let total_files_checked = files.len();
        let coverage_percentage = (total_files_checked - orphaned_files.len()) as f64
            / total_files_checked.max(1) as f64
            * 100.0;

        let mut by_extension: BTreeMap<String, Vec<String>> = BTreeMap::new();
        let mut by_directory: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for file in &orphaned_files {
            let path = Path::new(file);
            let extension = match path.extension().and_then(|e| e.to_str()) {
                Some(ext) => format!(".{ext}"),
                None => String::new(),
            };
            by_extension.entry(extension).or_default().push(file.clone());
            by_directory
                .entry(parent_directory(path))
                .or_default()
                .push(file.clone());
        }

        let suggestions = build_suggestions(&by_directory, domains);

        tracing::debug!(
            checked = total_files_checked,
            orphaned = orphaned_files.len(),
            coverage = format!("{coverage_percentage:.1}"),
            "orphan detection complete"
        );

        Ok(OrphanReport {
            orphaned_files,
            total_files_checked,
            coverage_percentage,
            coverage_map,
            by_extension,
            by_directory,
            suggestions,
        })
    }
}

fn parent_directory(path: &Path) -> String {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            parent.to_string_lossy().into_owned()
        }
        _ => ".".to_string(),
    }
}

/// One suggestion per orphan-holding directory. A directory whose last
/// component textually overlaps a domain name proposes extending that
/// domain; otherwise generic fallback actions are offered.
fn build_suggestions(
    by_directory: &BTreeMap<String, Vec<String>>,
    domains: &[Domain],
) -> Vec<AssignmentSuggestion> {
    by_directory
        .iter()
        .map(|(directory, orphans)| {
            let suggested_domain = suggest_domain(directory, domains);
            let actions = match &suggested_domain {
                Some(name) => vec![format!(
                    "Extend domain '{name}' with a pattern covering '{directory}'"
                )],
                None => vec![
                    format!("Create a new domain for '{directory}'"),
                    "Add the directory to an existing domain's patterns".to_string(),
                    "Relocate the files into a directory a domain already covers".to_string(),
                ],
            };
            AssignmentSuggestion {
                directory: directory.clone(),
                orphan_count: orphans.len(),
                suggested_domain,
                actions,
            }
        })
        .collect()
}

fn suggest_domain(directory: &str, domains: &[Domain]) -> Option<String> {
    let dir_key = normalize(last_component(directory));
    if dir_key.is_empty() {
        return None;
    }
    domains
        .iter()
        .find(|d| {
            let name_key = normalize(&d.name);
            !name_key.is_empty() && (name_key.contains(&dir_key) || dir_key.contains(&name_key))
        })
        .map(|d| d.name.clone())
}

fn last_component(directory: &str) -> &str {
    directory.rsplit('/').next().unwrap_or(directory)
}

/// Lowercase with `-` and `_` removed, so `user-auth` matches `user_auth`.
fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, '-' | '_'))
        .flat_map(char::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parent_directory_of_top_level_file() {
        assert_eq!(parent_directory(Path::new("app.py")), ".");
        assert_eq!(parent_directory(Path::new("src/app.py")), "src");
        assert_eq!(parent_directory(Path::new("src/billing/api.py")), "src/billing");
    }

    #[test]
    fn test_suggest_domain_overlap() {
        let domains = vec![Domain::new("billing"), Domain::new("user-auth")];
        assert_eq!(
            suggest_domain("src/billing", &domains),
            Some("billing".to_string())
        );
        assert_eq!(
            suggest_domain("src/user_auth", &domains),
            Some("user-auth".to_string())
        );
        assert_eq!(suggest_domain("src/frontend", &domains), None);
    }

    #[test]
    fn test_suggestion_actions_shape() {
        let mut by_directory = BTreeMap::new();
        by_directory.insert(
            "src/billing".to_string(),
            vec!["src/billing/api.py".to_string(), "src/billing/models.py".to_string()],
        );
        by_directory.insert("scripts".to_string(), vec!["scripts/run.py".to_string()]);

        let domains = vec![Domain::new("billing")];
        let suggestions = build_suggestions(&by_directory, &domains);
        assert_eq!(suggestions.len(), 2);

        let generic = &suggestions[0];
        assert_eq!(generic.directory, "scripts");
        assert_eq!(generic.orphan_count, 1);
        assert!(generic.suggested_domain.is_none());
        assert_eq!(generic.actions.len(), 3);

        let targeted = &suggestions[1];
        assert_eq!(targeted.suggested_domain.as_deref(), Some("billing"));
        assert_eq!(targeted.orphan_count, 2);
        assert_eq!(targeted.actions.len(), 1);
    }
}
