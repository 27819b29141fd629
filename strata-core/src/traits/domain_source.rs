//! DomainSource trait: the seam between the registry and the engine.
//!
//! The registry (JSON loader, cache layer) lives outside this workspace.
//! The engine only sees this trait, which supplies the domain collection
//! and, for orphan detection, the project root to walk.

use std::path::PathBuf;

use crate::errors::SourceError;
use crate::types::Domain;

/// Supplier of the domain collection the engine analyzes.
///
/// Implementations must be `Send + Sync`; the orchestrator shares the source
/// with its worker pool and the monitor thread.
pub trait DomainSource: Send + Sync {
    /// Return the current domain collection, in registry declaration order.
    /// Order matters: graph traversal is deterministic per returned order.
    fn domains(&self) -> Result<Vec<Domain>, SourceError>;

    /// The project root for orphan detection, if this source knows one.
    fn project_root(&self) -> Option<PathBuf> {
        None
    }
}

/// In-memory source over a fixed domain collection.
///
/// Used by tests and by callers that already hold a loaded registry.
pub struct StaticDomainSource {
    domains: Vec<Domain>,
    root: Option<PathBuf>,
}

impl StaticDomainSource {
    /// Create a source over the given domains, with no project root.
    pub fn new(domains: Vec<Domain>) -> Self {
        Self {
            domains,
            root: None,
        }
    }

    /// Attach a project root for orphan detection.
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = Some(root.into());
        self
    }
}

impl DomainSource for StaticDomainSource {
    fn domains(&self) -> Result<Vec<Domain>, SourceError> {
        Ok(self.domains.clone())
    }

    fn project_root(&self) -> Option<PathBuf> {
        self.root.clone()
    }
}
