//! Traits shared across the workspace.

pub mod cancellation;
pub mod domain_source;

pub use cancellation::{Cancellable, CancellationToken};
pub use domain_source::{DomainSource, StaticDomainSource};
