//! # strata-core
//!
//! Foundation crate for the Strata domain-analysis engine.
//! Defines the domain model, traits, errors, config, events, and tracing setup.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod errors;
pub mod events;
pub mod logging;
pub mod traits;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use config::StrataConfig;
pub use errors::{AnalysisError, ConfigError, SourceError, StrataErrorCode};
pub use traits::{Cancellable, CancellationToken, DomainSource};
pub use types::Domain;
