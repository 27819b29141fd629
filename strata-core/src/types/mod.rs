//! Shared types for the Strata workspace.

pub mod collections;
pub mod domain;

pub use domain::Domain;
