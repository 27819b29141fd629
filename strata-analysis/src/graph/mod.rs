//! The domain dependency graph: petgraph-backed, rebuilt per analysis run.

pub mod builder;
pub mod types;

pub use types::{DanglingReference, DomainGraph};
