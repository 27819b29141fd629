//! Hash collections used throughout the workspace.
//!
//! FxHash is a non-cryptographic hasher tuned for short keys (domain names,
//! node indices), which is all the analysis engine ever hashes.

pub use rustc_hash::{FxHashMap, FxHashSet};
