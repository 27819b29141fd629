//! Configuration system for Strata.
//! TOML-based, 4-layer resolution: CLI > env > project > user > defaults.

pub mod analysis_config;
pub mod monitor_config;
pub mod strata_config;

pub use analysis_config::AnalysisConfig;
pub use monitor_config::MonitorConfig;
pub use strata_config::{CliOverrides, StrataConfig};
