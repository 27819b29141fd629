//! Top-level Strata configuration with 4-layer resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{AnalysisConfig, MonitorConfig};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`STRATA_*`)
/// 3. Project config (`strata.toml` in project root)
/// 4. User config (`~/.strata/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct StrataConfig {
    pub analysis: AnalysisConfig,
    pub monitor: MonitorConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub parallel_analysis: Option<bool>,
    pub analysis_workers: Option<usize>,
    pub coupling_threshold: Option<usize>,
    pub include_tests: Option<bool>,
    pub poll_interval_secs: Option<u64>,
}

impl StrataConfig {
    /// Load configuration with 4-layer resolution.
    ///
    /// Resolution order (highest priority first):
    /// 1. CLI flags
    /// 2. Environment variables (`STRATA_*`)
    /// 3. Project config (`strata.toml` in `root`)
    /// 4. User config (`~/.strata/config.toml`)
    /// 5. Compiled defaults
    pub fn load(
        root: &Path,
        cli_overrides: Option<&CliOverrides>,
    ) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 4 (lowest priority): user config
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(ConfigError::ParseError { .. }) => {
                        return Err(ConfigError::ParseError {
                            path: user_config_path.display().to_string(),
                            message: "invalid TOML in user config".to_string(),
                        });
                    }
                    Err(_) => {
                        // Non-parse errors from user config are warnings, not fatal.
                        // Continue with defaults.
                    }
                }
            }
        }

        // Layer 3: project config
        let project_config_path = root.join("strata.toml");
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config);

        // Layer 1 (highest priority): CLI flags
        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        // Validate the final config
        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &StrataConfig) -> Result<(), ConfigError> {
        if let Some(workers) = config.analysis.dependency_analysis_workers {
            if workers == 0 {
                return Err(ConfigError::ValidationFailed {
                    field: "analysis.dependency_analysis_workers".to_string(),
                    message: "must be at least 1".to_string(),
                });
            }
        }
        if let Some(threshold) = config.analysis.coupling_threshold {
            if threshold == 0 {
                return Err(ConfigError::ValidationFailed {
                    field: "analysis.coupling_threshold".to_string(),
                    message: "must be at least 1".to_string(),
                });
            }
        }
        if let Some(interval) = config.monitor.poll_interval_secs {
            if interval == 0 {
                return Err(ConfigError::ValidationFailed {
                    field: "monitor.poll_interval_secs".to_string(),
                    message: "must be at least 1 second".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Returns the user config path: `~/.strata/config.toml`.
    fn user_config_path() -> Option<std::path::PathBuf> {
        dirs_path().map(|d| d.join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut StrataConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| {
            ConfigError::FileNotFound {
                path: path.display().to_string(),
            }
        })?;

        let file_config: StrataConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`, where `other` values override `base` values
    /// only when `other` has a `Some` value.
    fn merge(base: &mut StrataConfig, other: &StrataConfig) {
        // Analysis
        if other.analysis.parallel_dependency_analysis.is_some() {
            base.analysis.parallel_dependency_analysis =
                other.analysis.parallel_dependency_analysis;
        }
        if other.analysis.dependency_analysis_workers.is_some() {
            base.analysis.dependency_analysis_workers =
                other.analysis.dependency_analysis_workers;
        }
        if other.analysis.coupling_threshold.is_some() {
            base.analysis.coupling_threshold = other.analysis.coupling_threshold;
        }
        if other.analysis.include_tests.is_some() {
            base.analysis.include_tests = other.analysis.include_tests;
        }

        // Monitor
        if other.monitor.enabled.is_some() {
            base.monitor.enabled = other.monitor.enabled;
        }
        if other.monitor.poll_interval_secs.is_some() {
            base.monitor.poll_interval_secs = other.monitor.poll_interval_secs;
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `STRATA_ANALYSIS_WORKERS`, `STRATA_POLL_INTERVAL_SECS`, etc.
    fn apply_env_overrides(config: &mut StrataConfig) {
        if let Ok(val) = std::env::var("STRATA_PARALLEL_ANALYSIS") {
            if let Ok(v) = val.parse::<bool>() {
                config.analysis.parallel_dependency_analysis = Some(v);
            }
        }
        if let Ok(val) = std::env::var("STRATA_ANALYSIS_WORKERS") {
            if let Ok(v) = val.parse::<usize>() {
                config.analysis.dependency_analysis_workers = Some(v);
            }
        }
        if let Ok(val) = std::env::var("STRATA_COUPLING_THRESHOLD") {
            if let Ok(v) = val.parse::<usize>() {
                config.analysis.coupling_threshold = Some(v);
            }
        }
        if let Ok(val) = std::env::var("STRATA_INCLUDE_TESTS") {
            if let Ok(v) = val.parse::<bool>() {
                config.analysis.include_tests = Some(v);
            }
        }
        if let Ok(val) = std::env::var("STRATA_MONITOR_ENABLED") {
            if let Ok(v) = val.parse::<bool>() {
                config.monitor.enabled = Some(v);
            }
        }
        if let Ok(val) = std::env::var("STRATA_POLL_INTERVAL_SECS") {
            if let Ok(v) = val.parse::<u64>() {
                config.monitor.poll_interval_secs = Some(v);
            }
        }
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut StrataConfig, cli: &CliOverrides) {
        if let Some(v) = cli.parallel_analysis {
            config.analysis.parallel_dependency_analysis = Some(v);
        }
        if let Some(v) = cli.analysis_workers {
            config.analysis.dependency_analysis_workers = Some(v);
        }
        if let Some(v) = cli.coupling_threshold {
            config.analysis.coupling_threshold = Some(v);
        }
        if let Some(v) = cli.include_tests {
            config.analysis.include_tests = Some(v);
        }
        if let Some(v) = cli.poll_interval_secs {
            config.monitor.poll_interval_secs = Some(v);
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

/// Returns the user-level strata config directory: `~/.strata/`.
fn dirs_path() -> Option<std::path::PathBuf> {
    home_dir().map(|h| h.join(".strata"))
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<std::path::PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(std::path::PathBuf::from)
}
