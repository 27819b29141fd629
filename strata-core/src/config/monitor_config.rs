//! Background health-monitor configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the background health monitor.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct MonitorConfig {
    /// Enable the background polling monitor. Default: false.
    pub enabled: Option<bool>,
    /// Seconds between comprehensive analysis runs. Default: 300.
    pub poll_interval_secs: Option<u64>,
}

impl MonitorConfig {
    /// Returns whether the monitor is enabled, defaulting to false.
    pub fn effective_enabled(&self) -> bool {
        self.enabled.unwrap_or(false)
    }

    /// Returns the effective poll interval in seconds, defaulting to 300.
    pub fn effective_poll_interval_secs(&self) -> u64 {
        self.poll_interval_secs.unwrap_or(300)
    }
}
