//! Event payload types for the analysis lifecycle.
//!
//! Health values travel as plain strings (`healthy` / `warning` / `critical`)
//! so this crate stays independent of the analysis report types.

/// Payload for `on_analysis_started`.
#[derive(Debug, Clone)]
pub struct AnalysisStartedEvent {
    /// `sequential` or `parallel`.
    pub mode: String,
    pub domain_count: usize,
}

/// Payload for `on_analysis_completed`.
#[derive(Debug, Clone)]
pub struct AnalysisCompletedEvent {
    pub overall_health: String,
    pub cycles_found: usize,
    pub orphaned_files: usize,
    pub failed_analyses: usize,
    pub duration_ms: u64,
}

/// Payload for `on_health_changed`.
#[derive(Debug, Clone)]
pub struct HealthChangedEvent {
    pub previous: String,
    pub current: String,
}

/// Payload for `on_monitor_tick_failed`.
#[derive(Debug, Clone)]
pub struct MonitorTickFailedEvent {
    pub message: String,
    pub error_code: String,
}
