//! The event handler trait.

use super::types::*;

/// Receiver for analysis lifecycle events.
///
/// Every method has a no-op default, so handlers implement only what they
/// care about. Handlers must be `Send + Sync`; the dispatcher shares them
/// across the orchestrator and the monitor thread.
pub trait StrataEventHandler: Send + Sync {
    fn on_analysis_started(&self, event: &AnalysisStartedEvent) {
        let _ = event;
    }

    fn on_analysis_completed(&self, event: &AnalysisCompletedEvent) {
        let _ = event;
    }

    fn on_health_changed(&self, event: &HealthChangedEvent) {
        let _ = event;
    }

    fn on_monitor_tick_failed(&self, event: &MonitorTickFailedEvent) {
        let _ = event;
    }
}
