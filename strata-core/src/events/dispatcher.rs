//! EventDispatcher: synchronous event dispatch with zero overhead when empty.

use std::sync::Arc;

use super::handler::StrataEventHandler;
use super::types::*;

/// Synchronous event dispatcher wrapping a list of handlers.
///
/// When no handlers are registered, `emit` iterates over an empty Vec,
/// effectively zero cost. Handlers that panic are caught so one misbehaving
/// subscriber cannot starve the rest.
#[derive(Default)]
pub struct EventDispatcher {
    handlers: Vec<Arc<dyn StrataEventHandler>>,
}

impl EventDispatcher {
    /// Create a new empty dispatcher.
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    /// Register an event handler.
    pub fn register(&mut self, handler: Arc<dyn StrataEventHandler>) {
        self.handlers.push(handler);
    }

    /// Returns the number of registered handlers.
    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    /// Emit an event to all registered handlers.
    /// Handlers that panic are caught and do not prevent subsequent handlers
    /// from receiving the event.
    fn emit<F: Fn(&dyn StrataEventHandler)>(&self, f: F) {
        for handler in &self.handlers {
            let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                f(handler.as_ref());
            }));
            if result.is_err() {
                tracing::warn!("event handler panicked; continuing with remaining handlers");
            }
        }
    }

    pub fn emit_analysis_started(&self, event: &AnalysisStartedEvent) {
        self.emit(|h| h.on_analysis_started(event));
    }

    pub fn emit_analysis_completed(&self, event: &AnalysisCompletedEvent) {
        self.emit(|h| h.on_analysis_completed(event));
    }

    pub fn emit_health_changed(&self, event: &HealthChangedEvent) {
        self.emit(|h| h.on_health_changed(event));
    }

    pub fn emit_monitor_tick_failed(&self, event: &MonitorTickFailedEvent) {
        self.emit(|h| h.on_monitor_tick_failed(event));
    }
}
