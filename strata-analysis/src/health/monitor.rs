//! Background health monitor: periodic comprehensive analysis on a
//! dedicated thread.

use std::thread::JoinHandle;
use std::time::Duration;

use strata_core::errors::{AnalysisError, StrataErrorCode};
use strata_core::events::{HealthChangedEvent, MonitorTickFailedEvent};
use strata_core::traits::{Cancellable, CancellationToken};

use super::orchestrator::ComprehensiveAnalyzer;
use super::types::OverallHealth;

/// Sleep granularity between cancellation checks.
const CANCEL_POLL: Duration = Duration::from_millis(100);

/// Owns the polling thread that re-runs the comprehensive analysis.
///
/// Each tick runs one analysis and emits `health_changed` through the
/// analyzer's dispatcher when the classification differs from the
/// previous tick. Failed ticks emit `monitor_tick_failed` and the loop
/// keeps going. Cancellation is honored between ticks, not inside a
/// running analysis.
pub struct HealthMonitor {
    token: CancellationToken,
    handle: Option<JoinHandle<()>>,
}

impl HealthMonitor {
    /// Spawn the monitor thread, polling at the given interval.
    ///
    /// The analyzer is moved into the thread; register event handlers and
    /// attach the source before starting.
    pub fn start(
        analyzer: ComprehensiveAnalyzer,
        interval: Duration,
    ) -> Result<Self, AnalysisError> {
        let token = CancellationToken::new();
        let worker_token = token.clone();
        let handle = std::thread::Builder::new()
            .name("strata-health-monitor".to_string())
            .spawn(move || monitor_loop(analyzer, interval, worker_token))
            .map_err(|e| AnalysisError::AnalysisFailed(format!("monitor thread: {e}")))?;

        Ok(Self {
            token,
            handle: Some(handle),
        })
    }

    /// Cancellation token shared with the monitor loop.
    pub fn cancellation_token(&self) -> &CancellationToken {
        &self.token
    }

    /// Request cancellation and wait for the thread to finish its tick.
    pub fn stop(mut self) {
        self.token.cancel();
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                tracing::warn!("health monitor thread panicked");
            }
        }
    }
}

impl Drop for HealthMonitor {
    /// Best-effort cancellation without blocking on the join.
    fn drop(&mut self) {
        self.token.cancel();
    }
}

fn monitor_loop(
    mut analyzer: ComprehensiveAnalyzer,
    interval: Duration,
    token: CancellationToken,
) {
    tracing::info!(interval_secs = interval.as_secs(), "health monitor started");
    let mut previous: Option<OverallHealth> = None;

    while !token.is_cancelled() {
        match analyzer.perform_comprehensive_analysis() {
            Ok(report) => {
                let current = report.summary.overall_health;
                if let Some(prev) = previous {
                    if prev != current {
                        tracing::info!(
                            previous = prev.name(),
                            current = current.name(),
                            "overall health changed"
                        );
                        analyzer.dispatcher().emit_health_changed(&HealthChangedEvent {
                            previous: prev.name().to_string(),
                            current: current.name().to_string(),
                        });
                    }
                }
                previous = Some(current);
            }
            Err(err) => {
                tracing::warn!(error = %err, "health monitor tick failed");
                analyzer
                    .dispatcher()
                    .emit_monitor_tick_failed(&MonitorTickFailedEvent {
                        message: err.to_string(),
                        error_code: err.error_code().to_string(),
                    });
            }
        }
        sleep_cancellable(interval, &token);
    }
    tracing::info!("health monitor stopped");
}

/// Sleep for `interval`, waking early when the token is cancelled.
fn sleep_cancellable(interval: Duration, token: &CancellationToken) {
    let mut remaining = interval;
    while !token.is_cancelled() && !remaining.is_zero() {
        let chunk = remaining.min(CANCEL_POLL);
        std::thread::sleep(chunk);
        remaining = remaining.saturating_sub(chunk);
    }
}
