//! Comprehensive analysis orchestration: three analyses, one report.

use std::panic::{catch_unwind, AssertUnwindSafe};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use strata_core::config::StrataConfig;
use strata_core::errors::AnalysisError;
use strata_core::events::{
    AnalysisCompletedEvent, AnalysisStartedEvent, EventDispatcher, StrataEventHandler,
};
use strata_core::traits::DomainSource;
use strata_core::types::Domain;

use crate::cycles::{analyze_circular_dependencies, CycleReport};
use crate::graph::DomainGraph;
use crate::orphans::{OrphanAnalyzer, OrphanReport};

use super::dependency::{analyze_dependency_health, DependencyHealthReport};
use super::summary::{build_recommendations, build_summary};
use super::types::{AnalysisOutcome, AnalysisTimings, OrchestratorReport, PerformanceStats};

/// Runs the three analyses and aggregates them into one report.
///
/// Every call rebuilds the graph from the source and runs fresh; the only
/// state surviving between calls is the performance counters. A slot that
/// fails or panics degrades into `{"error": ...}` under its key without
/// aborting the other slots.
pub struct ComprehensiveAnalyzer {
    source: Option<Arc<dyn DomainSource>>,
    config: StrataConfig,
    dispatcher: EventDispatcher,
    stats: PerformanceStats,
}

impl ComprehensiveAnalyzer {
    pub fn new(config: StrataConfig) -> Self {
        Self {
            source: None,
            config,
            dispatcher: EventDispatcher::new(),
            stats: PerformanceStats::default(),
        }
    }

    /// Attach the domain source. Without one, analysis fails fast.
    pub fn with_source(mut self, source: Arc<dyn DomainSource>) -> Self {
        self.source = Some(source);
        self
    }

    /// Register a lifecycle event handler.
    pub fn register_handler(&mut self, handler: Arc<dyn StrataEventHandler>) {
        self.dispatcher.register(handler);
    }

    pub fn dispatcher(&self) -> &EventDispatcher {
        &self.dispatcher
    }

    pub fn config(&self) -> &StrataConfig {
        &self.config
    }

    /// Counters accumulated across runs of this instance.
    pub fn performance_stats(&self) -> PerformanceStats {
        self.stats
    }

    /// Run circular-dependency, orphaned-file and dependency-health
    /// analysis and aggregate the outcomes.
    ///
    /// Fails fast only when no source is attached or the source returns
    /// no domains; per-slot failures degrade that slot and the run
    /// continues. Sequential and parallel mode produce the same report
    /// shape.
    pub fn perform_comprehensive_analysis(&mut self) -> Result<OrchestratorReport, AnalysisError> {
        let started = Instant::now();
        let source = self.source.as_ref().ok_or_else(|| {
            AnalysisError::SourceUnavailable("registry manager not set".to_string())
        })?;
        let domains = source.domains()?;
        if domains.is_empty() {
            return Err(AnalysisError::SourceUnavailable("no domains found".to_string()));
        }

        let parallel = self.config.analysis.effective_parallel();
        let mode = if parallel { "parallel" } else { "sequential" };
        self.dispatcher.emit_analysis_started(&AnalysisStartedEvent {
            mode: mode.to_string(),
            domain_count: domains.len(),
        });
        tracing::info!(mode = mode, domains = domains.len(), "comprehensive analysis started");

        let graph = DomainGraph::build(&domains);
        let ctx = RunContext {
            graph: &graph,
            domains: &domains,
            root: source.project_root(),
            include_tests: self.config.analysis.effective_include_tests(),
            coupling_threshold: self.config.analysis.effective_coupling_threshold(),
        };

        let ((circular, c_ms), (orphans, o_ms), (dependency, d_ms)) = if parallel {
            run_parallel(&ctx, self.config.analysis.effective_workers())
        } else {
            run_sequential(&ctx)
        };

        let summary = build_summary(domains.len(), &circular, &orphans, &dependency);
        let recommendations = build_recommendations(&circular, &orphans, &dependency);
        let total_ms = started.elapsed().as_millis() as u64;
        let timings = AnalysisTimings {
            circular_dependencies_ms: c_ms,
            orphaned_files_ms: o_ms,
            dependency_health_ms: d_ms,
            total_ms,
        };

        self.stats.runs += 1;
        if !summary.failed_analyses.is_empty() {
            self.stats.degraded_runs += 1;
        }
        self.stats.total_elapsed_ms += total_ms;
        self.stats.last_elapsed_ms = total_ms;

        self.dispatcher.emit_analysis_completed(&AnalysisCompletedEvent {
            overall_health: summary.overall_health.name().to_string(),
            cycles_found: summary.cycles_found,
            orphaned_files: summary.orphaned_files,
            failed_analyses: summary.failed_analyses.len(),
            duration_ms: total_ms,
        });
        tracing::info!(
            health = summary.overall_health.name(),
            cycles = summary.cycles_found,
            orphaned = summary.orphaned_files,
            elapsed_ms = total_ms,
            "comprehensive analysis complete"
        );

        Ok(OrchestratorReport {
            circular_dependencies: circular,
            orphaned_files: orphans,
            dependency_health: dependency,
            summary,
            recommendations,
            timings,
        })
    }
}

impl Default for ComprehensiveAnalyzer {
    fn default() -> Self {
        Self::new(StrataConfig::default())
    }
}

/// Read-only inputs shared by the three slots.
struct RunContext<'a> {
    graph: &'a DomainGraph,
    domains: &'a [Domain],
    root: Option<PathBuf>,
    include_tests: bool,
    coupling_threshold: usize,
}

type TimedOutcome<T> = (AnalysisOutcome<T>, u64);

type SlotOutcomes = (
    TimedOutcome<CycleReport>,
    TimedOutcome<OrphanReport>,
    TimedOutcome<DependencyHealthReport>,
);

/// Tagged slot result for the parallel collection channel.
enum SlotResult {
    Cycles(TimedOutcome<CycleReport>),
    Orphans(TimedOutcome<OrphanReport>),
    Dependency(TimedOutcome<DependencyHealthReport>),
}

/// Run one slot, converting errors and panics into a failed outcome.
fn run_guarded<T>(
    label: &str,
    f: impl FnOnce() -> Result<T, AnalysisError>,
) -> TimedOutcome<T> {
    let start = Instant::now();
    let outcome = match catch_unwind(AssertUnwindSafe(move || f())) {
        Ok(Ok(report)) => AnalysisOutcome::Report(report),
        Ok(Err(err)) => {
            tracing::warn!(analysis = label, error = %err, "analysis failed");
            AnalysisOutcome::Failed {
                error: err.to_string(),
            }
        }
        Err(_) => {
            tracing::warn!(analysis = label, "analysis panicked");
            AnalysisOutcome::Failed {
                error: format!("{label} analysis panicked"),
            }
        }
    };
    (outcome, start.elapsed().as_millis() as u64)
}

fn run_cycles(ctx: &RunContext<'_>) -> TimedOutcome<CycleReport> {
    run_guarded("circular_dependencies", || {
        Ok(analyze_circular_dependencies(ctx.graph, ctx.domains))
    })
}

fn run_orphans(ctx: &RunContext<'_>) -> TimedOutcome<OrphanReport> {
    run_guarded("orphaned_files", || {
        let root = ctx.root.clone().ok_or_else(|| {
            AnalysisError::AnalysisFailed("project root not configured".to_string())
        })?;
        OrphanAnalyzer::new(root).detect_orphaned_files(ctx.domains, ctx.include_tests)
    })
}

fn run_dependency(ctx: &RunContext<'_>) -> TimedOutcome<DependencyHealthReport> {
    run_guarded("dependency_health", || {
        Ok(analyze_dependency_health(
            ctx.graph,
            ctx.domains,
            ctx.coupling_threshold,
        ))
    })
}

/// Fixed order: circular dependencies, orphaned files, dependency health.
fn run_sequential(ctx: &RunContext<'_>) -> SlotOutcomes {
    (run_cycles(ctx), run_orphans(ctx), run_dependency(ctx))
}

/// Fan the three slots out to a fixed-size pool and collect as they
/// complete. Falls back to sequential if the pool cannot be built.
fn run_parallel(ctx: &RunContext<'_>, workers: usize) -> SlotOutcomes {
    let pool = match rayon::ThreadPoolBuilder::new().num_threads(workers).build() {
        Ok(pool) => pool,
        Err(err) => {
            tracing::warn!(error = %err, "worker pool unavailable, falling back to sequential");
            return run_sequential(ctx);
        }
    };

    let (tx, rx) = crossbeam_channel::unbounded();
    pool.scope(|scope| {
        let cycles_tx = tx.clone();
        scope.spawn(move |_| {
            let _ = cycles_tx.send(SlotResult::Cycles(run_cycles(ctx)));
        });
        let orphans_tx = tx.clone();
        scope.spawn(move |_| {
            let _ = orphans_tx.send(SlotResult::Orphans(run_orphans(ctx)));
        });
        let dependency_tx = tx.clone();
        scope.spawn(move |_| {
            let _ = dependency_tx.send(SlotResult::Dependency(run_dependency(ctx)));
        });
    });
    drop(tx);

    let mut circular = None;
    let mut orphans = None;
    let mut dependency = None;
    for slot in rx {
        match slot {
            SlotResult::Cycles(timed) => circular = Some(timed),
            SlotResult::Orphans(timed) => orphans = Some(timed),
            SlotResult::Dependency(timed) => dependency = Some(timed),
        }
    }

    (
        circular.unwrap_or_else(missing_slot),
        orphans.unwrap_or_else(missing_slot),
        dependency.unwrap_or_else(missing_slot),
    )
}

/// A worker that never reported back still gets an error marker, so the
/// report shape stays intact.
fn missing_slot<T>() -> TimedOutcome<T> {
    (
        AnalysisOutcome::Failed {
            error: "analysis worker produced no result".to_string(),
        },
        0,
    )
}
