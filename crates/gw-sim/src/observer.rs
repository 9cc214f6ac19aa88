//! Run observer hooks for tracing and data collection.

use crate::{RunSummary, StepReport};

/// Callbacks invoked by [`Sim::run`][crate::Sim::run].
///
/// Both methods have no-op defaults, so implementors override only what
/// they care about.  Trace output is an observer concern: the loop emits
/// structured records and the caller decides whether they become console
/// text, CSV rows, or nothing.
///
/// # Example — step printer
///
/// ```rust,ignore
/// struct StepPrinter;
///
/// impl SimObserver for StepPrinter {
///     fn on_step(&mut self, report: &StepReport) {
///         println!("t={} green {} → {} passed", report.t_secs, report.action.phase, report.departed);
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called after each decision step completes.
    fn on_step(&mut self, _report: &StepReport) {}

    /// Called once, after the loop terminates.
    fn on_run_end(&mut self, _summary: &RunSummary) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run`
/// but don't want callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
