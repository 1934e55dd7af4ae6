//! Model observer trait for progress reporting.

use crate::{RunSummary, StepReport};

/// Callbacks invoked by [`Model::run`][crate::Model::run].
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  The full per-step history is already
/// kept by the model's `MetricsCollector`; observers are for live reporting.
///
/// # Example
///
/// ```rust,ignore
/// struct Progress { every: u64 }
///
/// impl ModelObserver for Progress {
///     fn on_step_end(&mut self, r: &StepReport) {
///         if r.step % self.every == 0 {
///             println!("step {}: {}/{} happy", r.step, r.happy, r.total);
///         }
///     }
/// }
/// ```
pub trait ModelObserver {
    /// Called after every completed step.
    fn on_step_end(&mut self, _report: &StepReport) {}

    /// Called once, after the step on which every agent was happy.
    fn on_converged(&mut self, _report: &StepReport) {}

    /// Called when `run` returns successfully.
    fn on_run_end(&mut self, _summary: &RunSummary) {}
}

/// A [`ModelObserver`] that does nothing.
pub struct NoopObserver;

impl ModelObserver for NoopObserver {}
