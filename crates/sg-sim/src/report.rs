//! Values returned from stepping and running a model.

/// Outcome of one completed [`Model::step`][crate::Model::step].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepReport {
    /// 1-based index of the step just completed.
    pub step:      u64,
    pub happy:     usize,
    pub relocated: usize,
    /// Agent count (constant over the run).
    pub total:     usize,
    /// `happy == total`; the model stopped running after this step.
    pub converged: bool,
}

/// Outcome of [`Model::run`][crate::Model::run].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Steps executed by this call.
    pub steps_run: u64,
    /// `true` if the model is no longer running when the call returns.
    pub converged: bool,
    /// The last step's report, if any step ran.
    pub last:      Option<StepReport>,
}
