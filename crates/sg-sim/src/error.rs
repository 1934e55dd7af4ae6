use sg_behavior::BehaviorError;
use sg_core::SgError;
use sg_grid::GridError;
use sg_schedule::ScheduleError;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SimError {
    #[error(transparent)]
    InvalidParameter(#[from] SgError),

    #[error("grid error: {0}")]
    Grid(#[from] GridError),

    #[error("behavior error: {0}")]
    Behavior(#[from] BehaviorError),

    #[error("schedule error: {0}")]
    Schedule(#[from] ScheduleError),

    /// `step` was called after every agent was already happy.
    #[error("model converged at step {step}; no further steps may be taken")]
    AlreadyConverged { step: u64 },

    /// A previous step failed part-way; the model state is no longer a
    /// completed step and cannot be advanced.
    #[error("model halted by an earlier step error")]
    Halted,
}

impl SimError {
    /// `true` for the saturated-grid failure (an unhappy agent with nowhere
    /// to go), however deeply it is wrapped.
    pub fn is_no_empty_cell(&self) -> bool {
        matches!(
            self,
            SimError::Grid(GridError::NoEmptyCell)
                | SimError::Behavior(BehaviorError::Grid(GridError::NoEmptyCell))
        )
    }
}

pub type SimResult<T> = Result<T, SimError>;
