use sg_core::AgentId;
use sg_grid::GridError;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BehaviorError {
    #[error("grid error: {0}")]
    Grid(#[from] GridError),

    #[error("agent {0} is on the grid but not in the agent store")]
    UnknownAgent(AgentId),
}

pub type BehaviorResult<T> = Result<T, BehaviorError>;
