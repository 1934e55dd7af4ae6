//! Grid error type.

use thiserror::Error;

use sg_core::AgentId;

use crate::Position;

/// Errors produced by `sg-grid`.
///
/// `OccupiedCell`, `AlreadyPlaced` and `AgentNotPlaced` indicate a bug in
/// the caller; `NoEmptyCell` is the only one a correctly written model can hit
/// (a saturated grid with an unhappy agent).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("cell {0} is already occupied")]
    OccupiedCell(Position),

    #[error("no empty cell available for relocation")]
    NoEmptyCell,

    #[error("position {pos} lies outside a {width}x{height} grid")]
    OutOfBounds { pos: Position, width: u32, height: u32 },

    #[error("{0} has not been placed on the grid")]
    AgentNotPlaced(AgentId),

    #[error("{agent} is already placed at {at}")]
    AlreadyPlaced { agent: AgentId, at: Position },
}

pub type GridResult<T> = Result<T, GridError>;
