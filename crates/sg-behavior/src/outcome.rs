//! The result of activating one agent.

use sg_grid::Position;

/// What happened when an agent acted.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The agent was satisfied with its neighborhood and stayed put.
    Happy,

    /// The agent was unsatisfied and moved from `from` to the empty cell `to`.
    Relocated { from: Position, to: Position },
}

impl Outcome {
    #[inline]
    pub fn is_happy(&self) -> bool {
        matches!(self, Outcome::Happy)
    }
}
