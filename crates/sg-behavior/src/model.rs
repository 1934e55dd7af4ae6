//! The `BehaviorModel` trait: the extension point for decision rules.

use sg_agent::AgentStore;
use sg_core::{AgentId, SimRng};
use sg_grid::TorusGrid;

use crate::{BehaviorResult, Outcome};

/// Pluggable agent decision rule.
///
/// Called once per agent per step by the scheduler, in the step's random
/// activation order.  The implementation reads whatever it needs from
/// `agents` and `grid`, and may move `agent` (and only `agent`) on `grid`.
///
/// # Example
///
/// ```rust,ignore
/// struct AlwaysMove;
///
/// impl BehaviorModel for AlwaysMove {
///     fn decide_and_act(&self, agent: AgentId, _: &AgentStore, grid: &mut TorusGrid, rng: &mut SimRng)
///         -> BehaviorResult<Outcome>
///     {
///         let from = grid.position_of(agent).ok_or(GridError::AgentNotPlaced(agent))?;
///         let to = grid.relocate_to_random_empty(agent, rng)?;
///         Ok(Outcome::Relocated { from, to })
///     }
/// }
/// ```
pub trait BehaviorModel {
    /// Decide whether `agent` is content and, if not, act on it.
    ///
    /// Errors from the grid (most importantly `NoEmptyCell`) must be
    /// propagated, not swallowed: skipping an unhappy agent would make the
    /// step's happy count wrong.
    fn decide_and_act(
        &self,
        agent:  AgentId,
        agents: &AgentStore,
        grid:   &mut TorusGrid,
        rng:    &mut SimRng,
    ) -> BehaviorResult<Outcome>;
}
