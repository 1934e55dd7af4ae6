//! The classic Schelling rule: stay if enough neighbors are like me.

use sg_agent::AgentStore;
use sg_core::{AgentId, SimRng};
use sg_grid::{GridError, TorusGrid};
use tracing::trace;

use crate::{BehaviorError, BehaviorModel, BehaviorResult, Outcome};

/// Happy iff at least `threshold` occupied Moore neighbors share the agent's
/// kind.
///
/// The count is absolute: there is no normalisation by the number of
/// occupied neighbors.  An isolated agent therefore has 0 similar neighbors
/// and is happy only when `threshold == 0`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Homophily {
    pub threshold: u8,
}

impl Homophily {
    pub fn new(threshold: u8) -> Self {
        Self { threshold }
    }

    /// Number of occupied neighbor cells holding an agent of `agent`'s kind.
    pub fn similar_neighbors(
        agent:  AgentId,
        agents: &AgentStore,
        grid:   &TorusGrid,
    ) -> BehaviorResult<usize> {
        let pos = grid.position_of(agent).ok_or(GridError::AgentNotPlaced(agent))?;
        let kind_of = |id| agents.kind(id).ok_or(BehaviorError::UnknownAgent(id));
        let kind = kind_of(agent)?;
        let mut similar = 0;
        for n in grid.neighbors(pos) {
            if kind_of(n)? == kind {
                similar += 1;
            }
        }
        Ok(similar)
    }
}

impl BehaviorModel for Homophily {
    fn decide_and_act(
        &self,
        agent:  AgentId,
        agents: &AgentStore,
        grid:   &mut TorusGrid,
        rng:    &mut SimRng,
    ) -> BehaviorResult<Outcome> {
        let similar = Self::similar_neighbors(agent, agents, grid)?;
        if similar >= self.threshold as usize {
            return Ok(Outcome::Happy);
        }

        let from = grid.position_of(agent).ok_or(GridError::AgentNotPlaced(agent))?;
        let to = grid.relocate_to_random_empty(agent, rng)?;
        trace!(%agent, %from, %to, similar, "relocated");
        Ok(Outcome::Relocated { from, to })
    }
}
