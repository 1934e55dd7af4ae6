//! `RandomActivation`: every agent once per step, in a fresh random order.

use std::collections::BTreeSet;

use sg_core::{AgentId, SimRng};

use crate::{ScheduleError, ScheduleResult};

/// Activates all registered agents exactly once per step.
///
/// The registry is a `BTreeSet`, so the pre-shuffle order is always ascending
/// `AgentId` and a fixed seed yields a fixed sequence of permutations.
#[derive(Clone, Debug, Default)]
pub struct RandomActivation {
    agents: BTreeSet<AgentId>,
    /// Completed steps.
    steps:  u64,
}

impl RandomActivation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `agent` for activation from the next step on.
    pub fn add(&mut self, agent: AgentId) -> ScheduleResult<()> {
        if self.agents.insert(agent) {
            Ok(())
        } else {
            Err(ScheduleError::DuplicateAgent(agent))
        }
    }

    /// Number of registered agents.
    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    pub fn contains(&self, agent: AgentId) -> bool {
        self.agents.contains(&agent)
    }

    /// Registered agents in ascending id order.
    pub fn agent_ids(&self) -> impl Iterator<Item = AgentId> + '_ {
        self.agents.iter().copied()
    }

    /// Number of steps that ran to completion.
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Draw a uniformly random permutation of the registered agents.
    pub fn shuffled(&self, rng: &mut SimRng) -> Vec<AgentId> {
        let mut order: Vec<AgentId> = self.agents.iter().copied().collect();
        rng.shuffle(&mut order);
        order
    }

    /// Run one step: shuffle, then call `activate(agent, rng)` for each agent
    /// in that order.
    ///
    /// `rng` is handed back to the callback so the permutation and every draw
    /// made during activation come from the same stream.  The first error
    /// stops the step and is returned; the step counter only advances when
    /// every agent was activated.
    pub fn step<E, F>(&mut self, rng: &mut SimRng, mut activate: F) -> Result<(), E>
    where
        F: FnMut(AgentId, &mut SimRng) -> Result<(), E>,
    {
        let order = self.shuffled(rng);
        for agent in order {
            activate(agent, rng)?;
        }
        self.steps += 1;
        Ok(())
    }
}
