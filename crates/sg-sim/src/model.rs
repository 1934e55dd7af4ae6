//! The `Model` struct and its step loop.

use sg_agent::{Agent, AgentStore};
use sg_behavior::{BehaviorError, BehaviorModel, Homophily, Outcome};
use sg_core::{AgentId, ModelParams, SimRng};
use sg_grid::TorusGrid;
use sg_metrics::MetricsCollector;
use sg_schedule::RandomActivation;
use tracing::{debug, info, warn};

use crate::{ModelObserver, RunSummary, SimError, SimResult, StepReport};

/// A Schelling segregation run.
///
/// Lifecycle: built (and initialized) by [`ModelBuilder`][crate::ModelBuilder]
/// with `running() == true`; each [`step`][Self::step] activates every agent
/// once; `running()` turns false exactly after the first step on which every
/// agent was happy, and never turns back.
///
/// The model is the sole owner of the grid and the random source.  Agents
/// reach the grid only through the `&mut` handed to the behavior for the
/// duration of their own activation.
pub struct Model<B: BehaviorModel = Homophily> {
    params:    ModelParams,
    rng:       SimRng,
    grid:      TorusGrid,
    agents:    AgentStore,
    schedule:  RandomActivation,
    behavior:  B,
    metrics:   MetricsCollector,
    /// Happy agents in the most recent step; recomputed from zero each step.
    happy:     usize,
    relocated: usize,
    running:   bool,
    halted:    bool,
}

impl<B: BehaviorModel> Model<B> {
    pub(crate) fn from_parts(
        params:   ModelParams,
        rng:      SimRng,
        grid:     TorusGrid,
        agents:   AgentStore,
        schedule: RandomActivation,
        behavior: B,
        metrics:  MetricsCollector,
    ) -> Self {
        Self {
            params,
            rng,
            grid,
            agents,
            schedule,
            behavior,
            metrics,
            happy: 0,
            relocated: 0,
            running: true,
            halted: false,
        }
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Advance the model by one step.
    ///
    /// # Errors
    /// - [`SimError::AlreadyConverged`] if the model already stopped running.
    /// - [`SimError::Halted`] if an earlier step failed.
    /// - [`SimError::Behavior`] if an agent could not act, most notably a
    ///   saturated grid (`NoEmptyCell`).  The step is abandoned without a
    ///   snapshot and the model is halted.
    pub fn step(&mut self) -> SimResult<StepReport> {
        if self.halted {
            return Err(SimError::Halted);
        }
        if !self.running {
            return Err(SimError::AlreadyConverged { step: self.schedule.steps() });
        }

        let mut happy = 0;
        let mut relocated = 0;
        let Self { rng, grid, agents, schedule, behavior, .. } = self;
        let (agents, behavior) = (&*agents, &*behavior);

        let result = schedule.step(rng, |agent, rng| {
            match behavior.decide_and_act(agent, agents, grid, rng)? {
                Outcome::Happy => happy += 1,
                Outcome::Relocated { .. } => relocated += 1,
            }
            Ok::<(), BehaviorError>(())
        });

        if let Err(e) = result {
            self.halted = true;
            warn!(step = self.schedule.steps() + 1, error = %e, "step aborted");
            return Err(e.into());
        }

        self.happy = happy;
        self.relocated = relocated;
        let step = self.schedule.steps();
        self.metrics.collect(step, happy, relocated, &self.agents, &self.grid);

        let total = self.agents.len();
        let converged = happy == total;
        debug!(step, happy, relocated, total, "step complete");
        if converged {
            self.running = false;
            info!(step, agents = total, "all agents happy; model converged");
        }

        Ok(StepReport { step, happy, relocated, total, converged })
    }

    /// Call [`step`][Self::step] while the model is running, at most
    /// `max_steps` times when a cap is given.
    ///
    /// Returns immediately (zero steps) on an already-converged model.
    pub fn run<O: ModelObserver>(
        &mut self,
        max_steps: Option<u64>,
        observer:  &mut O,
    ) -> SimResult<RunSummary> {
        let mut steps_run = 0;
        let mut last = None;

        while self.running && max_steps.is_none_or(|cap| steps_run < cap) {
            let report = self.step()?;
            observer.on_step_end(&report);
            if report.converged {
                observer.on_converged(&report);
            }
            steps_run += 1;
            last = Some(report);
        }

        let summary = RunSummary { steps_run, converged: !self.running, last };
        observer.on_run_end(&summary);
        Ok(summary)
    }

    // ── State access ──────────────────────────────────────────────────────

    /// `false` once every agent was happy in the same step.
    #[inline]
    pub fn running(&self) -> bool {
        self.running
    }

    /// `true` after a step failed part-way.
    #[inline]
    pub fn is_halted(&self) -> bool {
        self.halted
    }

    /// Happy agents in the most recently completed step.
    #[inline]
    pub fn happy(&self) -> usize {
        self.happy
    }

    /// Relocations in the most recently completed step.
    #[inline]
    pub fn relocated(&self) -> usize {
        self.relocated
    }

    /// Completed steps.
    #[inline]
    pub fn steps(&self) -> u64 {
        self.schedule.steps()
    }

    /// Number of agents; fixed at initialization.
    #[inline]
    pub fn agent_count(&self) -> usize {
        self.agents.len()
    }

    pub fn params(&self) -> &ModelParams {
        &self.params
    }

    pub fn grid(&self) -> &TorusGrid {
        &self.grid
    }

    pub fn agents(&self) -> &AgentStore {
        &self.agents
    }

    pub fn behavior(&self) -> &B {
        &self.behavior
    }

    /// Kind and current cell of `agent`.
    pub fn agent(&self, agent: AgentId) -> Option<Agent> {
        self.agents.view(agent, &self.grid)
    }

    /// Per-step snapshot history, starting with the step-0 snapshot taken at
    /// initialization.
    pub fn metrics(&self) -> &MetricsCollector {
        &self.metrics
    }
}
