//! `MetricsCollector`: append-only per-step snapshot log.

use sg_agent::AgentStore;
use sg_core::AgentId;
use sg_grid::TorusGrid;

use crate::row::{AgentRecord, ModelSnapshot};

/// Ordered history of [`ModelSnapshot`]s, one per `collect` call.
#[derive(Debug, Clone, Default)]
pub struct MetricsCollector {
    snapshots: Vec<ModelSnapshot>,
}

impl MetricsCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a snapshot of the current state.
    ///
    /// Agent records are read straight from the store and the grid's
    /// back-reference, in ascending id order.  Agents not on the grid are
    /// skipped, which cannot happen inside a running model.
    pub fn collect(
        &mut self,
        step:      u64,
        happy:     usize,
        relocated: usize,
        agents:    &AgentStore,
        grid:      &TorusGrid,
    ) {
        let records = agents
            .iter(grid)
            .map(|a| AgentRecord {
                id:   a.id,
                kind: a.kind,
                x:    a.position.x,
                y:    a.position.y,
            })
            .collect();

        self.snapshots.push(ModelSnapshot { step, happy, relocated, agents: records });
    }

    /// Full history, oldest first.
    pub fn snapshots(&self) -> &[ModelSnapshot] {
        &self.snapshots
    }

    pub fn latest(&self) -> Option<&ModelSnapshot> {
        self.snapshots.last()
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// `(step, happy)` for every snapshot.
    pub fn happy_series(&self) -> Vec<(u64, usize)> {
        self.snapshots.iter().map(|s| (s.step, s.happy)).collect()
    }

    /// `(step, x, y)` for one agent across every snapshot it appears in.
    pub fn agent_trajectory(&self, agent: AgentId) -> Vec<(u64, u32, u32)> {
        self.snapshots
            .iter()
            .filter_map(|s| s.agent(agent).map(|r| (s.step, r.x, r.y)))
            .collect()
    }
}
