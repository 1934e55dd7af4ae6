//! Plain data rows held by the collector.

use sg_core::{AgentId, AgentKind};

/// One agent's state at a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AgentRecord {
    pub id:   AgentId,
    pub kind: AgentKind,
    pub x:    u32,
    pub y:    u32,
}

/// Model state after one step (step 0 = right after initialization).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ModelSnapshot {
    pub step:      u64,
    /// Agents that were happy during this step.  Always 0 for step 0, since
    /// nobody has been activated yet.
    pub happy:     usize,
    /// Agents that relocated during this step.
    pub relocated: usize,
    /// Every agent, ascending by id.
    pub agents:    Vec<AgentRecord>,
}

impl ModelSnapshot {
    /// `happy / agent count`; `1.0` for an empty population.
    pub fn happy_fraction(&self) -> f64 {
        if self.agents.is_empty() {
            1.0
        } else {
            self.happy as f64 / self.agents.len() as f64
        }
    }

    /// Record for `agent`, if present.
    pub fn agent(&self, agent: AgentId) -> Option<&AgentRecord> {
        // Records are dense and ordered by id, so try direct indexing first.
        match self.agents.get(agent.index()) {
            Some(r) if r.id == agent => Some(r),
            _ => self.agents.iter().find(|r| r.id == agent),
        }
    }
}
