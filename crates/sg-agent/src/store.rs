//! Core agent storage.

use sg_core::{AgentId, AgentKind};
use sg_grid::{Position, TorusGrid};

// ── Agent ─────────────────────────────────────────────────────────────────────

/// A read-only view of one agent: its immutable type tag joined with its
/// current cell on the grid.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Agent {
    pub id:       AgentId,
    pub kind:     AgentKind,
    pub position: Position,
}

// ── AgentStore ────────────────────────────────────────────────────────────────

/// Structure-of-Arrays storage for all agent state.
///
/// `kind[agent.index()]` is the type tag of `agent`.  Agents are only ever
/// appended (during population initialization), never removed, and a tag
/// is never rewritten, so ids stay dense in `0..count`.
#[derive(Clone, Debug, Default)]
pub struct AgentStore {
    kind: Vec<AgentKind>,
}

impl AgentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-allocate room for `capacity` agents.
    pub fn with_capacity(capacity: usize) -> Self {
        Self { kind: Vec::with_capacity(capacity) }
    }

    /// Append a new agent of `kind` and return its id.
    pub fn push(&mut self, kind: AgentKind) -> AgentId {
        let id = AgentId(self.kind.len() as u32);
        self.kind.push(kind);
        id
    }

    /// Number of agents.
    #[inline]
    pub fn len(&self) -> usize {
        self.kind.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.kind.is_empty()
    }

    /// Type tag of `agent`, or `None` for an unknown id.
    #[inline]
    pub fn kind(&self, agent: AgentId) -> Option<AgentKind> {
        self.kind.get(agent.index()).copied()
    }

    /// Read-only slice of all type tags, indexed by `AgentId`.
    #[inline]
    pub fn kinds(&self) -> &[AgentKind] {
        &self.kind
    }

    /// Iterator over all `AgentId`s in ascending index order.
    pub fn agent_ids(&self) -> impl Iterator<Item = AgentId> + '_ {
        (0..self.kind.len() as u32).map(AgentId)
    }

    /// How many agents carry `kind`.
    pub fn count_of(&self, kind: AgentKind) -> usize {
        self.kind.iter().filter(|&&k| k == kind).count()
    }

    /// Join `agent` with its grid position.
    ///
    /// Returns `None` if the id is unknown or the agent is not on `grid`.
    pub fn view(&self, agent: AgentId, grid: &TorusGrid) -> Option<Agent> {
        Some(Agent {
            id:       agent,
            kind:     self.kind(agent)?,
            position: grid.position_of(agent)?,
        })
    }

    /// Views of every placed agent, in ascending id order.
    pub fn iter<'a>(&'a self, grid: &'a TorusGrid) -> impl Iterator<Item = Agent> + 'a {
        self.agent_ids().filter_map(move |id| self.view(id, grid))
    }
}
