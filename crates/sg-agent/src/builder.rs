//! Random population initialization.
//!
//! # Usage
//!
//! ```rust
//! use sg_agent::PopulationBuilder;
//! use sg_core::SimRng;
//!
//! let mut rng = SimRng::new(42);
//! let (store, grid) = PopulationBuilder::new(10, 10)
//!     .density(0.8)
//!     .minority_pc(0.3)
//!     .populate(&mut rng)
//!     .unwrap();
//!
//! assert_eq!(store.len(), grid.agent_count());
//! ```

use sg_core::{AgentKind, SimRng};
use sg_grid::{GridResult, Position, TorusGrid};
use tracing::debug;

use crate::AgentStore;

/// Builds an [`AgentStore`] and a populated [`TorusGrid`] in one sweep.
///
/// Every cell is visited once in row-major order.  A cell is populated with
/// probability `density`; a populated cell then holds a minority agent with
/// probability `minority_pc`.  There is no rebalancing pass, so realised
/// counts are random variables around `density × cells` and
/// `minority_pc × agents`.
///
/// Ids are assigned in the order cells are populated.
#[derive(Clone, Debug)]
pub struct PopulationBuilder {
    width:       u32,
    height:      u32,
    density:     f64,
    minority_pc: f64,
}

impl PopulationBuilder {
    /// Start a builder for a `width × height` grid with nothing populated.
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height, density: 0.0, minority_pc: 0.0 }
    }

    /// Probability that a cell is populated.  Clamped to [0, 1] at draw time.
    pub fn density(mut self, density: f64) -> Self {
        self.density = density;
        self
    }

    /// Probability that a populated cell holds a minority agent.
    pub fn minority_pc(mut self, minority_pc: f64) -> Self {
        self.minority_pc = minority_pc;
        self
    }

    /// Run the sweep, drawing from `rng`.
    ///
    /// Every cell is visited once and every id is fresh, so a placement
    /// error here means the grid itself is broken; it is propagated rather
    /// than swallowed.
    pub fn populate(self, rng: &mut SimRng) -> GridResult<(AgentStore, TorusGrid)> {
        let mut grid = TorusGrid::new(self.width, self.height);
        let expected = (grid.cell_count() as f64 * self.density.clamp(0.0, 1.0)) as usize;
        let mut store = AgentStore::with_capacity(expected);

        for y in 0..self.height {
            for x in 0..self.width {
                if !rng.gen_bool(self.density) {
                    continue;
                }
                let kind = if rng.gen_bool(self.minority_pc) {
                    AgentKind::Minority
                } else {
                    AgentKind::Majority
                };
                let id = store.push(kind);
                grid.place(id, Position::new(x, y))?;
            }
        }

        debug!(
            agents   = store.len(),
            minority = store.count_of(AgentKind::Minority),
            empty    = grid.empty_count(),
            "population initialized"
        );
        Ok((store, grid))
    }
}
