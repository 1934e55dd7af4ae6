//! `TorusGrid`: single-occupancy lattice with wraparound on both axes.
//!
//! # Layout
//!
//! Occupancy is a flat row-major `Vec<AgentId>` (`AgentId::INVALID` = empty),
//! so `occupant_at` is a single index.  The grid also owns the reverse map
//! `AgentId → Position`; both directions are updated inside the same `&mut
//! self` call, so no caller ever sees an agent on zero or two cells.
//!
//! Empty cells are additionally kept in an indexed pool (`empties` plus the
//! `empty_slot` back-index) which makes a uniform draw over vacancies O(1)
//! and keeps relocation O(1) regardless of grid size.

use sg_core::{AgentId, SimRng};

use crate::{GridError, GridResult, Position};

/// `empty_slot` value for occupied cells.
const OCCUPIED: usize = usize::MAX;

/// Moore-neighborhood offsets in row-major order.
#[rustfmt::skip]
const MOORE_OFFSETS: [(i64, i64); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1,  0),          (1,  0),
    (-1,  1), (0,  1), (1,  1),
];

/// Bounded 2D toroidal lattice holding at most one agent per cell.
#[derive(Clone, Debug)]
pub struct TorusGrid {
    width:      u32,
    height:     u32,
    /// Occupant of each cell, row-major.
    cells:      Vec<AgentId>,
    /// Current cell of each agent, indexed by `AgentId`.
    positions:  Vec<Position>,
    /// Indices of all currently empty cells, in no particular order.
    empties:    Vec<usize>,
    /// For each cell, its slot in `empties`, or `OCCUPIED`.
    empty_slot: Vec<usize>,
}

impl TorusGrid {
    /// Create an empty `width × height` torus.
    ///
    /// # Panics
    /// Panics if either dimension is zero.  `ModelParams::validate` rejects
    /// that before a grid is ever built.
    pub fn new(width: u32, height: u32) -> Self {
        assert!(width > 0 && height > 0, "grid dimensions must be positive");
        let n = width as usize * height as usize;
        Self {
            width,
            height,
            cells:      vec![AgentId::INVALID; n],
            positions:  Vec::new(),
            empties:    (0..n).collect(),
            empty_slot: (0..n).collect(),
        }
    }

    // ── Dimensions and counts ─────────────────────────────────────────────

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total number of cells.
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Number of occupied cells (= number of placed agents).
    #[inline]
    pub fn agent_count(&self) -> usize {
        self.cells.len() - self.empties.len()
    }

    #[inline]
    pub fn empty_count(&self) -> usize {
        self.empties.len()
    }

    /// `true` if every cell is occupied.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.empties.is_empty()
    }

    // ── Coordinates ───────────────────────────────────────────────────────

    /// `true` if `pos` lies inside the lattice.
    #[inline]
    pub fn contains(&self, pos: Position) -> bool {
        pos.x < self.width && pos.y < self.height
    }

    /// Shift `pos` by `(dx, dy)` with wraparound on both axes.
    #[inline]
    pub fn wrap(&self, pos: Position, dx: i64, dy: i64) -> Position {
        let w = self.width as i64;
        let h = self.height as i64;
        Position {
            x: (pos.x as i64 + dx).rem_euclid(w) as u32,
            y: (pos.y as i64 + dy).rem_euclid(h) as u32,
        }
    }

    #[inline]
    fn cell_index(&self, pos: Position) -> usize {
        pos.y as usize * self.width as usize + pos.x as usize
    }

    #[inline]
    fn position_at(&self, cell: usize) -> Position {
        let w = self.width as usize;
        Position::new((cell % w) as u32, (cell / w) as u32)
    }

    fn check_bounds(&self, pos: Position) -> GridResult<()> {
        if self.contains(pos) {
            Ok(())
        } else {
            Err(GridError::OutOfBounds { pos, width: self.width, height: self.height })
        }
    }

    // ── Lookup ────────────────────────────────────────────────────────────

    /// The agent at `pos`, or `None` for an empty or out-of-bounds cell.  O(1).
    #[inline]
    pub fn occupant_at(&self, pos: Position) -> Option<AgentId> {
        if !self.contains(pos) {
            return None;
        }
        let a = self.cells[self.cell_index(pos)];
        (a != AgentId::INVALID).then_some(a)
    }

    #[inline]
    pub fn is_cell_empty(&self, pos: Position) -> bool {
        self.contains(pos) && self.cells[self.cell_index(pos)] == AgentId::INVALID
    }

    /// Current cell of `agent`, or `None` if it was never placed.  O(1).
    #[inline]
    pub fn position_of(&self, agent: AgentId) -> Option<Position> {
        self.positions
            .get(agent.index())
            .copied()
            .filter(|&p| p != Position::INVALID)
    }

    /// All empty cells in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = Position> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &a)| a == AgentId::INVALID)
            .map(|(i, _)| self.position_at(i))
    }

    /// `(agent, cell)` for every occupied cell in row-major order.
    pub fn occupied(&self) -> impl Iterator<Item = (AgentId, Position)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &a)| a != AgentId::INVALID)
            .map(|(i, &a)| (a, self.position_at(i)))
    }

    // ── Neighborhoods ─────────────────────────────────────────────────────

    /// Distinct cells of the Moore neighborhood of `pos` after wraparound.
    ///
    /// `pos` itself is never included, and on grids narrower than three
    /// cells in either direction, offsets that wrap onto the same cell are
    /// reported once.  Order follows the row-major offset table, so it is
    /// fixed for a given `pos` and grid size.  Out-of-range coordinates are
    /// reduced modulo the grid size first.
    pub fn neighbor_cells(&self, pos: Position) -> impl Iterator<Item = Position> {
        let center = self.wrap(pos, 0, 0);
        let mut out = [Position::INVALID; 8];
        let mut n = 0;
        for (dx, dy) in MOORE_OFFSETS {
            let p = self.wrap(center, dx, dy);
            if p != center && !out[..n].contains(&p) {
                out[n] = p;
                n += 1;
            }
        }
        out.into_iter().take(n)
    }

    /// Occupants of the Moore neighborhood of `pos` (empty cells skipped).
    pub fn neighbors(&self, pos: Position) -> impl Iterator<Item = AgentId> + '_ {
        self.neighbor_cells(pos)
            .filter_map(move |p| self.occupant_at(p))
    }

    // ── Mutation ──────────────────────────────────────────────────────────

    /// Put `agent` on the empty cell `pos`.
    ///
    /// Fails if `pos` is outside the lattice, already occupied, or if
    /// `agent` is already on the grid.
    pub fn place(&mut self, agent: AgentId, pos: Position) -> GridResult<()> {
        if agent == AgentId::INVALID {
            return Err(GridError::AgentNotPlaced(agent));
        }
        self.check_bounds(pos)?;
        if let Some(at) = self.position_of(agent) {
            return Err(GridError::AlreadyPlaced { agent, at });
        }
        let cell = self.cell_index(pos);
        if self.cells[cell] != AgentId::INVALID {
            return Err(GridError::OccupiedCell(pos));
        }

        self.take_empty(cell);
        self.cells[cell] = agent;
        if self.positions.len() <= agent.index() {
            self.positions.resize(agent.index() + 1, Position::INVALID);
        }
        self.positions[agent.index()] = pos;
        Ok(())
    }

    /// Move `agent` to a cell drawn uniformly from all currently empty cells.
    ///
    /// The agent's own cell is not a candidate.  Returns the new position.
    pub fn relocate_to_random_empty(
        &mut self,
        agent: AgentId,
        rng:   &mut SimRng,
    ) -> GridResult<Position> {
        let from = self.position_of(agent).ok_or(GridError::AgentNotPlaced(agent))?;
        if self.is_full() {
            return Err(GridError::NoEmptyCell);
        }

        let dest = self.empties[rng.gen_range(0..self.empties.len())];
        let src = self.cell_index(from);

        self.take_empty(dest);
        self.cells[dest] = agent;
        self.cells[src] = AgentId::INVALID;
        self.release(src);

        let to = self.position_at(dest);
        self.positions[agent.index()] = to;
        Ok(to)
    }

    // ── Empty-cell pool ───────────────────────────────────────────────────

    fn take_empty(&mut self, cell: usize) {
        let slot = self.empty_slot[cell];
        debug_assert_ne!(slot, OCCUPIED, "cell {cell} is not in the empty pool");
        self.empties.swap_remove(slot);
        if let Some(&moved) = self.empties.get(slot) {
            self.empty_slot[moved] = slot;
        }
        self.empty_slot[cell] = OCCUPIED;
    }

    fn release(&mut self, cell: usize) {
        debug_assert_eq!(self.empty_slot[cell], OCCUPIED);
        self.empty_slot[cell] = self.empties.len();
        self.empties.push(cell);
    }
}
