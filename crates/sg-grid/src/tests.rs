//! Unit tests for sg-grid.

use std::collections::{HashMap, HashSet};

use sg_core::{AgentId, SimRng};

use crate::{GridError, Position, TorusGrid};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn p(x: u32, y: u32) -> Position {
    Position::new(x, y)
}

/// Fill every cell of `grid` whose index is in `cells` (row-major), assigning
/// agent ids in order.
fn fill(grid: &mut TorusGrid, cells: &[(u32, u32)]) {
    for (i, &(x, y)) in cells.iter().enumerate() {
        grid.place(AgentId(i as u32), p(x, y)).unwrap();
    }
}

/// Occupancy invariant: cells and the reverse map agree, no duplicates.
fn assert_consistent(grid: &TorusGrid) {
    let mut seen = HashSet::new();
    for (agent, pos) in grid.occupied() {
        assert!(seen.insert(agent), "{agent} occupies two cells");
        assert_eq!(grid.position_of(agent), Some(pos));
    }
    assert_eq!(seen.len(), grid.agent_count());
    assert_eq!(grid.agent_count() + grid.empty_count(), grid.cell_count());
    assert_eq!(grid.empty_cells().count(), grid.empty_count());
}

// ── Coordinates ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod coordinate_tests {
    use super::*;

    #[test]
    fn wrap_both_axes() {
        let g = TorusGrid::new(5, 4);
        assert_eq!(g.wrap(p(0, 0), -1, -1), p(4, 3));
        assert_eq!(g.wrap(p(4, 3), 1, 1), p(0, 0));
        assert_eq!(g.wrap(p(2, 2), 7, -9), p(4, 1));
    }

    #[test]
    fn contains_and_counts() {
        let g = TorusGrid::new(3, 2);
        assert!(g.contains(p(2, 1)));
        assert!(!g.contains(p(3, 0)));
        assert!(!g.contains(p(0, 2)));
        assert_eq!(g.cell_count(), 6);
        assert_eq!(g.empty_count(), 6);
        assert_eq!(g.agent_count(), 0);
    }

    #[test]
    fn empty_cells_row_major() {
        let g = TorusGrid::new(2, 2);
        let cells: Vec<_> = g.empty_cells().collect();
        assert_eq!(cells, vec![p(0, 0), p(1, 0), p(0, 1), p(1, 1)]);
    }
}

// ── Placement ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod place_tests {
    use super::*;

    #[test]
    fn place_binds_both_directions() {
        let mut g = TorusGrid::new(4, 4);
        g.place(AgentId(0), p(1, 2)).unwrap();
        assert_eq!(g.occupant_at(p(1, 2)), Some(AgentId(0)));
        assert_eq!(g.position_of(AgentId(0)), Some(p(1, 2)));
        assert!(!g.is_cell_empty(p(1, 2)));
        assert_eq!(g.agent_count(), 1);
        assert_consistent(&g);
    }

    #[test]
    fn place_on_occupied_cell_fails() {
        let mut g = TorusGrid::new(3, 3);
        g.place(AgentId(0), p(0, 0)).unwrap();
        let err = g.place(AgentId(1), p(0, 0)).unwrap_err();
        assert_eq!(err, GridError::OccupiedCell(p(0, 0)));
        assert_eq!(g.position_of(AgentId(1)), None);
        assert_consistent(&g);
    }

    #[test]
    fn place_twice_fails() {
        let mut g = TorusGrid::new(3, 3);
        g.place(AgentId(0), p(0, 0)).unwrap();
        let err = g.place(AgentId(0), p(1, 1)).unwrap_err();
        assert_eq!(err, GridError::AlreadyPlaced { agent: AgentId(0), at: p(0, 0) });
        assert!(g.is_cell_empty(p(1, 1)));
    }

    #[test]
    fn place_out_of_bounds_fails() {
        let mut g = TorusGrid::new(3, 3);
        assert!(matches!(
            g.place(AgentId(0), p(3, 0)),
            Err(GridError::OutOfBounds { .. })
        ));
        assert_eq!(g.agent_count(), 0);
    }

    #[test]
    fn sparse_ids_are_allowed() {
        let mut g = TorusGrid::new(3, 3);
        g.place(AgentId(5), p(2, 2)).unwrap();
        assert_eq!(g.position_of(AgentId(5)), Some(p(2, 2)));
        assert_eq!(g.position_of(AgentId(4)), None);
    }

    #[test]
    fn occupant_at_out_of_bounds_is_none() {
        let g = TorusGrid::new(2, 2);
        assert_eq!(g.occupant_at(p(9, 9)), None);
    }
}

// ── Neighborhoods ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod neighbor_tests {
    use super::*;

    #[test]
    fn interior_cell_has_eight_neighbors() {
        let g = TorusGrid::new(5, 5);
        let cells: Vec<_> = g.neighbor_cells(p(2, 2)).collect();
        assert_eq!(cells.len(), 8);
        assert!(!cells.contains(&p(2, 2)));
        assert_eq!(cells[0], p(1, 1));
        assert_eq!(cells[7], p(3, 3));
    }

    #[test]
    fn corner_wraps_around() {
        let g = TorusGrid::new(4, 4);
        let cells: HashSet<_> = g.neighbor_cells(p(0, 0)).collect();
        let expected: HashSet<_> = [
            p(3, 3), p(0, 3), p(1, 3),
            p(3, 0),          p(1, 0),
            p(3, 1), p(0, 1), p(1, 1),
        ]
        .into_iter()
        .collect();
        assert_eq!(cells, expected);
    }

    #[test]
    fn tiny_grids_deduplicate_and_exclude_self() {
        let g = TorusGrid::new(2, 2);
        let cells: Vec<_> = g.neighbor_cells(p(0, 0)).collect();
        assert_eq!(cells.len(), 3);
        assert!(!cells.contains(&p(0, 0)));

        let g = TorusGrid::new(1, 1);
        assert_eq!(g.neighbor_cells(p(0, 0)).count(), 0);

        let g = TorusGrid::new(1, 3);
        let cells: Vec<_> = g.neighbor_cells(p(0, 1)).collect();
        assert_eq!(cells, vec![p(0, 0), p(0, 2)]);
    }

    #[test]
    fn neighbors_skip_empty_cells() {
        let mut g = TorusGrid::new(5, 5);
        fill(&mut g, &[(2, 2), (1, 1), (3, 2), (4, 4)]);
        let mut n: Vec<_> = g.neighbors(p(2, 2)).collect();
        n.sort();
        assert_eq!(n, vec![AgentId(1), AgentId(2)]);
    }

    #[test]
    fn neighbor_order_is_deterministic() {
        let mut g = TorusGrid::new(3, 3);
        fill(&mut g, &[(0, 0), (1, 0), (2, 0), (0, 1), (2, 1), (0, 2), (1, 2), (2, 2)]);
        let a: Vec<_> = g.neighbors(p(1, 1)).collect();
        let b: Vec<_> = g.neighbors(p(1, 1)).collect();
        assert_eq!(a, b);
        assert_eq!(a.len(), 8);
    }

    #[test]
    fn neighborhood_is_symmetric() {
        let mut g = TorusGrid::new(4, 3);
        let mut rng = SimRng::new(3);
        let mut id = 0;
        for y in 0..3 {
            for x in 0..4 {
                if rng.gen_bool(0.6) {
                    g.place(AgentId(id), p(x, y)).unwrap();
                    id += 1;
                }
            }
        }
        for (a, pa) in g.occupied() {
            for b in g.neighbors(pa) {
                let pb = g.position_of(b).unwrap();
                assert!(
                    g.neighbors(pb).any(|x| x == a),
                    "{a} sees {b} but not vice versa"
                );
            }
        }
    }
}

// ── Relocation ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod relocate_tests {
    use super::*;

    #[test]
    fn relocation_moves_to_an_empty_cell() {
        let mut g = TorusGrid::new(3, 3);
        fill(&mut g, &[(0, 0), (1, 0)]);
        let mut rng = SimRng::new(1);
        let to = g.relocate_to_random_empty(AgentId(0), &mut rng).unwrap();
        assert_ne!(to, p(0, 0));
        assert_ne!(to, p(1, 0));
        assert_eq!(g.occupant_at(to), Some(AgentId(0)));
        assert!(g.is_cell_empty(p(0, 0)));
        assert_consistent(&g);
    }

    #[test]
    fn single_vacancy_is_always_chosen() {
        let mut g = TorusGrid::new(2, 2);
        fill(&mut g, &[(0, 0), (1, 0), (0, 1)]);
        let mut rng = SimRng::new(99);
        let to = g.relocate_to_random_empty(AgentId(1), &mut rng).unwrap();
        assert_eq!(to, p(1, 1));
        assert!(g.is_cell_empty(p(1, 0)));
        assert_consistent(&g);
    }

    #[test]
    fn saturated_grid_reports_no_empty_cell() {
        let mut g = TorusGrid::new(1, 1);
        g.place(AgentId(0), p(0, 0)).unwrap();
        let mut rng = SimRng::new(0);
        assert_eq!(
            g.relocate_to_random_empty(AgentId(0), &mut rng),
            Err(GridError::NoEmptyCell)
        );
        assert_eq!(g.position_of(AgentId(0)), Some(p(0, 0)));
    }

    #[test]
    fn unplaced_agent_cannot_relocate() {
        let mut g = TorusGrid::new(2, 2);
        let mut rng = SimRng::new(0);
        assert_eq!(
            g.relocate_to_random_empty(AgentId(3), &mut rng),
            Err(GridError::AgentNotPlaced(AgentId(3)))
        );
    }

    #[test]
    fn many_relocations_preserve_invariant() {
        let mut g = TorusGrid::new(6, 5);
        let mut rng = SimRng::new(42);
        for i in 0..20 {
            let cell = g.empty_cells().next().unwrap();
            g.place(AgentId(i), cell).unwrap();
        }
        for round in 0..500u32 {
            let agent = AgentId(round % 20);
            g.relocate_to_random_empty(agent, &mut rng).unwrap();
        }
        assert_eq!(g.agent_count(), 20);
        assert_consistent(&g);
    }

    #[test]
    fn every_vacancy_is_reachable() {
        let mut g = TorusGrid::new(3, 1);
        g.place(AgentId(0), p(0, 0)).unwrap();
        let mut rng = SimRng::new(7);
        let mut visited = HashSet::new();
        for _ in 0..200 {
            visited.insert(g.relocate_to_random_empty(AgentId(0), &mut rng).unwrap());
        }
        assert_eq!(visited.len(), 3);
    }

    #[test]
    fn destination_is_uniform_over_vacancies() {
        // 5 agents on 12 cells; two moves reorder the vacancy pool first.
        let mut base = TorusGrid::new(4, 3);
        fill(&mut base, &[(0, 0), (1, 0), (2, 1), (3, 2), (0, 2)]);
        let mut rng = SimRng::new(3);
        base.relocate_to_random_empty(AgentId(1), &mut rng).unwrap();
        base.relocate_to_random_empty(AgentId(3), &mut rng).unwrap();

        let candidates: HashSet<Position> = base.empty_cells().collect();
        assert_eq!(candidates.len(), 7);

        const TRIALS: usize = 35_000;
        let mut hits: HashMap<Position, usize> = HashMap::new();
        for _ in 0..TRIALS {
            let mut g = base.clone();
            let to = g.relocate_to_random_empty(AgentId(0), &mut rng).unwrap();
            assert!(candidates.contains(&to));
            *hits.entry(to).or_default() += 1;
        }
        assert_eq!(hits.len(), candidates.len());

        // 6 degrees of freedom; 22.46 is the 0.1% critical value.
        let expected = TRIALS as f64 / candidates.len() as f64;
        let chi2: f64 = hits
            .values()
            .map(|&n| (n as f64 - expected).powi(2) / expected)
            .sum();
        assert!(chi2 < 22.46, "chi-square {chi2} over {hits:?}");
    }

    #[test]
    fn same_seed_same_destinations() {
        let run = |seed| {
            let mut g = TorusGrid::new(10, 10);
            g.place(AgentId(0), p(5, 5)).unwrap();
            let mut rng = SimRng::new(seed);
            (0..10)
                .map(|_| g.relocate_to_random_empty(AgentId(0), &mut rng).unwrap())
                .collect::<Vec<_>>()
        };
        assert_eq!(run(11), run(11));
    }
}
