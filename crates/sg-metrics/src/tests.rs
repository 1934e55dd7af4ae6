//! Unit tests for sg-metrics.

use sg_agent::AgentStore;
use sg_core::{AgentId, AgentKind, SimRng};
use sg_grid::{Position, TorusGrid};

use crate::{AgentRecord, MetricsCollector, ModelSnapshot};

fn two_agents() -> (AgentStore, TorusGrid) {
    let mut store = AgentStore::new();
    let mut grid = TorusGrid::new(4, 4);
    let a = store.push(AgentKind::Majority);
    let b = store.push(AgentKind::Minority);
    grid.place(a, Position::new(0, 0)).unwrap();
    grid.place(b, Position::new(3, 2)).unwrap();
    (store, grid)
}

#[cfg(test)]
mod collector_tests {
    use super::*;

    #[test]
    fn collect_records_every_agent() {
        let (store, grid) = two_agents();
        let mut m = MetricsCollector::new();
        assert!(m.is_empty());
        m.collect(0, 0, 0, &store, &grid);

        let snap = m.latest().unwrap();
        assert_eq!(snap.step, 0);
        assert_eq!(snap.agents.len(), 2);
        assert_eq!(
            snap.agents[1],
            AgentRecord { id: AgentId(1), kind: AgentKind::Minority, x: 3, y: 2 }
        );
    }

    #[test]
    fn history_is_append_only() {
        let (store, mut grid) = two_agents();
        let mut m = MetricsCollector::new();
        m.collect(0, 0, 0, &store, &grid);
        let before = m.snapshots()[0].clone();

        let mut rng = SimRng::new(1);
        grid.relocate_to_random_empty(AgentId(0), &mut rng).unwrap();
        m.collect(1, 1, 1, &store, &grid);

        assert_eq!(m.len(), 2);
        assert_eq!(m.snapshots()[0], before, "old snapshot must not change");
        assert_ne!(m.snapshots()[1].agents[0], before.agents[0]);
    }

    #[test]
    fn happy_series_and_trajectory() {
        let (store, mut grid) = two_agents();
        let mut m = MetricsCollector::new();
        let mut rng = SimRng::new(3);
        m.collect(0, 0, 0, &store, &grid);
        for step in 1..=3 {
            grid.relocate_to_random_empty(AgentId(1), &mut rng).unwrap();
            m.collect(step, 1, 1, &store, &grid);
        }
        assert_eq!(m.happy_series(), vec![(0, 0), (1, 1), (2, 1), (3, 1)]);

        let traj = m.agent_trajectory(AgentId(0));
        assert_eq!(traj.len(), 4);
        assert!(traj.iter().all(|&(_, x, y)| (x, y) == (0, 0)));
        assert!(m.agent_trajectory(AgentId(9)).is_empty());
    }
}

#[cfg(test)]
mod snapshot_tests {
    use super::*;

    #[test]
    fn happy_fraction() {
        let snap = ModelSnapshot {
            step:      1,
            happy:     1,
            relocated: 1,
            agents:    vec![
                AgentRecord { id: AgentId(0), kind: AgentKind::Majority, x: 0, y: 0 },
                AgentRecord { id: AgentId(1), kind: AgentKind::Majority, x: 1, y: 0 },
            ],
        };
        assert!((snap.happy_fraction() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn empty_population_is_fully_happy() {
        let snap = ModelSnapshot { step: 1, happy: 0, relocated: 0, agents: vec![] };
        assert_eq!(snap.happy_fraction(), 1.0);
    }

    #[test]
    fn agent_lookup() {
        let (store, grid) = two_agents();
        let mut m = MetricsCollector::new();
        m.collect(0, 0, 0, &store, &grid);
        let snap = m.latest().unwrap();
        assert_eq!(snap.agent(AgentId(1)).map(|r| (r.x, r.y)), Some((3, 2)));
        assert!(snap.agent(AgentId(2)).is_none());
    }
}
