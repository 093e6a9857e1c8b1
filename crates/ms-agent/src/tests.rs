//! Unit tests for ms-agent.

#[cfg(test)]
mod builder {
    use ms_core::{AgentId, Grid};

    use crate::AgentStoreBuilder;
    use crate::builder::{INCONVENIENCE_WEIGHT_RANGE, MONEY_BUDGET_RANGE, TIME_BUDGET_RANGE};

    fn grid() -> Grid {
        Grid::new(60, 48).unwrap()
    }

    #[test]
    fn build_correct_count() {
        let (store, rngs) = AgentStoreBuilder::new(100, 0).build(&grid());
        assert_eq!(store.count, 100);
        assert_eq!(rngs.len(), 100);
        assert_eq!(store.position.len(), 100);
        assert_eq!(store.last_choice.len(), 100);
    }

    #[test]
    fn initial_attributes_in_range() {
        let g = grid();
        let (store, _rngs) = AgentStoreBuilder::new(500, 3).build(&g);
        for i in 0..store.count {
            assert!(g.contains(store.position[i]));
            assert!(TIME_BUDGET_RANGE.contains(&store.time_budget[i]));
            assert!(MONEY_BUDGET_RANGE.contains(&store.money_budget[i]));
            assert!(INCONVENIENCE_WEIGHT_RANGE.contains(&store.inconvenience_weight[i]));
        }
    }

    #[test]
    fn initial_flags_cleared() {
        let (store, _rngs) = AgentStoreBuilder::new(10, 3).build(&grid());
        assert!(store.last_choice.iter().all(Option::is_none));
        assert!(store.day_pass_active.iter().all(|&d| !d));
        assert!(store.in_tax_zone.iter().all(|&t| !t));
        assert!(store.transit_confidence.iter().all(|&c| c == 1.0));
        assert!(store.pfh_confidence.iter().all(|&c| c == 1.0));
    }

    #[test]
    fn same_seed_same_population() {
        let (a, _) = AgentStoreBuilder::new(50, 11).build(&grid());
        let (b, _) = AgentStoreBuilder::new(50, 11).build(&grid());
        assert_eq!(a.position, b.position);
        assert_eq!(a.time_budget, b.time_budget);
        assert_eq!(a.money_budget, b.money_budget);
    }

    #[test]
    fn growing_population_keeps_existing_agents() {
        let (small, _) = AgentStoreBuilder::new(10, 11).build(&grid());
        let (large, _) = AgentStoreBuilder::new(20, 11).build(&grid());
        assert_eq!(small.snapshot(AgentId(9)), large.snapshot(AgentId(9)));
    }

    #[test]
    fn empty_store() {
        let (store, rngs) = AgentStoreBuilder::new(0, 0).build(&grid());
        assert!(store.is_empty());
        assert!(rngs.is_empty());
    }
}

#[cfg(test)]
mod store {
    use ms_core::{AgentId, Grid, TravelMode};

    use crate::AgentStoreBuilder;

    #[test]
    fn agent_ids_ascending() {
        let (store, _) = AgentStoreBuilder::new(5, 0).build(&Grid::new(4, 4).unwrap());
        let ids: Vec<_> = store.agent_ids().collect();
        assert_eq!(ids, vec![AgentId(0), AgentId(1), AgentId(2), AgentId(3), AgentId(4)]);
    }

    #[test]
    fn count_choice() {
        let (mut store, _) = AgentStoreBuilder::new(4, 0).build(&Grid::new(4, 4).unwrap());
        store.last_choice[0] = Some(TravelMode::Transit);
        store.last_choice[1] = Some(TravelMode::Pfh);
        store.last_choice[2] = Some(TravelMode::Transit);
        assert_eq!(store.count_choice(TravelMode::Transit), 2);
        assert_eq!(store.count_choice(TravelMode::Pfh), 1);
        assert!(store.last_choice[3].is_none());
    }

    #[test]
    fn snapshot_reflects_state() {
        let (mut store, _) = AgentStoreBuilder::new(3, 0).build(&Grid::new(4, 4).unwrap());
        store.time_budget[1] = -12.5;
        store.money_budget[1] = 3.0;
        store.last_choice[1] = Some(TravelMode::Pfh);
        let snap = store.snapshot(AgentId(1)).unwrap();
        assert_eq!(snap.id, AgentId(1));
        assert_eq!(snap.time_remaining, -12.5);
        assert_eq!(snap.money_remaining, 3.0);
        assert_eq!(snap.last_choice, Some(TravelMode::Pfh));
        assert!(store.snapshot(AgentId(3)).is_none());
        assert_eq!(store.snapshots().len(), 3);
    }

    #[test]
    fn rng_streams_are_per_agent() {
        let (_, mut rngs) = AgentStoreBuilder::new(2, 0).build(&Grid::new(4, 4).unwrap());
        let a: u64 = rngs.get_mut(AgentId(0)).random();
        let b: u64 = rngs.get_mut(AgentId(1)).random();
        assert_ne!(a, b);
    }
}
