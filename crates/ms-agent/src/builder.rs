//! Builder for a seeded initial population: `AgentStore` + `AgentRngs`.
//!
//! # Usage
//!
//! ```rust
//! use ms_agent::AgentStoreBuilder;
//! use ms_core::Grid;
//!
//! let grid = Grid::new(60, 48).unwrap();
//! let (store, rngs) = AgentStoreBuilder::new(1_000, /*seed=*/ 42).build(&grid);
//!
//! assert_eq!(store.count, 1_000);
//! assert_eq!(rngs.len(),  1_000);
//! ```

use std::ops::RangeInclusive;

use ms_core::{AgentId, Grid};

use crate::{AgentRngs, AgentStore};

/// Initial time budget range, minutes.
pub const TIME_BUDGET_RANGE: RangeInclusive<f64> = 91.0..=207.0;

/// Initial money budget range, dollars.
pub const MONEY_BUDGET_RANGE: RangeInclusive<f64> = 5.0..=39.0;

/// Inconvenience weight range.
pub const INCONVENIENCE_WEIGHT_RANGE: RangeInclusive<f64> = 0.0..=1.0;

/// Builds the initial population.
///
/// Each agent draws its starting cell, budgets and inconvenience weight from
/// its own RNG stream, in that order, so an agent's initial state depends only
/// on the seed and its id.
pub struct AgentStoreBuilder {
    count: usize,
    seed:  u64,
}

impl AgentStoreBuilder {
    /// Create a builder for `count` agents using `seed` as the global RNG seed.
    pub fn new(count: usize, seed: u64) -> Self {
        Self { count, seed }
    }

    /// Construct `AgentStore` and `AgentRngs`, placing every agent on `grid`.
    pub fn build(self, grid: &Grid) -> (AgentStore, AgentRngs) {
        let mut rngs = AgentRngs::new(self.count, self.seed);
        let mut store = AgentStore::with_capacity(self.count);

        for i in 0..self.count as u32 {
            let rng = rngs.get_mut(AgentId(i));
            store.position.push(grid.random_cell(rng));
            store.time_budget.push(rng.gen_range(TIME_BUDGET_RANGE));
            store.money_budget.push(rng.gen_range(MONEY_BUDGET_RANGE));
            store.inconvenience_weight.push(rng.gen_range(INCONVENIENCE_WEIGHT_RANGE));
            store.transit_confidence.push(1.0);
            store.pfh_confidence.push(1.0);
            store.day_pass_active.push(false);
            store.in_tax_zone.push(false);
            store.last_choice.push(None);
        }
        store.count = self.count;

        (store, rngs)
    }
}
