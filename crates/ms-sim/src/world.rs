//! The `World` struct and its step loop.

use ms_agent::{AgentRngs, AgentSnapshot, AgentStore};
use ms_behavior::{ConfidenceModel, ModeChoiceModel, TaxZone, Trip, TripContext, TripDecision};
use ms_core::{AgentId, Cell, Grid, SimClock, SimRng, Step, TRIPS_PER_DAY, WorldConfig};
use tracing::{debug, info};

use crate::{Aggregator, ModalShare, SimResult, WorldBuilder, WorldObserver};

// ── World ─────────────────────────────────────────────────────────────────────

/// The commuter population on its grid, plus the clock and collected results.
///
/// `World<M>` drives a two-phase step:
///
/// 1. **Decision phase** (optionally parallel with the `parallel` feature):
///    every agent draws a destination, evaluates both modes with its own RNG,
///    and picks one.  Reads only; nothing in the store changes.
/// 2. **Apply phase** (sequential, shuffled activation order): each decision
///    is written back: confidences, tax flag, day pass, choice, budgets and
///    position.
///
/// The aggregator collects once every agent has finished.
///
/// Because a decision depends only on the agent's own state and RNG stream,
/// the activation order and the thread count never change the outcome.
///
/// Create via [`World::new`] or [`WorldBuilder`].
pub struct World<M: ModeChoiceModel = ConfidenceModel> {
    pub(crate) config:     WorldConfig,
    pub(crate) clock:      SimClock,
    pub(crate) grid:       Grid,
    pub(crate) tax_zone:   TaxZone,
    pub(crate) agents:     AgentStore,
    pub(crate) rngs:       AgentRngs,
    /// Drives the activation shuffle only.  Agent decisions never touch it.
    pub(crate) sim_rng:    SimRng,
    /// Activation order, reshuffled every step.
    pub(crate) order:      Vec<AgentId>,
    pub(crate) model:      M,
    pub(crate) aggregator: Aggregator,
}

impl World<ConfidenceModel> {
    /// Build a world with the default tax zone and the confidence model
    /// weighted by `config.weights`.
    ///
    /// Fails with a configuration error for a zero population, a degenerate
    /// grid, a negative tax rate, or invalid weights.
    pub fn new(config: WorldConfig) -> SimResult<Self> {
        config.validate()?;
        let model = ConfidenceModel::new(config.weights)?;
        WorldBuilder::new(config, model).build()
    }
}

impl<M: ModeChoiceModel> World<M> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Advance one step: every agent makes exactly one trip decision, then the
    /// aggregator collects.
    pub fn step(&mut self) -> ModalShare {
        let step = self.clock.advance();

        let decisions = self.decide_all(step);

        self.sim_rng.shuffle(&mut self.order);
        for i in 0..self.order.len() {
            let agent = self.order[i];
            self.apply(agent, &decisions[agent.index()]);
        }

        let share = self.aggregator.collect(step, &self.agents);
        debug!(
            step    = step.0,
            day     = self.clock.day(TRIPS_PER_DAY),
            transit = share.transit_percent,
            pfh     = share.pfh_percent,
            "step complete"
        );
        share
    }

    /// Run up to `steps` steps, calling observer hooks around each one.
    ///
    /// `observer.should_stop()` is polled before every step, never mid-step.
    /// Returns the number of steps actually run.
    pub fn run<O: WorldObserver>(&mut self, steps: u64, observer: &mut O) -> u64 {
        let mut completed = 0;
        while completed < steps && !observer.should_stop() {
            observer.on_step_start(self.clock.current_step + 1);
            let share = self.step();
            observer.on_step_end(share.step, &share, &self.agents);
            completed += 1;
        }
        observer.on_sim_end(self.clock.current_step);

        if let Some((transit, pfh)) = self.aggregator.mean_recent_share(completed as usize) {
            info!(
                steps    = completed,
                tax_rate = self.config.tax_rate,
                transit,
                pfh,
                "run finished"
            );
        }
        completed
    }

    /// Share of each mode among the agents' latest choices.  Both are 0
    /// before the first step.
    pub fn current_modal_share(&self) -> ModalShare {
        ModalShare::from_store(self.clock.current_step, &self.agents)
    }

    /// Remaining budgets and latest choice of every agent, by id.
    pub fn agent_snapshot(&self) -> Vec<AgentSnapshot> {
        self.agents.snapshots()
    }

    /// One modal share per completed step.
    pub fn history(&self) -> &[ModalShare] {
        self.aggregator.history()
    }

    pub fn aggregator(&self) -> &Aggregator {
        &self.aggregator
    }

    /// Number of steps completed so far.
    pub fn step_counter(&self) -> Step {
        self.clock.current_step
    }

    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    pub fn tax_rate(&self) -> f64 {
        self.config.tax_rate
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn tax_zone(&self) -> &TaxZone {
        &self.tax_zone
    }

    pub fn agents(&self) -> &AgentStore {
        &self.agents
    }

    /// Current cell of every agent, by id.
    pub fn positions(&self) -> &[Cell] {
        &self.agents.position
    }

    // ── Core step processing ──────────────────────────────────────────────

    /// Draw a trip and decide it for every agent, indexed by agent id.
    ///
    /// With the `parallel` Cargo feature this runs on Rayon's thread pool.
    fn decide_all(&mut self, step: Step) -> Vec<TripDecision> {
        // Explicit field borrows so the borrow checker sees disjoint access.
        let agents = &self.agents;
        let grid   = &self.grid;
        let zone   = &self.tax_zone;
        let model  = &self.model;
        let rngs   = &mut self.rngs;

        let ctx = TripContext::new(step, self.config.tax_rate, agents);

        #[cfg(not(feature = "parallel"))]
        {
            rngs.inner
                .iter_mut()
                .enumerate()
                .map(|(i, rng)| {
                    let trip = Trip::draw(agents.position[i], grid, zone, rng);
                    model.decide(AgentId(i as u32), trip, &ctx, rng)
                })
                .collect()
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            rngs.inner
                .par_iter_mut()
                .enumerate()
                .map(|(i, rng)| {
                    let trip = Trip::draw(agents.position[i], grid, zone, rng);
                    model.decide(AgentId(i as u32), trip, &ctx, rng)
                })
                .collect()
        }
    }

    /// Write one agent's decision back into the store.
    pub(crate) fn apply(&mut self, agent: AgentId, decision: &TripDecision) {
        let i = agent.index();
        let agents = &mut self.agents;
        let chosen = decision.chosen();

        agents.transit_confidence[i] = decision.confidence.transit;
        agents.pfh_confidence[i]     = decision.confidence.pfh;
        agents.in_tax_zone[i]        = decision.trip.in_tax_zone;
        // The pass is never revoked once bought.
        agents.day_pass_active[i]   |= decision.day_pass_triggered;
        agents.last_choice[i]        = Some(decision.choice);
        agents.time_budget[i]       -= chosen.time;
        agents.money_budget[i]      -= chosen.cost;
        agents.position[i]           = decision.trip.destination;
    }
}
