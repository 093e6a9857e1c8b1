//! Fluent builder for constructing a [`World`].

use ms_agent::AgentStoreBuilder;
use ms_behavior::{ModeChoiceModel, TaxZone};
use ms_core::{SimClock, SimRng, WorldConfig};
use tracing::info;

use crate::{Aggregator, SimResult, World};

/// Fluent builder for [`World<M>`].
///
/// # Required inputs
///
/// - [`WorldConfig`] — population, grid size, tax rate, seed, score weights
/// - `M: ModeChoiceModel` — the decision engine (e.g.
///   [`ms_behavior::ConfidenceModel`])
///
/// # Optional inputs (have defaults)
///
/// | Method           | Default                        |
/// |------------------|--------------------------------|
/// | `.tax_zone(z)`   | `TaxZone::default()`           |
///
/// # Example
///
/// ```rust,ignore
/// let model = ConfidenceModel::new(config.weights)?;
/// let mut world = WorldBuilder::new(config, model)
///     .tax_zone(TaxZone::new(10..=40, 10..=40))
///     .build()?;
/// world.run(4, &mut NoopObserver);
/// ```
pub struct WorldBuilder<M: ModeChoiceModel> {
    config:   WorldConfig,
    tax_zone: Option<TaxZone>,
    model:    M,
}

impl<M: ModeChoiceModel> WorldBuilder<M> {
    /// Create a builder with all required inputs.
    ///
    /// If `model` reports its own score weights they replace
    /// `config.weights`, so [`World::config`] always shows the weights in use.
    pub fn new(config: WorldConfig, model: M) -> Self {
        Self {
            config,
            tax_zone: None,
            model,
        }
    }

    /// Replace the default central tax zone.
    pub fn tax_zone(mut self, zone: TaxZone) -> Self {
        self.tax_zone = Some(zone);
        self
    }

    /// Validate the configuration, place the population, and return a
    /// ready-to-step [`World`] at step 0.
    ///
    /// Nothing is allocated if validation fails.
    pub fn build(mut self) -> SimResult<World<M>> {
        if let Some(weights) = self.model.score_weights() {
            self.config.weights = weights;
        }
        let grid = self.config.validate()?;
        let population = self.config.population;

        let (agents, rngs) = AgentStoreBuilder::new(population, self.config.seed).build(&grid);
        let aggregator = Aggregator::new(&agents);
        let tax_zone = self.tax_zone.unwrap_or_default();

        info!(
            population,
            width    = grid.width(),
            height   = grid.height(),
            tax_rate = self.config.tax_rate,
            seed     = self.config.seed,
            "world built"
        );

        Ok(World {
            clock:    SimClock::new(),
            sim_rng:  SimRng::new(self.config.seed),
            order:    agents.agent_ids().collect(),
            config:   self.config,
            grid,
            tax_zone,
            agents,
            rngs,
            model:    self.model,
            aggregator,
        })
    }
}
