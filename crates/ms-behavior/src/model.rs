//! The `ModeChoiceModel` trait and the confidence-based decision engine.

use ms_core::{AgentId, AgentRng, ScoreWeights, TravelMode};

use crate::cost::{self, TripAggregate, TripInputs};
use crate::{BehaviorResult, Confidence, Trip, TripContext, TripDecision};

/// Pluggable mode choice.
///
/// Called once per agent per step with the agent's drawn trip, a read-only
/// [`TripContext`] and the agent's own [`AgentRng`].  Implementations must
/// not keep per-agent state of their own: whatever survives between trips
/// lives in the agent store and is written back by the world from the
/// returned [`TripDecision`].
///
/// # Thread safety
///
/// With the `parallel` feature of ms-sim, `decide` runs for many agents at
/// once on Rayon's thread pool, so implementations must be `Send + Sync`.
pub trait ModeChoiceModel: Send + Sync + 'static {
    fn decide(
        &self,
        agent: AgentId,
        trip:  Trip,
        ctx:   &TripContext<'_>,
        rng:   &mut AgentRng,
    ) -> TripDecision;

    /// Score weights the model actually applies, if it uses any.  A world
    /// built around the model reports these in its config.
    fn score_weights(&self) -> Option<ScoreWeights> {
        None
    }
}

// ── ConfidenceModel ───────────────────────────────────────────────────────────

/// The default decision engine.
///
/// For each trip it evaluates both modes (transit first, then PFH, each with
/// its own access-delay draw), starts both confidences at 1.0 and applies four
/// adjustments in order:
///
/// 1. score gap, docking the mode with the lower weighted score;
/// 2. time affordability against the remaining time budget;
/// 3. money affordability against the remaining money budget;
/// 4. inconvenience, scaled by the agent's inconvenience weight.
///
/// Transit wins ties.
#[derive(Clone, Debug, Default)]
pub struct ConfidenceModel {
    weights: ScoreWeights,
}

impl ConfidenceModel {
    pub fn new(weights: ScoreWeights) -> BehaviorResult<Self> {
        weights.validate()?;
        Ok(Self { weights })
    }

    pub fn weights(&self) -> &ScoreWeights {
        &self.weights
    }

    /// Run the four adjustments for fixed mode aggregates.
    pub fn score(
        transit:              &TripAggregate,
        pfh:                  &TripAggregate,
        time_budget:          f64,
        money_budget:         f64,
        inconvenience_weight: f64,
    ) -> Confidence {
        let mut confidence = Confidence::RESET;
        confidence.adjust_for_score(transit.score, pfh.score);
        confidence.adjust_for_budget(transit.time, pfh.time, time_budget);
        confidence.adjust_for_budget(transit.cost, pfh.cost, money_budget);
        confidence.adjust_for_inconvenience(
            inconvenience_weight,
            transit.inconvenience,
            pfh.inconvenience,
        );
        confidence
    }
}

impl ModeChoiceModel for ConfidenceModel {
    fn decide(
        &self,
        agent: AgentId,
        trip:  Trip,
        ctx:   &TripContext<'_>,
        rng:   &mut AgentRng,
    ) -> TripDecision {
        let i = agent.index();
        let agents = ctx.agents;

        let inputs = TripInputs {
            distance:        trip.distance(),
            rush_hour:       ctx.step.is_rush_hour(),
            in_tax_zone:     trip.in_tax_zone,
            day_pass_active: agents.day_pass_active[i],
            tax_rate:        ctx.tax_rate,
        };

        let transit_cost = cost::evaluate(TravelMode::Transit, &inputs, rng);
        let pfh_cost = cost::evaluate(TravelMode::Pfh, &inputs, rng);
        let transit = TripAggregate::new(&transit_cost, &self.weights);
        let pfh = TripAggregate::new(&pfh_cost, &self.weights);

        let confidence = Self::score(
            &transit,
            &pfh,
            agents.time_budget[i],
            agents.money_budget[i],
            agents.inconvenience_weight[i],
        );

        TripDecision {
            trip,
            transit,
            pfh,
            confidence,
            choice: confidence.choice(),
            day_pass_triggered: transit_cost.triggers_day_pass,
        }
    }

    fn score_weights(&self) -> Option<ScoreWeights> {
        Some(self.weights)
    }
}
