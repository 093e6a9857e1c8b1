//! Trip requests and the decisions produced for them.

use ms_core::{AgentRng, Cell, Grid, TravelMode};

use crate::{Confidence, TaxZone, TripAggregate};

/// One trip opportunity: where the agent is, where it is going, and whether
/// the trip is taxed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Trip {
    pub origin:      Cell,
    pub destination: Cell,
    pub in_tax_zone: bool,
}

impl Trip {
    /// Build a trip and evaluate the tax rule for it.
    pub fn new(origin: Cell, destination: Cell, zone: &TaxZone) -> Self {
        Self {
            origin,
            destination,
            in_tax_zone: zone.applies(origin, destination),
        }
    }

    /// Draw a uniformly random destination distinct from `origin`.
    pub fn draw(origin: Cell, grid: &Grid, zone: &TaxZone, rng: &mut AgentRng) -> Self {
        Self::new(origin, grid.random_destination(origin, rng), zone)
    }

    /// Straight-line distance in miles.
    #[inline]
    pub fn distance(&self) -> f64 {
        self.origin.distance_miles(self.destination)
    }
}

/// Everything an agent decided about one trip.
///
/// Produced in the (read-only, possibly parallel) decision phase and applied
/// to the agent store afterwards.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TripDecision {
    pub trip:       Trip,
    pub transit:    TripAggregate,
    pub pfh:        TripAggregate,
    /// Final confidences after every adjustment.
    pub confidence: Confidence,
    pub choice:     TravelMode,
    /// The transit evaluation charged the day-pass fare.  The pass is granted
    /// whichever mode is chosen.
    pub day_pass_triggered: bool,
}

impl TripDecision {
    /// The aggregate of the chosen mode.
    pub fn chosen(&self) -> &TripAggregate {
        match self.choice {
            TravelMode::Transit => &self.transit,
            TravelMode::Pfh     => &self.pfh,
        }
    }
}
