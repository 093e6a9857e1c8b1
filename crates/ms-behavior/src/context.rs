//! Read-only world state passed to every mode-choice callback.

use ms_agent::AgentStore;
use ms_core::Step;

/// A read-only snapshot of world state for one step's decision phase.
///
/// Built once per step by ms-sim and shared immutably across all agent
/// decisions.  Nothing borrowed here is mutated until the decision phase ends.
pub struct TripContext<'a> {
    /// Current step.  Odd steps are rush hour.
    pub step: Step,

    /// Tax added to the PFH fare rate on taxed trips.
    pub tax_rate: f64,

    /// Read-only view of every agent's SoA state arrays.
    pub agents: &'a AgentStore,
}

impl<'a> TripContext<'a> {
    #[inline]
    pub fn new(step: Step, tax_rate: f64, agents: &'a AgentStore) -> Self {
        Self { step, tax_rate, agents }
    }
}
