//! Plain data row types written by output backends.

use ms_core::TravelMode;

/// Modal share of one step of one cycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModalShareRow {
    pub tax_rate: f64,
    pub cycle:    u32,
    pub step:     u64,
    /// Percent of agents that rode transit.
    pub transit:  f64,
    /// Percent of agents that rode PFH.
    pub pfh:      f64,
}

/// One agent's remaining budgets after a step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AgentBudgetRow {
    pub tax_rate:        f64,
    pub cycle:           u32,
    pub step:            u64,
    pub agent_id:        u32,
    pub time_remaining:  f64,
    pub money_remaining: f64,
    pub last_choice:     Option<TravelMode>,
}
