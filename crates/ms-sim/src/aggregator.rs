//! Per-step modal share and budget collection.

use ms_agent::AgentStore;
use ms_core::{Step, TravelMode};

/// Percentage of the population that chose each mode in one step.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ModalShare {
    pub step:            Step,
    pub transit_percent: f64,
    pub pfh_percent:     f64,
}

impl ModalShare {
    /// Share of each mode among `agents`' most recent choices.
    ///
    /// Agents that have not travelled count towards neither mode, so before
    /// the first step both percentages are 0.
    pub fn from_store(step: Step, agents: &AgentStore) -> Self {
        let percent = |mode| {
            if agents.is_empty() {
                0.0
            } else {
                agents.count_choice(mode) as f64 / agents.count as f64 * 100.0
            }
        };
        Self {
            step,
            transit_percent: percent(TravelMode::Transit),
            pfh_percent:     percent(TravelMode::Pfh),
        }
    }
}

/// Remaining time and money of every agent at one step, indexed by agent id.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BudgetSnapshot {
    pub step:  Step,
    pub time:  Vec<f64>,
    pub money: Vec<f64>,
}

impl BudgetSnapshot {
    pub fn from_store(step: Step, agents: &AgentStore) -> Self {
        Self {
            step,
            time:  agents.time_budget.clone(),
            money: agents.money_budget.clone(),
        }
    }

    pub fn mean_time(&self) -> f64 {
        mean(&self.time)
    }

    pub fn mean_money(&self) -> f64 {
        mean(&self.money)
    }
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Collects one [`ModalShare`] and one [`BudgetSnapshot`] per step.
///
/// A pre-simulation budget snapshot (step 0) is taken at construction, so
/// `budget_snapshots().len() == history().len() + 1`.
#[derive(Clone, Debug, Default)]
pub struct Aggregator {
    shares:  Vec<ModalShare>,
    budgets: Vec<BudgetSnapshot>,
}

impl Aggregator {
    /// Start a series with the pre-simulation budget snapshot.
    pub fn new(agents: &AgentStore) -> Self {
        Self {
            shares:  Vec::new(),
            budgets: vec![BudgetSnapshot::from_store(Step::ZERO, agents)],
        }
    }

    /// Record the state after `step`.  Must only be called once every agent
    /// has finished the step.
    pub fn collect(&mut self, step: Step, agents: &AgentStore) -> ModalShare {
        let share = ModalShare::from_store(step, agents);
        self.shares.push(share);
        self.budgets.push(BudgetSnapshot::from_store(step, agents));
        share
    }

    /// One entry per completed step, in step order.
    pub fn history(&self) -> &[ModalShare] {
        &self.shares
    }

    /// Budget snapshots, starting with the pre-simulation one.
    pub fn budget_snapshots(&self) -> &[BudgetSnapshot] {
        &self.budgets
    }

    /// Mean transit and PFH share over the history, ignoring the first
    /// `skip` steps.  `None` if nothing is left to average.
    pub fn mean_share(&self, skip: usize) -> Option<(f64, f64)> {
        let tail = self.shares.get(skip..).filter(|s| !s.is_empty())?;
        let n = tail.len() as f64;
        let transit = tail.iter().map(|s| s.transit_percent).sum::<f64>() / n;
        let pfh = tail.iter().map(|s| s.pfh_percent).sum::<f64>() / n;
        Some((transit, pfh))
    }

    /// Mean transit and PFH share over the last `steps` steps only.
    pub fn mean_recent_share(&self, steps: usize) -> Option<(f64, f64)> {
        self.mean_share(self.shares.len().saturating_sub(steps))
    }

    /// Mean remaining time and money across every agent of every snapshot,
    /// optionally leaving out the pre-simulation snapshot.
    pub fn mean_budgets(&self, skip_initial: bool) -> Option<(f64, f64)> {
        let skip = usize::from(skip_initial);
        let tail = self.budgets.get(skip..).filter(|s| !s.is_empty())?;
        let n = tail.len() as f64;
        let time = tail.iter().map(BudgetSnapshot::mean_time).sum::<f64>() / n;
        let money = tail.iter().map(BudgetSnapshot::mean_money).sum::<f64>() / n;
        Some((time, money))
    }
}
