//! Per-cycle and per-tax-rate result summaries.

use std::fmt;

use ms_sim::Aggregator;

/// Means of one finished run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CycleSummary {
    pub cycle:   u32,
    /// Mean transit share in percent, first step excluded.
    pub transit: f64,
    /// Mean PFH share in percent, first step excluded.
    pub pfh:     f64,
    /// Mean remaining time in minutes, initial snapshot excluded.
    pub time:    f64,
    /// Mean remaining money in dollars, initial snapshot excluded.
    pub money:   f64,
}

impl CycleSummary {
    /// Summarize a finished run.  The first step is left out of the share
    /// means unless it is the only one.  `None` if no step was run.
    pub fn from_aggregator(cycle: u32, aggregator: &Aggregator) -> Option<Self> {
        let (transit, pfh) = aggregator
            .mean_share(1)
            .or_else(|| aggregator.mean_share(0))?;
        let (time, money) = aggregator.mean_budgets(true)?;
        Some(Self { cycle, transit, pfh, time, money })
    }
}

/// All cycles run at one tax rate.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepSummary {
    pub tax_rate: f64,
    pub cycles:   Vec<CycleSummary>,
}

impl SweepSummary {
    pub fn new(tax_rate: f64) -> Self {
        Self { tax_rate, cycles: Vec::new() }
    }

    pub fn push(&mut self, cycle: CycleSummary) {
        self.cycles.push(cycle);
    }

    pub fn mean_transit(&self) -> f64 {
        self.mean_of(|c| c.transit)
    }

    pub fn mean_pfh(&self) -> f64 {
        self.mean_of(|c| c.pfh)
    }

    pub fn mean_time(&self) -> f64 {
        self.mean_of(|c| c.time)
    }

    pub fn mean_money(&self) -> f64 {
        self.mean_of(|c| c.money)
    }

    fn mean_of(&self, field: impl Fn(&CycleSummary) -> f64) -> f64 {
        if self.cycles.is_empty() {
            return 0.0;
        }
        self.cycles.iter().map(field).sum::<f64>() / self.cycles.len() as f64
    }
}

impl fmt::Display for SweepSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "tax {:>6.2} | transit {:>6.2}% | pfh {:>6.2}% | time {:>8.2} min | money {:>8.2} $",
            self.tax_rate,
            self.mean_transit(),
            self.mean_pfh(),
            self.mean_time(),
            self.mean_money(),
        )
    }
}
