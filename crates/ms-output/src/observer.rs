//! `OutputObserver<W>` — bridges `WorldObserver` to an `OutputWriter`.

use ms_agent::AgentStore;
use ms_core::Step;
use ms_sim::{ModalShare, WorldObserver};
use tracing::warn;

use crate::row::{AgentBudgetRow, ModalShareRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`WorldObserver`] that writes modal shares, and optionally every agent's
/// budgets, to any [`OutputWriter`] backend.
///
/// One observer can be reused for every cycle of a tax sweep: call
/// [`set_run`][Self::set_run] before each world's `run`.
///
/// Errors from the writer are stored internally because `WorldObserver`
/// methods have no return value.  After `world.run()` returns, check for
/// errors with [`take_error`][Self::take_error].
pub struct OutputObserver<W: OutputWriter> {
    writer:        W,
    tax_rate:      f64,
    cycle:         u32,
    write_budgets: bool,
    last_error:    Option<OutputError>,
}

impl<W: OutputWriter> OutputObserver<W> {
    /// Create an observer backed by `writer`, labelling rows with `tax_rate`
    /// and `cycle`.  Budget rows are written by default.
    pub fn new(writer: W, tax_rate: f64, cycle: u32) -> Self {
        Self {
            writer,
            tax_rate,
            cycle,
            write_budgets: true,
            last_error:    None,
        }
    }

    /// Skip the per-agent budget rows (one per agent per step).
    pub fn without_budgets(mut self) -> Self {
        self.write_budgets = false;
        self
    }

    /// Relabel subsequent rows for another run.
    pub fn set_run(&mut self, tax_rate: f64, cycle: u32) {
        self.tax_rate = tax_rate;
        self.cycle = cycle;
    }

    /// Take the stored write error (if any) after `world.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                warn!(error = %e, tax_rate = self.tax_rate, cycle = self.cycle, "output write failed");
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> WorldObserver for OutputObserver<W> {
    fn on_step_end(&mut self, step: Step, share: &ModalShare, agents: &AgentStore) {
        let row = ModalShareRow {
            tax_rate: self.tax_rate,
            cycle:    self.cycle,
            step:     step.0,
            transit:  share.transit_percent,
            pfh:      share.pfh_percent,
        };
        let result = self.writer.write_modal_share(&row);
        self.store_err(result);

        if !self.write_budgets || agents.is_empty() {
            return;
        }
        let rows: Vec<AgentBudgetRow> = (0..agents.count)
            .map(|i| AgentBudgetRow {
                tax_rate:        self.tax_rate,
                cycle:           self.cycle,
                step:            step.0,
                agent_id:        i as u32,
                time_remaining:  agents.time_budget[i],
                money_remaining: agents.money_budget[i],
                last_choice:     agents.last_choice[i],
            })
            .collect();
        let result = self.writer.write_budgets(&rows);
        self.store_err(result);
    }

    fn on_sim_end(&mut self, _final_step: Step) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
