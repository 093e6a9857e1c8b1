//! The `OutputWriter` trait implemented by output backends.

use crate::{AgentBudgetRow, ModalShareRow, OutputResult};

/// Sink for per-step simulation results.
///
/// All methods are infallible from the observer's perspective; errors are
/// stored and retrieved with [`OutputObserver::take_error`][crate::OutputObserver::take_error].
pub trait OutputWriter {
    /// Write one modal share row.
    fn write_modal_share(&mut self, row: &ModalShareRow) -> OutputResult<()>;

    /// Write a batch of agent budget rows.
    fn write_budgets(&mut self, rows: &[AgentBudgetRow]) -> OutputResult<()>;

    /// Flush buffered rows to the underlying files.
    ///
    /// Called at the end of every run.  Safe to call more than once; writing
    /// may continue afterwards.
    fn finish(&mut self) -> OutputResult<()>;
}
