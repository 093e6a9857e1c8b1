//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `modal_share.csv`
//! - `agent_budgets.csv`

use std::fs::{self, File};
use std::path::Path;

use csv::Writer;
use ms_core::TravelMode;

use crate::writer::OutputWriter;
use crate::{AgentBudgetRow, ModalShareRow, OutputResult};

pub const MODAL_SHARE_FILE: &str = "modal_share.csv";
pub const AGENT_BUDGETS_FILE: &str = "agent_budgets.csv";

/// Writes simulation output to two CSV files.
pub struct CsvWriter {
    shares:  Writer<File>,
    budgets: Writer<File>,
}

impl CsvWriter {
    /// Create `dir` if needed, open (or truncate) the two CSV files and write
    /// the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        fs::create_dir_all(dir)?;

        let mut shares = Writer::from_path(dir.join(MODAL_SHARE_FILE))?;
        shares.write_record(["tax_rate", "cycle", "step", "transit", "pfh"])?;

        let mut budgets = Writer::from_path(dir.join(AGENT_BUDGETS_FILE))?;
        budgets.write_record([
            "tax_rate",
            "cycle",
            "step",
            "agent_id",
            "time_remaining",
            "money_remaining",
            "last_choice",
        ])?;

        Ok(Self { shares, budgets })
    }
}

impl OutputWriter for CsvWriter {
    fn write_modal_share(&mut self, row: &ModalShareRow) -> OutputResult<()> {
        self.shares.write_record(&[
            row.tax_rate.to_string(),
            row.cycle.to_string(),
            row.step.to_string(),
            row.transit.to_string(),
            row.pfh.to_string(),
        ])?;
        Ok(())
    }

    fn write_budgets(&mut self, rows: &[AgentBudgetRow]) -> OutputResult<()> {
        for row in rows {
            self.budgets.write_record(&[
                row.tax_rate.to_string(),
                row.cycle.to_string(),
                row.step.to_string(),
                row.agent_id.to_string(),
                row.time_remaining.to_string(),
                row.money_remaining.to_string(),
                TravelMode::label(row.last_choice).to_owned(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        self.shares.flush()?;
        self.budgets.flush()?;
        Ok(())
    }
}
