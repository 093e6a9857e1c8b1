//! `ms-output` — result writers and summaries for the modeshift simulator.
//!
//! | Item               | Purpose                                               |
//! |--------------------|-------------------------------------------------------|
//! | [`CsvWriter`]      | `modal_share.csv`, `agent_budgets.csv`                |
//! | [`OutputObserver`] | Drives any [`OutputWriter`] from `ms_sim::World::run` |
//! | [`SweepSummary`]   | Cross-cycle means per tax rate                        |
//!
//! # Usage
//!
//! ```rust,ignore
//! use ms_output::{CsvWriter, CycleSummary, OutputObserver, SweepSummary};
//!
//! let writer = CsvWriter::new(Path::new("./output/tax_2"))?;
//! let mut obs = OutputObserver::new(writer, 2.0, 0);
//! world.run(4, &mut obs);
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//!
//! let mut summary = SweepSummary::new(2.0);
//! summary.cycles.extend(CycleSummary::from_aggregator(0, world.aggregator()));
//! println!("{summary}");
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod summary;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::OutputObserver;
pub use row::{AgentBudgetRow, ModalShareRow};
pub use summary::{CycleSummary, SweepSummary};
pub use writer::OutputWriter;
