//! `tax_sweep` — modal split of the commuter model across PFH tax rates.
//!
//! For every tax rate, runs `cycles` independent worlds of `steps` trips
//! each, writes `modal_share.csv` and `agent_budgets.csv` under
//! `<output>/tax_<rate>/`, and prints one summary line per rate.
//!
//! Run with:
//!   cargo run -p tax_sweep --release -- 0 2 4
//!   cargo run -p tax_sweep --release -- --config sweep.toml
//!
//! Log verbosity follows `RUST_LOG` (default `info`).

mod settings;

use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use ms_core::WorldConfig;
use ms_output::{CsvWriter, CycleSummary, OutputObserver, SweepSummary};
use ms_sim::World;

use settings::{Args, Sweep};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let sweep = Sweep::from_args(Args::parse())?;

    println!("=== tax_sweep — commuter mode choice ===");
    println!(
        "Agents: {}  |  Grid: {}×{}  |  Cycles: {}  |  Steps: {}  |  Seed: {}",
        sweep.population, sweep.width, sweep.height, sweep.cycles, sweep.steps, sweep.seed,
    );
    println!();

    let started = Instant::now();
    let mut summaries = Vec::with_capacity(sweep.tax_rates.len());
    for &tax_rate in &sweep.tax_rates {
        summaries.push(run_tax_rate(&sweep, tax_rate)?);
    }

    println!();
    for summary in &summaries {
        println!("{summary}");
    }
    println!();
    println!("Done in {:.2} s; output in {}", started.elapsed().as_secs_f64(), sweep.output.display());
    Ok(())
}

/// Run every cycle at `tax_rate`, writing CSV output as it goes.
fn run_tax_rate(sweep: &Sweep, tax_rate: f64) -> Result<SweepSummary> {
    let dir = sweep.output.join(format!("tax_{tax_rate}"));
    let writer = CsvWriter::new(&dir).with_context(|| format!("creating {}", dir.display()))?;
    let mut obs = OutputObserver::new(writer, tax_rate, 0);
    if !sweep.budgets {
        obs = obs.without_budgets();
    }

    let mut summary = SweepSummary::new(tax_rate);
    for cycle in 0..sweep.cycles {
        let config = WorldConfig::new(
            sweep.population,
            sweep.width,
            sweep.height,
            tax_rate,
            sweep.cycle_seed(cycle),
        );
        let mut world = World::new(config)?;

        obs.set_run(tax_rate, cycle);
        world.run(sweep.steps, &mut obs);
        if let Some(e) = obs.take_error() {
            return Err(e).with_context(|| format!("writing output to {}", dir.display()));
        }

        summary.cycles.extend(CycleSummary::from_aggregator(cycle, world.aggregator()));
    }

    info!(
        tax_rate,
        transit = summary.mean_transit(),
        pfh     = summary.mean_pfh(),
        "tax rate finished"
    );
    Ok(summary)
}
