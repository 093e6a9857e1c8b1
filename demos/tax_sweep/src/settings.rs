//! Sweep settings: built-in defaults, an optional TOML run file, then CLI
//! flags, each layer overriding the one before.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use ms_core::{TRIPS_PER_DAY, parse_tax_rate};
use serde::Deserialize;

// ── Defaults ──────────────────────────────────────────────────────────────────

const DEFAULT_POPULATION: usize = 100;
const DEFAULT_WIDTH:      u32   = 60;
const DEFAULT_HEIGHT:     u32   = 48;
/// Independent worlds per tax rate.
const DEFAULT_CYCLES:     u32   = 7;
/// One simulated day.
const DEFAULT_STEPS:      u64   = TRIPS_PER_DAY;
const DEFAULT_SEED:       u64   = 1;
const DEFAULT_OUTPUT:     &str  = "output";

// ── CLI ───────────────────────────────────────────────────────────────────────

/// Run the commuter model once per tax rate and summarize the modal split.
#[derive(Parser, Debug, Default)]
#[command(name = "tax_sweep")]
pub struct Args {
    /// Tax rates to simulate, e.g. `0 1.5 3`.  Defaults to a single untaxed run.
    pub tax_rates: Vec<String>,

    /// TOML run file; flags given on the command line override it.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Number of commuters per world.
    #[arg(long)]
    pub population: Option<usize>,

    /// Grid width in cells.
    #[arg(long)]
    pub width: Option<u32>,

    /// Grid height in cells.
    #[arg(long)]
    pub height: Option<u32>,

    /// Independent worlds per tax rate.
    #[arg(long)]
    pub cycles: Option<u32>,

    /// Steps (trips) per world.
    #[arg(long)]
    pub steps: Option<u64>,

    /// Seed of the first cycle; cycle `c` uses `seed + c`.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Directory receiving one `tax_<rate>/` folder of CSV files per tax rate.
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Skip the per-agent budget CSV.
    #[arg(long)]
    pub no_budgets: bool,
}

// ── Run file ──────────────────────────────────────────────────────────────────

/// Contents of a TOML run file.  Every key is optional.
///
/// ```toml
/// population = 583776
/// cycles     = 7
/// tax_rates  = [0.0, 2.0, 4.0]
/// ```
#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct RunFile {
    pub population: Option<usize>,
    pub width:      Option<u32>,
    pub height:     Option<u32>,
    pub cycles:     Option<u32>,
    pub steps:      Option<u64>,
    pub seed:       Option<u64>,
    pub tax_rates:  Option<Vec<f64>>,
    pub output:     Option<PathBuf>,
    pub budgets:    Option<bool>,
}

impl RunFile {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading run file {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("parsing run file {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

// ── Resolved settings ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub struct Sweep {
    pub population: usize,
    pub width:      u32,
    pub height:     u32,
    pub cycles:     u32,
    pub steps:      u64,
    pub seed:       u64,
    pub tax_rates:  Vec<f64>,
    pub output:     PathBuf,
    pub budgets:    bool,
}

impl Sweep {
    /// Load the run file named by `args` (if any) and merge.
    pub fn from_args(args: Args) -> Result<Self> {
        let file = match &args.config {
            Some(path) => RunFile::load(path)?,
            None       => RunFile::default(),
        };
        Self::merge(file, args)
    }

    /// Layer `args` over `file` over the defaults.
    pub fn merge(file: RunFile, args: Args) -> Result<Self> {
        let tax_rates = if args.tax_rates.is_empty() {
            file.tax_rates.unwrap_or_else(|| vec![0.0])
        } else {
            args.tax_rates
                .iter()
                .map(|t| parse_tax_rate(t).with_context(|| format!("tax rate {t:?}")))
                .collect::<Result<_>>()?
        };

        Ok(Self {
            population: args.population.or(file.population).unwrap_or(DEFAULT_POPULATION),
            width:      args.width.or(file.width).unwrap_or(DEFAULT_WIDTH),
            height:     args.height.or(file.height).unwrap_or(DEFAULT_HEIGHT),
            cycles:     args.cycles.or(file.cycles).unwrap_or(DEFAULT_CYCLES),
            steps:      args.steps.or(file.steps).unwrap_or(DEFAULT_STEPS),
            seed:       args.seed.or(file.seed).unwrap_or(DEFAULT_SEED),
            tax_rates,
            output:     args.output.or(file.output).unwrap_or_else(|| DEFAULT_OUTPUT.into()),
            budgets:    !args.no_budgets && file.budgets.unwrap_or(true),
        })
    }

    /// Seed of cycle `cycle`.
    pub fn cycle_seed(&self, cycle: u32) -> u64 {
        self.seed.wrapping_add(u64::from(cycle))
    }
}
