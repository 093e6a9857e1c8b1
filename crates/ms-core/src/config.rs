//! World configuration and validation.
//!
//! Typically built from CLI flags or a TOML run file by the application
//! crate and passed to the world builder in `ms-sim`.

use crate::{CoreError, CoreResult, Grid};

// ── ScoreWeights ──────────────────────────────────────────────────────────────

/// Weights of the combined trip score `minutes * time + dollars * cost`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoreWeights {
    /// Weight per minute of travel time.  Default: 0.1.
    pub time: f64,
    /// Weight per dollar of fare.  Default: 1.0.
    pub cost: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self { time: 0.1, cost: 1.0 }
    }
}

impl ScoreWeights {
    /// Combined weighted score of a trip.  Lower is cheaper.
    #[inline]
    pub fn score(&self, time: f64, cost: f64) -> f64 {
        time * self.time + cost * self.cost
    }

    pub fn validate(&self) -> CoreResult<()> {
        for (name, w) in [("time", self.time), ("cost", self.cost)] {
            if !w.is_finite() || w < 0.0 {
                return Err(CoreError::Config(format!(
                    "{name} weight must be a non-negative number, got {w}"
                )));
            }
        }
        Ok(())
    }
}

// ── WorldConfig ───────────────────────────────────────────────────────────────

/// Everything needed to construct a world.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorldConfig {
    /// Number of agents.  Fixed for the lifetime of the world.
    pub population: usize,

    /// Grid width in cells.
    pub width: u32,

    /// Grid height in cells.
    pub height: u32,

    /// Per-trip tax added to the PFH fare rate for tax-applicable trips.
    pub tax_rate: f64,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Combined score weights.
    #[cfg_attr(feature = "serde", serde(default))]
    pub weights: ScoreWeights,
}

impl WorldConfig {
    /// Config with default score weights.
    pub fn new(population: usize, width: u32, height: u32, tax_rate: f64, seed: u64) -> Self {
        Self {
            population,
            width,
            height,
            tax_rate,
            seed,
            weights: ScoreWeights::default(),
        }
    }

    /// Check every field and return the validated grid.
    ///
    /// Called before any agent is allocated.
    pub fn validate(&self) -> CoreResult<Grid> {
        if self.population == 0 {
            return Err(CoreError::Config("population must be positive".into()));
        }
        if u32::try_from(self.population).is_err() {
            return Err(CoreError::Config(format!(
                "population {} exceeds the maximum of {}",
                self.population,
                u32::MAX
            )));
        }
        validate_tax_rate(self.tax_rate)?;
        self.weights.validate()?;
        Grid::new(self.width, self.height)
    }
}

// ── Tax rate ──────────────────────────────────────────────────────────────────

fn validate_tax_rate(tax_rate: f64) -> CoreResult<f64> {
    if !tax_rate.is_finite() || tax_rate < 0.0 {
        return Err(CoreError::Config(format!(
            "tax rate must be a non-negative number, got {tax_rate}"
        )));
    }
    Ok(tax_rate)
}

/// Parse a tax rate given as text (CLI argument, run file entry).
///
/// Unparseable text is a [`CoreError::Parse`]; a negative or non-finite
/// value is a [`CoreError::Config`].
pub fn parse_tax_rate(text: &str) -> CoreResult<f64> {
    let value: f64 = text
        .trim()
        .parse()
        .map_err(|e| CoreError::Parse(format!("tax rate {text:?}: {e}")))?;
    validate_tax_rate(value)
}
