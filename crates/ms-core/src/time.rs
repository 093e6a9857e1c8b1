//! Simulation time model.
//!
//! # Design
//!
//! Time is a monotonically increasing `Step` counter.  One step is one trip
//! opportunity for every agent; [`TRIPS_PER_DAY`] steps make one simulated
//! day.  The counter is advanced *before* agents act, so the first
//! trip happens on step 1.
//!
//! Odd steps are rush-hour steps, which lengthen access delays for both
//! modes.

use std::fmt;

/// Trips per simulated day.
pub const TRIPS_PER_DAY: u64 = 4;

// ── Step ──────────────────────────────────────────────────────────────────────

/// An absolute simulation step counter.  `Step::ZERO` is the pre-simulation
/// state in which no agent has travelled.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Step(pub u64);

impl Step {
    pub const ZERO: Step = Step(0);

    /// Odd steps are rush hour.
    #[inline]
    pub fn is_rush_hour(self) -> bool {
        self.0 % 2 == 1
    }
}

impl std::ops::Add<u64> for Step {
    type Output = Step;
    #[inline]
    fn add(self, rhs: u64) -> Step {
        Step(self.0 + rhs)
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "S{}", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// Tracks the current step.  Cheap to copy; holds no heap data.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    /// The most recently started step.  `Step::ZERO` until the first advance.
    pub current_step: Step,
}

impl SimClock {
    pub fn new() -> Self {
        Self { current_step: Step::ZERO }
    }

    /// Advance the clock by one step and return the new step.
    #[inline]
    pub fn advance(&mut self) -> Step {
        self.current_step = self.current_step + 1;
        self.current_step
    }

    /// Simulated day (0-based) of the current step, given `steps_per_day`.
    ///
    /// Step 0 belongs to day 0; steps `1..=steps_per_day` are day 0 too.
    pub fn day(&self, steps_per_day: u64) -> u64 {
        if steps_per_day == 0 {
            return 0;
        }
        self.current_step.0.saturating_sub(1) / steps_per_day
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rush = if self.current_step.is_rush_hour() { " rush" } else { "" };
        write!(f, "{}{}", self.current_step, rush)
    }
}
