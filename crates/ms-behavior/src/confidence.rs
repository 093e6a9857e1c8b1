//! Per-trip confidence accumulators.
//!
//! Confidences start every trip at 1.0 and only ever have amounts subtracted
//! (or are halved).  They are not probabilities: nothing normalizes or clamps
//! them, they can go far below zero, and the only thing read from them is
//! which one is larger.

use ms_core::TravelMode;

/// Inconvenience values below this are raised to it before dividing.
pub const MIN_INCONVENIENCE: f64 = 1.0;

/// Scores are compared in units of ten.
const SCORE_DIVISOR: f64 = 10.0;

/// Transit and PFH confidence for one trip evaluation.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Confidence {
    pub transit: f64,
    pub pfh:     f64,
}

impl Default for Confidence {
    fn default() -> Self {
        Self::RESET
    }
}

impl Confidence {
    /// State at the start of every trip.
    pub const RESET: Confidence = Confidence { transit: 1.0, pfh: 1.0 };

    /// Dock one mode by a tenth of the score gap.
    ///
    /// The mode with the *lower* (cheaper) score is the one docked; ties dock
    /// PFH.
    pub fn adjust_for_score(&mut self, transit_score: f64, pfh_score: f64) {
        let diff = (transit_score - pfh_score).abs() / SCORE_DIVISOR;
        if transit_score <= pfh_score {
            self.pfh -= diff;
        } else {
            self.transit -= diff;
        }
    }

    /// Penalize each mode by how much of `budget` it would consume.
    ///
    /// A mode needing at least the whole budget is halved first.  Both modes
    /// then lose `need / budget`.  Used for both the time and money budgets;
    /// a negative budget is valid and simply flips the sign of the ratio.
    pub fn adjust_for_budget(&mut self, transit_need: f64, pfh_need: f64, budget: f64) {
        if transit_need >= budget {
            self.transit -= self.transit / 2.0;
        }
        if pfh_need >= budget {
            self.pfh -= self.pfh / 2.0;
        }
        self.transit -= transit_need / budget;
        self.pfh -= pfh_need / budget;
    }

    /// Subtract `weight / inconvenience` from each mode, flooring each
    /// inconvenience at [`MIN_INCONVENIENCE`].
    pub fn adjust_for_inconvenience(&mut self, weight: f64, transit_incon: f64, pfh_incon: f64) {
        self.transit -= weight / transit_incon.max(MIN_INCONVENIENCE);
        self.pfh -= weight / pfh_incon.max(MIN_INCONVENIENCE);
    }

    /// Transit if its confidence is at least PFH's, otherwise PFH.
    #[inline]
    pub fn choice(&self) -> TravelMode {
        if self.transit >= self.pfh {
            TravelMode::Transit
        } else {
            TravelMode::Pfh
        }
    }
}
