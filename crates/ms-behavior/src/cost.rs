//! Per-trip cost model.
//!
//! Every trip is evaluated under both modes.  Each evaluation yields travel
//! time (minutes), fare (dollars) and inconvenience (access minutes plus, for
//! transit, the number of transfers).  The only randomness is the access
//! delay, drawn from the agent's own stream; everything after the draw is a
//! pure function of its inputs so it can be tested with fixed delays.

use std::ops::RangeInclusive;

use ms_core::{AgentRng, ScoreWeights, TravelMode};

/// Access delay ranges (whole minutes, inclusive).
pub const TRANSIT_ACCESS_RUSH: RangeInclusive<u32> = 14..=28;
pub const TRANSIT_ACCESS_OFF_PEAK: RangeInclusive<u32> = 7..=21;
pub const PFH_ACCESS_RUSH: RangeInclusive<u32> = 6..=12;
pub const PFH_ACCESS_OFF_PEAK: RangeInclusive<u32> = 3..=9;

/// Transit runs at one mile per 15 minutes.
const TRANSIT_MINUTES_PER_MILE: f64 = 15.0;
/// Every 45 minutes on transit costs one transfer.
const TRANSFER_INTERVAL_MINUTES: f64 = 45.0;
/// Minutes added per transfer interval.
const TRANSFER_PENALTY_MINUTES: f64 = 6.0;
/// PFH average speed, mph.
const PFH_SPEED_MPH: f64 = 23.0;

/// Transit trips up to this many minutes pay the base fare.
pub const TRANSIT_BASE_FARE_LIMIT: f64 = 150.0;
pub const TRANSIT_BASE_FARE: f64 = 2.5;
/// Paying this fare buys a day pass for the rest of the run.
pub const TRANSIT_DAY_PASS_FARE: f64 = 5.0;

const PFH_BASE_FARE: f64 = 1.25;
const PFH_PER_MINUTE: f64 = 0.32;
const PFH_PER_MILE: f64 = 0.94;
const PFH_BOOKING_FEE: f64 = 2.30;
const PFH_TIP_INCREMENT: f64 = 0.15;
pub const PFH_MIN_FARE: f64 = 5.0;
pub const PFH_MAX_FARE: f64 = 400.0;

// ── Types ─────────────────────────────────────────────────────────────────────

/// Raw cost of one trip under one mode.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TripCost {
    /// Door-to-door minutes.
    pub time: f64,
    /// Dollars.
    pub cost: f64,
    /// Access minutes plus transfer count.  Not floored here; see
    /// [`crate::Confidence::adjust_for_inconvenience`].
    pub inconvenience: f64,
    /// `true` if this evaluation charged the day-pass fare.  Always `false`
    /// for PFH.
    pub triggers_day_pass: bool,
}

/// A trip cost together with its combined weighted score.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TripAggregate {
    pub score:         f64,
    pub time:          f64,
    pub cost:          f64,
    pub inconvenience: f64,
}

impl TripAggregate {
    pub fn new(cost: &TripCost, weights: &ScoreWeights) -> Self {
        Self {
            score:         weights.score(cost.time, cost.cost),
            time:          cost.time,
            cost:          cost.cost,
            inconvenience: cost.inconvenience,
        }
    }
}

/// Everything about a trip that the cost model reads, apart from the mode.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TripInputs {
    /// Straight-line distance in miles.
    pub distance:        f64,
    pub rush_hour:       bool,
    pub in_tax_zone:     bool,
    pub day_pass_active: bool,
    pub tax_rate:        f64,
}

// ── Access delay ──────────────────────────────────────────────────────────────

/// Inclusive access-delay range for `mode`.
pub fn access_range(mode: TravelMode, rush_hour: bool) -> RangeInclusive<u32> {
    match (mode, rush_hour) {
        (TravelMode::Transit, true)  => TRANSIT_ACCESS_RUSH,
        (TravelMode::Transit, false) => TRANSIT_ACCESS_OFF_PEAK,
        (TravelMode::Pfh, true)      => PFH_ACCESS_RUSH,
        (TravelMode::Pfh, false)     => PFH_ACCESS_OFF_PEAK,
    }
}

/// Draw a whole-minute access delay for `mode`.
pub fn draw_access_delay(mode: TravelMode, rush_hour: bool, rng: &mut AgentRng) -> f64 {
    rng.gen_range(access_range(mode, rush_hour)) as f64
}

// ── Time ──────────────────────────────────────────────────────────────────────

/// Transit minutes, inflated by six minutes per 45 minutes for transfers.
pub fn transit_time(distance: f64, access: f64) -> f64 {
    let time = distance * TRANSIT_MINUTES_PER_MILE + access;
    time + (time / TRANSFER_INTERVAL_MINUTES) * TRANSFER_PENALTY_MINUTES
}

pub fn pfh_time(distance: f64, access: f64) -> f64 {
    (distance / PFH_SPEED_MPH) * 60.0 + access
}

// ── Fare ──────────────────────────────────────────────────────────────────────

/// Transit fare and whether it triggers the day pass.
pub fn transit_fare(time: f64, day_pass_active: bool) -> (f64, bool) {
    if day_pass_active {
        (0.0, false)
    } else if time <= TRANSIT_BASE_FARE_LIMIT {
        (TRANSIT_BASE_FARE, false)
    } else {
        (TRANSIT_DAY_PASS_FARE, true)
    }
}

/// PFH fare plus tip, clamped to `[PFH_MIN_FARE, PFH_MAX_FARE]`.
///
/// The tip is the fare rate plus a fixed increment, so the total is
/// `2 * rate + 0.15`.
pub fn pfh_fare(time: f64, distance: f64, taxed: bool, tax_rate: f64) -> f64 {
    let mut rate = PFH_BASE_FARE + PFH_PER_MINUTE * time + PFH_PER_MILE * distance + PFH_BOOKING_FEE;
    if taxed {
        rate += tax_rate;
    }
    let tip = rate + PFH_TIP_INCREMENT;
    (rate + tip).clamp(PFH_MIN_FARE, PFH_MAX_FARE)
}

// ── Evaluation ────────────────────────────────────────────────────────────────

/// Cost of `trip` under `mode` with a known access delay.
pub fn evaluate_with_access(mode: TravelMode, trip: &TripInputs, access: f64) -> TripCost {
    match mode {
        TravelMode::Transit => {
            let time = transit_time(trip.distance, access);
            let (cost, triggers_day_pass) = transit_fare(time, trip.day_pass_active);
            TripCost {
                time,
                cost,
                inconvenience: access + (time / TRANSFER_INTERVAL_MINUTES).floor(),
                triggers_day_pass,
            }
        }
        TravelMode::Pfh => {
            let time = pfh_time(trip.distance, access);
            TripCost {
                time,
                cost: pfh_fare(time, trip.distance, trip.in_tax_zone, trip.tax_rate),
                inconvenience: access,
                triggers_day_pass: false,
            }
        }
    }
}

/// Draw an access delay and evaluate `trip` under `mode`.
pub fn evaluate(mode: TravelMode, trip: &TripInputs, rng: &mut AgentRng) -> TripCost {
    let access = draw_access_delay(mode, trip.rush_hour, rng);
    evaluate_with_access(mode, trip, access)
}
