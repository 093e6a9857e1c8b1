//! Unit tests for ms-behavior.

use ms_agent::{AgentStore, AgentStoreBuilder};
use ms_core::{AgentId, AgentRng, Cell, Grid, Step};

use crate::TripContext;

// ── Helpers ───────────────────────────────────────────────────────────────────

fn make_store(n: usize) -> AgentStore {
    let (store, _rngs) = AgentStoreBuilder::new(n, 0).build(&Grid::new(60, 48).unwrap());
    store
}

fn make_context(store: &AgentStore, step: u64, tax_rate: f64) -> TripContext<'_> {
    TripContext::new(Step(step), tax_rate, store)
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

// ── Cost model ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod cost_tests {
    use ms_core::TravelMode;

    use super::*;
    use crate::cost::*;

    fn inputs(distance: f64) -> TripInputs {
        TripInputs {
            distance,
            rush_hour:       false,
            in_tax_zone:     false,
            day_pass_active: false,
            tax_rate:        0.0,
        }
    }

    #[test]
    fn transit_time_adds_transfer_penalty() {
        // 7 minutes of access, no distance: 7 + 7/45 * 6
        assert!(approx(transit_time(0.0, 7.0), 7.0 + 7.0 / 45.0 * 6.0));
        // 3 miles: 45 + 7 = 52, then + 52/45 * 6
        assert!(approx(transit_time(3.0, 7.0), 52.0 + 52.0 / 45.0 * 6.0));
    }

    #[test]
    fn pfh_time_at_23_mph() {
        assert!(approx(pfh_time(23.0, 3.0), 63.0));
        assert!(approx(pfh_time(0.0, 9.0), 9.0));
    }

    #[test]
    fn transit_fare_tiers() {
        assert_eq!(transit_fare(150.0, false), (2.5, false));
        assert_eq!(transit_fare(150.5, false), (5.0, true));
        assert_eq!(transit_fare(500.0, true), (0.0, false));
        assert_eq!(transit_fare(10.0, true), (0.0, false));
    }

    #[test]
    fn pfh_fare_is_rate_plus_tip() {
        // rate = 1.25 + 0.32*10 + 0.94*1 + 2.30 = 7.69; total = 2*7.69 + 0.15
        assert!(approx(pfh_fare(10.0, 1.0, false, 0.0), 15.53));
        // tax lands in the rate, so it is counted twice
        assert!(approx(pfh_fare(10.0, 1.0, true, 5.0), 25.53));
        // untaxed trips ignore the rate entirely
        assert!(approx(pfh_fare(10.0, 1.0, false, 5.0), 15.53));
    }

    #[test]
    fn pfh_fare_clamps_at_ceiling() {
        assert_eq!(pfh_fare(1_000.0, 50.0, false, 0.0), PFH_MAX_FARE);
        assert_eq!(pfh_fare(10.0, 1.0, true, 10_000.0), PFH_MAX_FARE);
    }

    #[test]
    fn transit_inconvenience_counts_transfers() {
        let cost = evaluate_with_access(TravelMode::Transit, &inputs(3.0), 7.0);
        // time ≈ 58.9 → one transfer
        assert_eq!(cost.inconvenience, 8.0);
        assert_eq!(cost.cost, TRANSIT_BASE_FARE);
        assert!(!cost.triggers_day_pass);
    }

    #[test]
    fn pfh_inconvenience_is_access() {
        let cost = evaluate_with_access(TravelMode::Pfh, &inputs(3.0), 4.0);
        assert_eq!(cost.inconvenience, 4.0);
        assert!(!cost.triggers_day_pass);
    }

    #[test]
    fn long_transit_trip_triggers_day_pass() {
        let cost = evaluate_with_access(TravelMode::Transit, &inputs(15.0), 7.0);
        assert!(cost.time > TRANSIT_BASE_FARE_LIMIT);
        assert_eq!(cost.cost, TRANSIT_DAY_PASS_FARE);
        assert!(cost.triggers_day_pass);

        let with_pass = TripInputs { day_pass_active: true, ..inputs(15.0) };
        let cost = evaluate_with_access(TravelMode::Transit, &with_pass, 7.0);
        assert_eq!(cost.cost, 0.0);
        assert!(!cost.triggers_day_pass);
    }

    #[test]
    fn access_delays_follow_step_parity() {
        let mut rng = AgentRng::new(3, AgentId(0));
        for (mode, rush) in [
            (TravelMode::Transit, true),
            (TravelMode::Transit, false),
            (TravelMode::Pfh, true),
            (TravelMode::Pfh, false),
        ] {
            let range = access_range(mode, rush);
            let (lo, hi) = (*range.start() as f64, *range.end() as f64);
            for _ in 0..500 {
                let access = draw_access_delay(mode, rush, &mut rng);
                assert!(access >= lo && access <= hi, "{mode} rush={rush}: {access}");
                assert_eq!(access.fract(), 0.0);
            }
        }
        assert_eq!(access_range(TravelMode::Transit, true), 14..=28);
        assert_eq!(access_range(TravelMode::Pfh, false), 3..=9);
    }

    #[test]
    fn aggregate_applies_weights() {
        let cost = TripCost { time: 100.0, cost: 2.5, inconvenience: 9.0, triggers_day_pass: false };
        let agg = TripAggregate::new(&cost, &ms_core::ScoreWeights::default());
        assert!(approx(agg.score, 12.5));
        assert_eq!(agg.time, 100.0);
        assert_eq!(agg.inconvenience, 9.0);

        let cost_only = ms_core::ScoreWeights { time: 0.0, cost: 1.0 };
        assert!(approx(TripAggregate::new(&cost, &cost_only).score, 2.5));
    }
}

#[cfg(test)]
mod cost_properties {
    use proptest::prelude::*;

    use crate::cost::*;

    proptest! {
        #[test]
        fn pfh_fare_always_within_bounds(
            time in 0.0f64..100_000.0,
            distance in 0.0f64..10_000.0,
            taxed in any::<bool>(),
            tax_rate in 0.0f64..10_000.0,
        ) {
            let fare = pfh_fare(time, distance, taxed, tax_rate);
            prop_assert!((PFH_MIN_FARE..=PFH_MAX_FARE).contains(&fare));
        }

        #[test]
        fn transit_time_monotone_in_distance(
            a in 0.0f64..200.0,
            b in 0.0f64..200.0,
            access in 7u32..=28,
        ) {
            let (near, far) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(transit_time(near, access as f64) <= transit_time(far, access as f64));
        }
    }
}

// ── Tax zone ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tax_zone_tests {
    use super::*;
    use crate::TaxZone;

    #[test]
    fn origin_x_alone_is_enough() {
        let zone = TaxZone::default();
        assert!(zone.applies(Cell::new(20, 5), Cell::new(50, 5)));
    }

    #[test]
    fn each_test_independently_taxes() {
        let zone = TaxZone::default();
        let outside = Cell::new(0, 0);
        assert!(zone.applies(outside, Cell::new(12, 0)));
        assert!(zone.applies(Cell::new(0, 39), outside));
        assert!(zone.applies(outside, Cell::new(59, 12)));
    }

    #[test]
    fn both_endpoints_outside_every_band() {
        let zone = TaxZone::default();
        assert!(!zone.applies(Cell::new(0, 0), Cell::new(50, 5)));
        assert!(!zone.applies(Cell::new(11, 11), Cell::new(38, 40)));
        assert!(!zone.applies(Cell::new(59, 47), Cell::new(0, 0)));
    }

    #[test]
    fn custom_bands() {
        let zone = TaxZone::new(0..=0, 5..=6);
        assert!(zone.applies(Cell::new(0, 40), Cell::new(9, 40)));
        assert!(zone.applies(Cell::new(3, 40), Cell::new(9, 6)));
        assert!(!zone.applies(Cell::new(3, 4), Cell::new(9, 7)));
    }
}

// ── Confidence ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod confidence_tests {
    use ms_core::TravelMode;

    use super::approx;
    use crate::Confidence;
    use crate::confidence::MIN_INCONVENIENCE;

    #[test]
    fn score_gap_docks_cheaper_mode() {
        let mut c = Confidence::RESET;
        c.adjust_for_score(10.0, 30.0);
        assert!(approx(c.pfh, -1.0));
        assert_eq!(c.transit, 1.0);

        let mut c = Confidence::RESET;
        c.adjust_for_score(30.0, 10.0);
        assert!(approx(c.transit, -1.0));
        assert_eq!(c.pfh, 1.0);
    }

    #[test]
    fn equal_scores_change_nothing() {
        let mut c = Confidence::RESET;
        c.adjust_for_score(12.0, 12.0);
        assert_eq!(c, Confidence::RESET);
    }

    #[test]
    fn unaffordable_mode_is_halved_then_docked() {
        let mut c = Confidence::RESET;
        c.adjust_for_budget(100.0, 20.0, 100.0);
        assert!(approx(c.transit, 0.5 - 1.0));
        assert!(approx(c.pfh, 1.0 - 0.2));
    }

    #[test]
    fn negative_budget_is_valid() {
        let mut c = Confidence::RESET;
        c.adjust_for_budget(5.0, 5.0, -10.0);
        // halved (5 >= -10), then 5 / -10 is subtracted
        assert!(approx(c.transit, 1.0));
        assert!(approx(c.pfh, 1.0));
    }

    #[test]
    fn zero_inconvenience_is_floored() {
        let mut c = Confidence::RESET;
        c.adjust_for_inconvenience(0.5, 0.0, 0.25);
        assert!(c.transit.is_finite() && c.pfh.is_finite());
        assert!(approx(c.transit, 1.0 - 0.5 / MIN_INCONVENIENCE));
        assert!(approx(c.pfh, 0.5));
    }

    #[test]
    fn inconvenience_uses_each_modes_own_value() {
        let mut c = Confidence::RESET;
        c.adjust_for_inconvenience(0.6, 16.0, 6.0);
        assert!(approx(c.transit, 1.0 - 0.6 / 16.0));
        assert!(approx(c.pfh, 1.0 - 0.1));
    }

    #[test]
    fn tie_goes_to_transit() {
        assert_eq!(Confidence { transit: -3.25, pfh: -3.25 }.choice(), TravelMode::Transit);
        assert_eq!(Confidence { transit: 0.1, pfh: 0.2 }.choice(), TravelMode::Pfh);
        assert_eq!(Confidence::RESET.choice(), TravelMode::Transit);
    }

    #[test]
    fn confidences_are_not_clamped() {
        let mut c = Confidence::RESET;
        c.adjust_for_score(0.0, 500.0);
        assert!(approx(c.pfh, -49.0));
        // Halving a negative confidence raises it before the ratio is taken.
        c.adjust_for_budget(10.0, 400.0, 20.0);
        assert!(approx(c.pfh, -49.0 + 24.5 - 20.0));
        assert!(approx(c.pfh, -44.5));
    }

    #[test]
    fn halving_raises_a_negative_confidence() {
        let mut c = Confidence { transit: 1.0, pfh: -10.0 };
        c.adjust_for_budget(0.0, 20.0, 10.0);
        assert!(approx(c.transit, 1.0));
        assert!(approx(c.pfh, -10.0 + 5.0 - 2.0));
    }
}

// ── Decision engine ───────────────────────────────────────────────────────────

#[cfg(test)]
mod model_tests {
    use ms_core::{ScoreWeights, TravelMode};

    use super::*;
    use crate::{
        ConfidenceModel, ModeChoiceModel, TaxZone, Trip, TripAggregate,
    };

    fn agg(score: f64, time: f64, cost: f64, inconvenience: f64) -> TripAggregate {
        TripAggregate { score, time, cost, inconvenience }
    }

    #[test]
    fn adjustments_run_in_order() {
        let transit = agg(14.3, 118.0, 2.5, 16.0);
        let pfh = agg(34.4, 22.0, 32.0, 6.0);
        let c = ConfidenceModel::score(&transit, &pfh, 150.0, 22.0, 0.6);

        let mut t = 1.0;
        let mut p = 1.0 - (34.4 - 14.3) / 10.0;
        t -= 118.0 / 150.0;
        p -= 22.0 / 150.0;
        p -= p / 2.0; // 32 >= 22
        t -= 2.5 / 22.0;
        p -= 32.0 / 22.0;
        t -= 0.6 / 16.0;
        p -= 0.6 / 6.0;

        assert!(approx(c.transit, t), "{} vs {t}", c.transit);
        assert!(approx(c.pfh, p), "{} vs {p}", c.pfh);
        assert_eq!(c.choice(), TravelMode::Transit);
    }

    #[test]
    fn rejects_negative_weights() {
        assert!(ConfidenceModel::new(ScoreWeights { time: 0.1, cost: -1.0 }).is_err());
        assert!(ConfidenceModel::new(ScoreWeights::default()).is_ok());
    }

    #[test]
    fn decision_matches_its_confidence() {
        let store = make_store(1);
        let ctx = make_context(&store, 1, 0.0);
        let model = ConfidenceModel::default();
        let mut rng = AgentRng::new(7, AgentId(0));
        let zone = TaxZone::default();

        for _ in 0..100 {
            let trip = Trip::draw(Cell::new(5, 5), &Grid::new(60, 48).unwrap(), &zone, &mut rng);
            let d = model.decide(AgentId(0), trip, &ctx, &mut rng);
            assert_eq!(d.choice, d.confidence.choice());
            assert_ne!(d.trip.origin, d.trip.destination);
            assert_eq!(d.chosen().time, match d.choice {
                TravelMode::Transit => d.transit.time,
                TravelMode::Pfh     => d.pfh.time,
            });
            assert!((5.0..=400.0).contains(&d.pfh.cost));
        }
    }

    #[test]
    fn long_trip_triggers_day_pass_once() {
        let mut store = make_store(1);
        let trip = Trip::new(Cell::new(0, 0), Cell::new(59, 47), &TaxZone::default());
        let model = ConfidenceModel::default();

        let d = {
            let ctx = make_context(&store, 1, 0.0);
            model.decide(AgentId(0), trip, &ctx, &mut AgentRng::new(1, AgentId(0)))
        };
        assert!(d.day_pass_triggered);
        assert_eq!(d.transit.cost, 5.0);

        store.day_pass_active[0] = true;
        let ctx = make_context(&store, 2, 0.0);
        let d = model.decide(AgentId(0), trip, &ctx, &mut AgentRng::new(1, AgentId(0)));
        assert!(!d.day_pass_triggered);
        assert_eq!(d.transit.cost, 0.0);
    }

    #[test]
    fn tax_raises_pfh_cost_only() {
        let store = make_store(1);
        let trip = Trip::new(Cell::new(20, 5), Cell::new(25, 8), &TaxZone::default());
        assert!(trip.in_tax_zone);
        let model = ConfidenceModel::default();

        let untaxed = model.decide(
            AgentId(0), trip, &make_context(&store, 2, 0.0), &mut AgentRng::new(4, AgentId(0)),
        );
        let taxed = model.decide(
            AgentId(0), trip, &make_context(&store, 2, 3.0), &mut AgentRng::new(4, AgentId(0)),
        );
        assert_eq!(untaxed.transit, taxed.transit);
        assert!(approx(taxed.pfh.cost - untaxed.pfh.cost, 6.0));
        assert!(taxed.confidence.pfh < untaxed.confidence.pfh);
    }

    #[test]
    fn untaxed_trip_ignores_tax_rate() {
        let store = make_store(1);
        let trip = Trip::new(Cell::new(0, 0), Cell::new(5, 3), &TaxZone::default());
        assert!(!trip.in_tax_zone);
        let model = ConfidenceModel::default();

        let a = model.decide(
            AgentId(0), trip, &make_context(&store, 1, 0.0), &mut AgentRng::new(4, AgentId(0)),
        );
        let b = model.decide(
            AgentId(0), trip, &make_context(&store, 1, 9.0), &mut AgentRng::new(4, AgentId(0)),
        );
        assert_eq!(a, b);
    }
}
