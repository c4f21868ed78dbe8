//! Property-based tests for the footprint engine
//!
//! These tests verify invariants that should hold for all inputs:
//! - compute is deterministic
//! - the annual total is the exact sum of the categories
//! - electricity emissions never fall as consumption rises
//! - the monthly display divides absolute figures only
//! - every figure stays finite, even for non-finite text input
//! - score and rating stay in range

use homeprint::{compute, net_zero_score, HouseholdProfile, NumericInput, Vehicle};
use proptest::prelude::*;

fn option(values: &'static [&'static str]) -> impl Strategy<Value = String> {
    proptest::sample::select(values).prop_map(str::to_string)
}

fn numeric_input() -> impl Strategy<Value = NumericInput> {
    prop_oneof![
        Just(NumericInput::Empty),
        (0.0..500.0f64).prop_map(NumericInput::Number),
        (0u32..500).prop_map(|n| NumericInput::from(n.to_string())),
        Just(NumericInput::from("n/a")),
        proptest::sample::select(vec!["NaN", "inf", "-inf", "Infinity", "1e400", "12abc", "1,5"])
            .prop_map(NumericInput::from),
        proptest::sample::select(vec![f64::NAN, f64::INFINITY, f64::NEG_INFINITY])
            .prop_map(NumericInput::Number),
    ]
}

fn vehicle() -> impl Strategy<Value = Vehicle> {
    (
        option(&["car", "motorcycle", "bike", "boat"]),
        option(&["petrol", "diesel", "bev", "under125cc", "over1000cc", "manual"]),
        0.0..5000.0f64,
        option(&["monthly", "yearly"]),
        prop_oneof![Just(NumericInput::Empty), (0.0..300.0f64).prop_map(NumericInput::Number)],
    )
        .prop_map(|(kind, fuel, km, period, custom)| {
            Vehicle::new(&kind, &fuel, km, &period).with_custom_emissions(custom)
        })
}

prop_compose! {
    fn building()(
        built_area in 10.0..400.0f64,
        construction_year in 1900..2030i32,
        residents in 1u32..8,
        heating_system in option(&["district", "electric", "oil", "geothermal", "peat"]),
        district_location in option(&["espoo", "helsinki", "vantaa", "tampere", "other", "oulu"]),
    ) -> HouseholdProfile {
        HouseholdProfile {
            built_area,
            construction_year,
            residents,
            heating_system,
            district_location: Some(district_location),
            ..HouseholdProfile::default()
        }
    }
}

prop_compose! {
    fn household()(
        base in building(),
        hot_water_reading in numeric_input(),
        cold_water_reading in numeric_input(),
        water_period in option(&["monthly", "quarterly", "semi-annual", "annual", "weekly"]),
        electricity in (
            option(&["fortum", "helen", "vantaan", "tampere", "other", "acme"]),
            option(&["standard", "renewable", "nuclear", "nuclearMix"]),
            0.0..20000.0f64,
            option(&["monthly", "yearly"]),
        ),
        vehicles in proptest::collection::vec(vehicle(), 0..4),
        grocery in (
            option(&["loyalty", "spending", "receipt-analysis", "guesswork"]),
            numeric_input(),
            numeric_input(),
            option(&["meat-heavy", "balanced", "vegetarian", "vegan", "national", "keto"]),
            numeric_input(),
        ),
    ) -> HouseholdProfile {
        let (electricity_provider, product_type, electricity_consumption, consumption_period) =
            electricity;
        let (grocery_method, grocery_co2, grocery_spend, diet_type, emission_factor) = grocery;
        HouseholdProfile {
            hot_water_reading,
            cold_water_reading,
            water_period,
            electricity_provider,
            product_type,
            electricity_consumption,
            consumption_period,
            vehicles,
            grocery_method,
            grocery_co2,
            grocery_spend,
            diet_type,
            emission_factor,
            ..base
        }
    }
}

proptest! {
    #[test]
    fn prop_compute_is_deterministic(profile in household()) {
        prop_assert_eq!(compute(&profile), compute(&profile));
    }

    #[test]
    fn prop_total_is_exact_category_sum(profile in household()) {
        let annual = compute(&profile).annual_breakdown;
        let report = compute(&profile);
        prop_assert_eq!(
            report.annual_total(),
            annual.heating + annual.electricity + annual.wastewater + annual.transport + annual.grocery
        );
    }

    #[test]
    fn prop_electricity_is_monotonic(profile in household(), extra in 0.0..5000.0f64) {
        let more = HouseholdProfile {
            electricity_consumption: profile.electricity_consumption + extra,
            ..profile.clone()
        };
        prop_assert!(compute(&more).electricity_emissions >= compute(&profile).electricity_emissions);
    }

    #[test]
    fn prop_monthly_display_only_divides_absolute_figures(profile in household()) {
        let yearly = compute(&HouseholdProfile { display_mode: "yearly".to_string(), ..profile.clone() });
        let monthly = compute(&HouseholdProfile { display_mode: "monthly".to_string(), ..profile });

        prop_assert_eq!(monthly.total_emissions, yearly.total_emissions / 12.0);
        prop_assert_eq!(monthly.heating_emissions, yearly.heating_emissions / 12.0);
        prop_assert_eq!(monthly.per_person_emissions, yearly.per_person_emissions);
        prop_assert_eq!(monthly.per_m2_emissions, yearly.per_m2_emissions);
        prop_assert_eq!(monthly.emission_rating, yearly.emission_rating);
        prop_assert_eq!(monthly.net_zero_score, yearly.net_zero_score);
    }

    #[test]
    fn prop_emissions_are_never_negative(profile in household()) {
        let report = compute(&profile);
        for (category, value) in report.displayed().iter() {
            prop_assert!(value.is_finite(), "{} was {}", category, value);
            prop_assert!(value >= 0.0, "{} was {}", category, value);
        }
    }

    #[test]
    fn prop_intensities_are_finite(profile in household()) {
        let report = compute(&profile);
        prop_assert!(report.total_emissions.is_finite());
        prop_assert!(report.per_m2_emissions.is_finite());
        prop_assert!(report.per_person_emissions.is_finite());
    }

    #[test]
    fn prop_score_is_in_range(annual_kg in -1000.0..50000.0f64) {
        let score = net_zero_score(annual_kg);
        prop_assert!((1..=100).contains(&score));
    }

    #[test]
    fn prop_score_never_rises_with_emissions(a in 0.0..10000.0f64, b in 0.0..10000.0f64) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(net_zero_score(low) >= net_zero_score(high));
    }
}
