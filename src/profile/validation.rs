//! Profile validation with error accumulation.
//!
//! Validation is advisory: [`crate::compute`] accepts any profile and falls
//! back to defaults. These checks tell the caller which fields would be
//! resolved by a fallback, and enforce the two preconditions the per-person
//! and per-area intensities depend on.

use super::{HouseholdProfile, NumericInput, Vehicle};
use crate::constants::{
    DietType, DisplayMode, DistrictLocation, ElectricityProvider, GroceryMethod, HeatingSystem,
    HouseType, ProductType, VehicleType, GROCERY_PERIODS, USAGE_PERIODS, WATER_PERIODS,
};
use crate::effects::{combine_validations, ensure, validation_success, ProfileValidation};

/// Validate every field of the profile, reporting all problems at once.
pub fn validate_profile(profile: &HouseholdProfile) -> ProfileValidation<()> {
    let mut checks = vec![
        validate_preconditions(profile),
        one_of("houseType", &profile.house_type, &HouseType::names()),
        validate_heating(profile),
        validate_water(profile),
        one_of(
            "electricityProvider",
            &profile.electricity_provider,
            &ElectricityProvider::names(),
        ),
        one_of("productType", &profile.product_type, &ProductType::names()),
        one_of("consumptionPeriod", &profile.consumption_period, USAGE_PERIODS),
        non_negative("electricityConsumption", profile.electricity_consumption),
        validate_groceries(profile),
        one_of("displayMode", &profile.display_mode, &DisplayMode::names()),
    ];

    checks.extend(
        profile
            .vehicles
            .iter()
            .enumerate()
            .map(|(index, vehicle)| validate_vehicle(index, vehicle)),
    );

    combine_validations(checks).map(|_| ())
}

/// The two preconditions `compute` relies on for defined intensities.
pub fn validate_preconditions(profile: &HouseholdProfile) -> ProfileValidation<()> {
    combine_validations(vec![
        ensure(profile.residents >= 1, "residents", || {
            "must be at least 1".to_string()
        }),
        ensure(
            profile.built_area.is_finite() && profile.built_area > 0.0,
            "builtArea",
            || format!("must be greater than 0 (got {})", profile.built_area),
        ),
    ])
    .map(|_| ())
}

fn validate_heating(profile: &HouseholdProfile) -> ProfileValidation<()> {
    let mut checks = vec![one_of(
        "heatingSystem",
        &profile.heating_system,
        &HeatingSystem::names(),
    )];

    if HeatingSystem::parse(&profile.heating_system) == Some(HeatingSystem::District) {
        checks.push(match profile.district_location.as_deref() {
            Some(location) => one_of("districtLocation", location, &DistrictLocation::names()),
            None => ensure(false, "districtLocation", || {
                "is required for district heating".to_string()
            }),
        });
    }

    combine_validations(checks).map(|_| ())
}

fn validate_water(profile: &HouseholdProfile) -> ProfileValidation<()> {
    if !profile.has_water_readings() {
        return validation_success(());
    }

    combine_validations(vec![
        numeric_input("hotWaterReading", &profile.hot_water_reading),
        numeric_input("coldWaterReading", &profile.cold_water_reading),
        one_of("waterPeriod", &profile.water_period, WATER_PERIODS),
    ])
    .map(|_| ())
}

fn validate_groceries(profile: &HouseholdProfile) -> ProfileValidation<()> {
    let method_check = one_of(
        "groceryMethod",
        &profile.grocery_method,
        &GroceryMethod::names(),
    );

    let method_checks = match GroceryMethod::parse(&profile.grocery_method) {
        Some(GroceryMethod::Loyalty | GroceryMethod::ReceiptAnalysis) => vec![
            numeric_input("groceryCO2", &profile.grocery_co2),
            one_of("groceryPeriod", &profile.grocery_period, GROCERY_PERIODS),
        ],
        Some(GroceryMethod::Spending) => vec![
            numeric_input("grocerySpend", &profile.grocery_spend),
            one_of(
                "grocerySpendPeriod",
                &profile.grocery_spend_period,
                GROCERY_PERIODS,
            ),
            one_of("dietType", &profile.diet_type, &DietType::names()),
            numeric_input("emissionFactor", &profile.emission_factor),
        ],
        None => Vec::new(),
    };

    let mut checks = vec![method_check];
    checks.extend(method_checks);
    combine_validations(checks).map(|_| ())
}

fn validate_vehicle(index: usize, vehicle: &Vehicle) -> ProfileValidation<()> {
    let field = |name: &str| format!("vehicles[{}].{}", index, name);

    let mut checks = vec![
        one_of(&field("type"), &vehicle.vehicle_type, &VehicleType::names()),
        one_of(&field("period"), &vehicle.period, USAGE_PERIODS),
        non_negative(&field("kilometers"), vehicle.kilometers),
        numeric_input(&field("customEmissions"), &vehicle.custom_emissions),
    ];

    // A custom factor replaces the table lookup, so the fuel no longer matters.
    if !vehicle.custom_emissions.is_present() {
        if let Some(vehicle_type) = VehicleType::parse(&vehicle.vehicle_type) {
            checks.push(one_of(
                &field("fuelType"),
                &vehicle.fuel_type,
                vehicle_type.fuel_types(),
            ));
        }
    }

    combine_validations(checks).map(|_| ())
}

fn one_of(field: &str, value: &str, allowed: &[&str]) -> ProfileValidation<()> {
    ensure(allowed.contains(&value), field, || {
        format!("'{}' is not one of: {}", value, allowed.join(", "))
    })
}

fn non_negative(field: &str, value: f64) -> ProfileValidation<()> {
    ensure(value.is_finite() && value >= 0.0, field, || {
        format!("must be a non-negative number (got {})", value)
    })
}

fn numeric_input(field: &str, input: &NumericInput) -> ProfileValidation<()> {
    if input.is_malformed() {
        return ensure(false, field, || format!("'{}' is not a number", input));
    }
    match input.value_if_present() {
        Some(value) => non_negative(field, value),
        None => validation_success(()),
    }
}
