//! Profile Normalizer.
//!
//! Resolves the raw profile into typed options and annual-basis inputs for
//! the calculators. Unrecognized option text resolves to `None`, and each
//! calculator applies its documented fallback for that case.

use super::HouseholdProfile;
use crate::constants::{
    DietType, DisplayMode, DistrictLocation, ElectricityProvider, GroceryMethod, HeatingSystem,
    Period, ProductType, VehicleType,
};

/// Water consumption basis shared by heating and wastewater.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WaterUsage {
    /// Meter readings for one period plus the periods-per-year multiplier.
    Metered {
        hot_m3: f64,
        cold_m3: f64,
        periods_per_year: f64,
    },
    /// No readings; calculators use per-resident defaults.
    Estimated,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedVehicle {
    pub vehicle_type: Option<VehicleType>,
    pub fuel_type: String,
    pub annual_km: f64,
    /// Override factor (g CO₂/km) when the profile supplied one.
    pub custom_factor: Option<f64>,
}

/// Resolved grocery estimation strategy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GroceryStrategy {
    /// Loyalty-card or receipt-analysis footprint (kg CO₂/yr).
    Declared { annual_kg: f64 },
    /// Spend × factor estimate.
    Spending {
        annual_spend: f64,
        explicit_factor: Option<f64>,
        diet: Option<DietType>,
    },
    /// Method not recognized; contributes nothing.
    Unsupported,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedProfile {
    pub built_area: f64,
    pub construction_year: i32,
    pub residents: f64,
    pub heating_system: Option<HeatingSystem>,
    pub district_location: Option<DistrictLocation>,
    pub water: WaterUsage,
    pub electricity_provider: Option<ElectricityProvider>,
    pub product_type: Option<ProductType>,
    pub annual_electricity_kwh: f64,
    pub vehicles: Vec<NormalizedVehicle>,
    pub grocery: GroceryStrategy,
    pub display_mode: DisplayMode,
}

/// Scale a per-period figure to a year. Only `monthly` scales.
///
/// Fields limited to monthly/yearly (or monthly/annual) never use the
/// quarterly or semi-annual multipliers, matching how those fields are
/// collected.
pub fn annualize_monthly(value: f64, period: &str) -> f64 {
    if period == Period::Monthly.as_str() {
        value * 12.0
    } else {
        value
    }
}

pub fn normalize(profile: &HouseholdProfile) -> NormalizedProfile {
    let water = if profile.has_water_readings() {
        WaterUsage::Metered {
            hot_m3: profile.hot_water_reading.value(),
            cold_m3: profile.cold_water_reading.value(),
            periods_per_year: Period::multiplier_for(&profile.water_period),
        }
    } else {
        WaterUsage::Estimated
    };

    let vehicles = profile
        .vehicles
        .iter()
        .map(|vehicle| NormalizedVehicle {
            vehicle_type: VehicleType::parse(&vehicle.vehicle_type),
            fuel_type: vehicle.fuel_type.clone(),
            annual_km: annualize_monthly(vehicle.kilometers, &vehicle.period),
            custom_factor: vehicle.custom_emissions.value_if_present(),
        })
        .collect();

    NormalizedProfile {
        built_area: profile.built_area,
        construction_year: profile.construction_year,
        residents: f64::from(profile.residents),
        heating_system: HeatingSystem::parse(&profile.heating_system),
        district_location: profile
            .district_location
            .as_deref()
            .and_then(DistrictLocation::parse),
        water,
        electricity_provider: ElectricityProvider::parse(&profile.electricity_provider),
        product_type: ProductType::parse(&profile.product_type),
        annual_electricity_kwh: annualize_monthly(
            profile.electricity_consumption,
            &profile.consumption_period,
        ),
        vehicles,
        grocery: resolve_grocery(profile),
        display_mode: DisplayMode::parse(&profile.display_mode).unwrap_or_default(),
    }
}

fn resolve_grocery(profile: &HouseholdProfile) -> GroceryStrategy {
    match GroceryMethod::parse(&profile.grocery_method) {
        Some(GroceryMethod::Loyalty | GroceryMethod::ReceiptAnalysis) => {
            GroceryStrategy::Declared {
                annual_kg: profile
                    .grocery_co2
                    .value_if_present()
                    .map_or(0.0, |kg| annualize_monthly(kg, &profile.grocery_period)),
            }
        }
        Some(GroceryMethod::Spending) => GroceryStrategy::Spending {
            annual_spend: profile
                .grocery_spend
                .value_if_present()
                .map_or(0.0, |spend| annualize_monthly(spend, &profile.grocery_spend_period)),
            explicit_factor: profile.emission_factor.value_if_present(),
            diet: DietType::parse(&profile.diet_type),
        },
        None => GroceryStrategy::Unsupported,
    }
}
