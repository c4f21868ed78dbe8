//! Emission factors and consumption defaults.
//!
//! Units are noted per table. Factors given in grams are converted to
//! kilograms by the calculators, not here, so the values match the
//! published tables one-to-one.

use super::options::{
    DietType, DistrictLocation, ElectricityProvider, HeatingSystem, ProductType, VehicleType,
};

/// Construction-year steps for building energy demand (kWh/m²/yr).
/// Each entry applies to buildings constructed strictly before the year.
pub const ENERGY_DEMAND_STEPS: &[(i32, f64)] = &[
    (1960, 240.0),
    (1980, 210.0),
    (2000, 180.0),
    (2010, 140.0),
    (2019, 100.0),
];

/// Energy demand of buildings constructed in 2019 or later (kWh/m²/yr).
pub const NEW_BUILD_ENERGY_DEMAND: f64 = 70.0;

/// Energy needed to heat one cubic metre of hot water (kWh/m³).
pub const HOT_WATER_KWH_PER_M3: f64 = 58.0;

/// Hot-water energy assumed per resident without meter readings (kWh/yr).
pub const HOT_WATER_KWH_PER_RESIDENT: f64 = 1570.0;

/// Water volume assumed per resident without meter readings (m³/yr).
pub const WATER_M3_PER_RESIDENT: f64 = 54.75;

/// Wastewater treatment emissions (kg CO₂/m³).
pub const WASTEWATER_KG_PER_M3: f64 = 1.2;

/// Electricity factor for any provider/product pair not in the table (g CO₂/kWh).
pub const ELECTRICITY_FALLBACK_G_PER_KWH: f64 = 234.0;

/// Grocery factor for unrecognized diet types (kg CO₂/€).
pub const DEFAULT_DIET_FACTOR: f64 = 0.85;

pub fn energy_demand(construction_year: i32) -> f64 {
    ENERGY_DEMAND_STEPS
        .iter()
        .find(|(before, _)| construction_year < *before)
        .map_or(NEW_BUILD_ENERGY_DEMAND, |(_, demand)| *demand)
}

/// District heating factor by network (g CO₂/kWh).
pub const fn district_heating_factor(location: DistrictLocation) -> f64 {
    match location {
        DistrictLocation::Espoo => 87.64,
        DistrictLocation::Helsinki => 126.41,
        DistrictLocation::Vantaa => 153.71,
        DistrictLocation::Tampere => 82.8,
        DistrictLocation::Other => 157.0,
    }
}

/// Heating factor (kg CO₂/kWh).
///
/// District heating without a recognized network uses the `other` network.
pub fn heating_factor(system: HeatingSystem, location: Option<DistrictLocation>) -> f64 {
    match system {
        HeatingSystem::Electric => 0.12,
        HeatingSystem::Oil => 0.26,
        HeatingSystem::Geothermal => 0.034,
        HeatingSystem::District => {
            district_heating_factor(location.unwrap_or(DistrictLocation::Other)) / 1000.0
        }
    }
}

/// Electricity factor by provider and product (g CO₂/kWh).
///
/// Renewable products are 0 for every provider. A zero factor is a real
/// table value here and never falls through to the 234 fallback.
pub fn electricity_factor(
    provider: Option<ElectricityProvider>,
    product: Option<ProductType>,
) -> f64 {
    use ElectricityProvider as P;
    use ProductType as T;

    let (Some(provider), Some(product)) = (provider, product) else {
        return ELECTRICITY_FALLBACK_G_PER_KWH;
    };

    match (provider, product) {
        (_, T::Renewable) => 0.0,
        (P::Fortum, T::Standard) => 13.94,
        (P::Fortum, T::Nuclear) => 12.5,
        (P::Fortum, T::NuclearMix) => 25.0,
        (P::Helen, T::Standard) => 271.0,
        (P::Helen, T::Nuclear) => 12.5,
        (P::Helen, T::NuclearMix) => 40.0,
        (P::Vantaan, T::Standard) => 120.0,
        (P::Vantaan, T::Nuclear) => 12.5,
        (P::Vantaan, T::NuclearMix) => 30.0,
        (P::Tampere, T::Standard) => 205.0,
        (P::Tampere, T::Nuclear) => 12.5,
        (P::Tampere, T::NuclearMix) => 35.0,
        (P::Other, T::Standard) => 234.0,
        (P::Other, T::Nuclear) => 80.0,
        (P::Other, T::NuclearMix) => 120.0,
    }
}

/// Tailpipe factor by vehicle type and fuel (g CO₂/km). Unknown pairs are 0.
pub fn transport_factor(vehicle_type: Option<VehicleType>, fuel_type: &str) -> f64 {
    match (vehicle_type, fuel_type) {
        (Some(VehicleType::Car), "petrol") => 150.0,
        (Some(VehicleType::Car), "diesel") => 140.0,
        (Some(VehicleType::Car), "hybrid") => 90.0,
        (Some(VehicleType::Car), "phev") => 60.0,
        (Some(VehicleType::Motorcycle), "under125cc") => 65.0,
        (Some(VehicleType::Motorcycle), "125to250cc") => 95.0,
        (Some(VehicleType::Motorcycle), "250to500cc") => 115.0,
        (Some(VehicleType::Motorcycle), "500to1000cc") => 145.0,
        (Some(VehicleType::Motorcycle), "over1000cc") => 185.0,
        // bev, electric motorcycles, and every bike emit nothing
        _ => 0.0,
    }
}

/// Grocery spend factor by diet (kg CO₂/€).
pub fn diet_factor(diet: Option<DietType>) -> f64 {
    match diet {
        Some(DietType::MeatHeavy) => 1.4,
        Some(DietType::Balanced) => 0.85,
        Some(DietType::Vegetarian) => 0.6,
        Some(DietType::Vegan) => 0.4,
        Some(DietType::National) => 0.7,
        None => DEFAULT_DIET_FACTOR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_energy_demand_steps() {
        assert_eq!(energy_demand(1959), 240.0);
        assert_eq!(energy_demand(1960), 210.0);
        assert_eq!(energy_demand(1999), 180.0);
        assert_eq!(energy_demand(2000), 140.0);
        assert_eq!(energy_demand(2010), 100.0);
        assert_eq!(energy_demand(2018), 100.0);
        assert_eq!(energy_demand(2019), 70.0);
        assert_eq!(energy_demand(2030), 70.0);
    }

    #[test]
    fn test_district_heating_without_location_uses_other() {
        assert_eq!(
            heating_factor(HeatingSystem::District, None),
            157.0 / 1000.0
        );
        assert_eq!(
            heating_factor(HeatingSystem::District, Some(DistrictLocation::Helsinki)),
            126.41 / 1000.0
        );
    }

    #[test]
    fn test_electricity_table() {
        use ElectricityProvider as P;
        use ProductType as T;
        assert_eq!(electricity_factor(Some(P::Helen), Some(T::Standard)), 271.0);
        assert_eq!(electricity_factor(Some(P::Fortum), Some(T::Standard)), 13.94);
        assert_eq!(electricity_factor(Some(P::Other), Some(T::Nuclear)), 80.0);
        assert_eq!(electricity_factor(Some(P::Helen), Some(T::Renewable)), 0.0);
        assert_eq!(electricity_factor(None, Some(T::Standard)), 234.0);
        assert_eq!(electricity_factor(Some(P::Helen), None), 234.0);
    }

    #[test]
    fn test_renewable_is_zero_for_every_provider() {
        for provider in ElectricityProvider::ALL {
            assert_eq!(
                electricity_factor(Some(*provider), Some(ProductType::Renewable)),
                0.0,
                "{provider}"
            );
        }
    }

    #[test]
    fn test_transport_unknown_pairs_are_zero() {
        assert_eq!(transport_factor(Some(VehicleType::Car), "petrol"), 150.0);
        assert_eq!(transport_factor(Some(VehicleType::Car), "under125cc"), 0.0);
        assert_eq!(transport_factor(Some(VehicleType::Bike), "petrol"), 0.0);
        assert_eq!(transport_factor(None, "petrol"), 0.0);
    }

    #[test]
    fn test_unknown_diet_matches_balanced() {
        assert_eq!(diet_factor(None), diet_factor(Some(DietType::Balanced)));
    }
}
