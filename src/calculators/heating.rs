//! Heating Calculator: building energy demand plus domestic hot water.

use crate::constants::{
    energy_demand, heating_factor, HOT_WATER_KWH_PER_M3, HOT_WATER_KWH_PER_RESIDENT,
};
use crate::profile::{NormalizedProfile, WaterUsage};
use tracing::debug;

/// Space-heating energy for the building (kWh/yr).
pub fn space_heating_energy(profile: &NormalizedProfile) -> f64 {
    profile.built_area * energy_demand(profile.construction_year)
}

/// Energy for heating domestic hot water (kWh/yr).
pub fn hot_water_energy(profile: &NormalizedProfile) -> f64 {
    match profile.water {
        WaterUsage::Metered {
            hot_m3,
            periods_per_year,
            ..
        } => hot_m3 * periods_per_year * HOT_WATER_KWH_PER_M3,
        WaterUsage::Estimated => profile.residents * HOT_WATER_KWH_PER_RESIDENT,
    }
}

/// Heating factor for the profile (kg CO₂/kWh). An unrecognized heating
/// system has no factor and contributes nothing.
pub fn factor(profile: &NormalizedProfile) -> f64 {
    match profile.heating_system {
        Some(system) => heating_factor(system, profile.district_location),
        None => {
            debug!("Unrecognized heating system; heating factor is 0");
            0.0
        }
    }
}

/// Heating emissions (kg CO₂/yr).
pub fn emissions(profile: &NormalizedProfile) -> f64 {
    (space_heating_energy(profile) + hot_water_energy(profile)) * factor(profile)
}
