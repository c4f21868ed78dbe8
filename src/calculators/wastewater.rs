//! Wastewater Calculator.

use crate::constants::{WASTEWATER_KG_PER_M3, WATER_M3_PER_RESIDENT};
use crate::profile::{NormalizedProfile, WaterUsage};

/// Total water volume passing to treatment (m³/yr).
pub fn annual_volume(profile: &NormalizedProfile) -> f64 {
    match profile.water {
        WaterUsage::Metered {
            hot_m3,
            cold_m3,
            periods_per_year,
        } => (hot_m3 + cold_m3) * periods_per_year,
        WaterUsage::Estimated => profile.residents * WATER_M3_PER_RESIDENT,
    }
}

/// Wastewater emissions (kg CO₂/yr).
pub fn emissions(profile: &NormalizedProfile) -> f64 {
    annual_volume(profile) * WASTEWATER_KG_PER_M3
}
