//! Electricity Calculator.

use crate::constants::electricity_factor;
use crate::profile::NormalizedProfile;

/// Electricity emissions (kg CO₂/yr).
pub fn emissions(profile: &NormalizedProfile) -> f64 {
    let grams_per_kwh = electricity_factor(profile.electricity_provider, profile.product_type);
    profile.annual_electricity_kwh * (grams_per_kwh / 1000.0)
}
