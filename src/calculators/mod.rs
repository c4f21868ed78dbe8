//! The five independent emission calculators.
//!
//! Each calculator reads only the normalized profile and the constant
//! tables, and returns annual emissions in kg CO₂. None of them depends on
//! another's output.

pub mod electricity;
pub mod grocery;
pub mod heating;
pub mod transport;
pub mod wastewater;

use crate::profile::NormalizedProfile;
use crate::report::CategoryEmissions;
use tracing::debug;

/// Run every calculator and collect the annual breakdown.
pub fn annual_breakdown(profile: &NormalizedProfile) -> CategoryEmissions {
    let breakdown = CategoryEmissions {
        heating: heating::emissions(profile),
        electricity: electricity::emissions(profile),
        wastewater: wastewater::emissions(profile),
        transport: transport::emissions(&profile.vehicles),
        grocery: grocery::emissions(&profile.grocery),
    };

    debug!(
        heating = breakdown.heating,
        electricity = breakdown.electricity,
        wastewater = breakdown.wastewater,
        transport = breakdown.transport,
        grocery = breakdown.grocery,
        "Annual emissions by category (kg CO2)"
    );

    breakdown
}
