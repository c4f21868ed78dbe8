//! Transport Calculator: per-vehicle tailpipe emissions.

use crate::constants::transport_factor;
use crate::profile::NormalizedVehicle;

/// Tailpipe factor for a vehicle (g CO₂/km). A supplied override wins,
/// including an explicit zero.
pub fn vehicle_factor(vehicle: &NormalizedVehicle) -> f64 {
    vehicle
        .custom_factor
        .unwrap_or_else(|| transport_factor(vehicle.vehicle_type, &vehicle.fuel_type))
}

pub fn vehicle_emissions(vehicle: &NormalizedVehicle) -> f64 {
    (vehicle.annual_km * vehicle_factor(vehicle)) / 1000.0
}

/// Transport emissions over every vehicle (kg CO₂/yr).
pub fn emissions(vehicles: &[NormalizedVehicle]) -> f64 {
    vehicles
        .iter()
        .fold(0.0, |total, vehicle| total + vehicle_emissions(vehicle))
}
