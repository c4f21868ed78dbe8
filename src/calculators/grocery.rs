//! Grocery Calculator.

use crate::constants::diet_factor;
use crate::profile::GroceryStrategy;

/// Grocery emissions (kg CO₂/yr) for whichever strategy the profile selected.
pub fn emissions(strategy: &GroceryStrategy) -> f64 {
    match *strategy {
        GroceryStrategy::Declared { annual_kg } => annual_kg,
        GroceryStrategy::Spending {
            annual_spend,
            explicit_factor,
            diet,
        } => annual_spend * explicit_factor.unwrap_or_else(|| diet_factor(diet)),
        GroceryStrategy::Unsupported => 0.0,
    }
}
