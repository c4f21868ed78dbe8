//! Versioned lookup tables, scoring thresholds, and option sets.
//!
//! Everything that would otherwise be an inline literal in a calculator
//! lives here, so validation and calculation read the same values.

pub mod factors;
pub mod options;

pub use factors::*;
pub use options::*;

/// Version of the factor tables and thresholds in this module.
///
/// Bump when any factor, threshold, or option set changes.
pub const FACTOR_TABLE_VERSION: &str = "fi-2024.1";

pub const MONTHS_PER_YEAR: f64 = 12.0;

/// National per-household baseline used by the net-zero score (kg CO₂/yr).
pub const FINNISH_AVERAGE_KG: f64 = 4200.0;

/// Score awarded to a household emitting exactly the national baseline.
pub const BASELINE_SCORE: f64 = 60.0;

/// Exclusive upper bounds (kg CO₂/m²/yr) for ratings A through F.
/// Anything at or above the last bound rates G.
pub const RATING_UPPER_BOUNDS: [f64; 6] = [5.0, 10.0, 20.0, 35.0, 50.0, 70.0];

/// Minimum scores for each named score band, best first.
pub const SCORE_BAND_FLOORS: [(u8, &str); 5] = [
    (90, "Excellent"),
    (80, "Very Good"),
    (70, "Good"),
    (60, "Average"),
    (40, "Below Average"),
];

/// Share of heating emissions removed by an energy renovation.
pub const RENOVATION_SAVING_SHARE: f64 = 0.4;

/// Share of grocery emissions removed by cutting meat by 30%.
pub const REDUCED_MEAT_SAVING_SHARE: f64 = 0.3;

/// Share of grocery emissions removed by receipt-guided shopping.
pub const RECEIPT_GUIDED_SAVING_SHARE: f64 = 0.2;
