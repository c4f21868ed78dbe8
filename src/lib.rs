//! Household carbon footprint engine.
//!
//! [`compute`] turns a [`HouseholdProfile`] into an [`EmissionsReport`]:
//! annual emissions for heating, electricity, wastewater, transport and
//! groceries, an A–G intensity rating and a 1–100 net-zero score.
//!
//! ```rust
//! use homeprint::{compute, EmissionRating, HouseholdProfile};
//!
//! let report = compute(&HouseholdProfile::default());
//! assert!(report.total_emissions > 0.0);
//! assert!(report.emission_rating >= EmissionRating::A);
//! ```

// Export modules for library usage
pub mod calculators;
pub mod cli;
pub mod commands;
pub mod config;
pub mod constants;
pub mod effects;
pub mod errors;
pub mod formatting;
pub mod io;
pub mod profile;
pub mod receipts;
pub mod report;
pub mod scoring;

// Re-export commonly used types
pub use crate::errors::FootprintError;

pub use crate::profile::{normalize, validate_profile, HouseholdProfile, NumericInput, Vehicle};

pub use crate::report::{
    compute, BaselineComparison, Category, CategoryEmissions, EmissionsReport,
    ImprovementScenario, ScenarioKind,
};

pub use crate::scoring::{net_zero_score, rate_emissions, EmissionRating, ScoreBand};

pub use crate::receipts::{ReceiptAnalysis, ReceiptLedger};

pub use crate::io::output::{create_writer, OutputFormat, OutputWriter};
