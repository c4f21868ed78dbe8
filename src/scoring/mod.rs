//! Summary metrics derived from annual emissions.
//!
//! - [`rating`]: letter grade from emissions per m² of floor area
//! - [`net_zero`]: 1–100 index relative to the national baseline
//!
//! Both always take annual-basis figures; the display period never reaches
//! this module.

pub mod net_zero;
pub mod rating;

pub use net_zero::{net_zero_score, round_half_up, ScoreBand};
pub use rating::{rate_emissions, EmissionRating};
