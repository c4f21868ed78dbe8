//! Aggregator & Scorer, and the public `compute` entry point.

pub mod comparison;

pub use comparison::{BaselineComparison, ImprovementScenario, ScenarioKind};

use crate::calculators;
use crate::constants::{DisplayMode, MONTHS_PER_YEAR};
use crate::profile::{normalize, HouseholdProfile, NormalizedProfile};
use crate::scoring::{net_zero_score, rate_emissions, EmissionRating, ScoreBand};
use serde::Serialize;
use std::fmt;
use tracing::debug_span;

/// Emission category, in reporting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Heating,
    Electricity,
    Wastewater,
    Transport,
    Grocery,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Self::Heating,
        Self::Electricity,
        Self::Wastewater,
        Self::Transport,
        Self::Grocery,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Heating => "Heating",
            Self::Electricity => "Electricity",
            Self::Wastewater => "Wastewater",
            Self::Transport => "Transport",
            Self::Grocery => "Groceries",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Emissions per category (kg CO₂ over whichever period the owner states).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct CategoryEmissions {
    pub heating: f64,
    pub electricity: f64,
    pub wastewater: f64,
    pub transport: f64,
    pub grocery: f64,
}

impl CategoryEmissions {
    /// Sum in fixed category order so totals are reproducible to the bit.
    pub fn total(&self) -> f64 {
        self.heating + self.electricity + self.wastewater + self.transport + self.grocery
    }

    pub fn get(&self, category: Category) -> f64 {
        match category {
            Category::Heating => self.heating,
            Category::Electricity => self.electricity,
            Category::Wastewater => self.wastewater,
            Category::Transport => self.transport,
            Category::Grocery => self.grocery,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, f64)> + '_ {
        Category::ALL.into_iter().map(move |c| (c, self.get(c)))
    }

    fn divided_by(&self, divisor: f64) -> Self {
        Self {
            heating: self.heating / divisor,
            electricity: self.electricity / divisor,
            wastewater: self.wastewater / divisor,
            transport: self.transport / divisor,
            grocery: self.grocery / divisor,
        }
    }
}

/// Result of one calculation.
///
/// Absolute figures (`total_emissions` and the five category fields) are in
/// the unit implied by `display_mode`. Intensities, rating, and score are
/// always annual.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmissionsReport {
    pub display_mode: DisplayMode,
    pub total_emissions: f64,
    pub heating_emissions: f64,
    pub electricity_emissions: f64,
    pub wastewater_emissions: f64,
    pub transport_emissions: f64,
    pub grocery_emissions: f64,
    pub net_zero_score: u8,
    pub emission_rating: EmissionRating,
    pub score_band: ScoreBand,
    /// kg CO₂ per resident per year.
    pub per_person_emissions: f64,
    /// kg CO₂ per m² per year.
    pub per_m2_emissions: f64,
    /// Annual breakdown the displayed figures were derived from.
    pub annual_breakdown: CategoryEmissions,
}

impl EmissionsReport {
    /// Total annual emissions, independent of `display_mode`.
    pub fn annual_total(&self) -> f64 {
        self.annual_breakdown.total()
    }

    /// Displayed category figures.
    pub fn displayed(&self) -> CategoryEmissions {
        CategoryEmissions {
            heating: self.heating_emissions,
            electricity: self.electricity_emissions,
            wastewater: self.wastewater_emissions,
            transport: self.transport_emissions,
            grocery: self.grocery_emissions,
        }
    }

    pub fn period_suffix(&self) -> &'static str {
        match self.display_mode {
            DisplayMode::Yearly => "/year",
            DisplayMode::Monthly => "/month",
        }
    }

    pub fn compare_to_baseline(&self) -> BaselineComparison {
        BaselineComparison::for_annual_total(self.annual_total())
    }

    pub fn improvement_scenarios(&self) -> Vec<ImprovementScenario> {
        comparison::improvement_scenarios(&self.annual_breakdown)
    }
}

/// Compute the emissions report for a household.
///
/// Total over well-typed input: blank or unparsable numbers read as 0 and
/// unrecognized options use their documented fallbacks. Callers must ensure
/// `residents >= 1` and `built_area > 0` for the intensities to be defined.
pub fn compute(profile: &HouseholdProfile) -> EmissionsReport {
    let _span = debug_span!("compute", residents = profile.residents).entered();

    let normalized = normalize(profile);
    let annual = calculators::annual_breakdown(&normalized);
    assemble(annual, &normalized)
}

/// Derive intensities, rating, and score from the annual breakdown and
/// apply the display transform.
pub fn assemble(annual: CategoryEmissions, profile: &NormalizedProfile) -> EmissionsReport {
    let total = annual.total();
    let per_person = total / profile.residents;
    let per_m2 = total / profile.built_area;
    let score = net_zero_score(total);

    let displayed = match profile.display_mode {
        DisplayMode::Yearly => annual,
        DisplayMode::Monthly => annual.divided_by(MONTHS_PER_YEAR),
    };
    let displayed_total = match profile.display_mode {
        DisplayMode::Yearly => total,
        DisplayMode::Monthly => total / MONTHS_PER_YEAR,
    };

    EmissionsReport {
        display_mode: profile.display_mode,
        total_emissions: displayed_total,
        heating_emissions: displayed.heating,
        electricity_emissions: displayed.electricity,
        wastewater_emissions: displayed.wastewater,
        transport_emissions: displayed.transport,
        grocery_emissions: displayed.grocery,
        net_zero_score: score,
        emission_rating: rate_emissions(per_m2),
        score_band: ScoreBand::for_score(score),
        per_person_emissions: per_person,
        per_m2_emissions: per_m2,
        annual_breakdown: annual,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::NumericInput;

    #[test]
    fn test_total_is_sum_of_categories() {
        let report = compute(&HouseholdProfile::default());
        let annual = report.annual_breakdown;
        assert_eq!(
            report.total_emissions,
            annual.heating + annual.electricity + annual.wastewater + annual.transport + annual.grocery
        );
    }

    #[test]
    fn test_monthly_display_divides_absolute_figures_only() {
        let yearly = compute(&HouseholdProfile {
            grocery_co2: NumericInput::from("200"),
            ..HouseholdProfile::default()
        });
        let monthly = compute(&HouseholdProfile {
            grocery_co2: NumericInput::from("200"),
            display_mode: "monthly".to_string(),
            ..HouseholdProfile::default()
        });

        assert_eq!(monthly.total_emissions, yearly.total_emissions / 12.0);
        assert_eq!(monthly.grocery_emissions, 200.0 / 12.0);
        assert_eq!(monthly.per_m2_emissions, yearly.per_m2_emissions);
        assert_eq!(monthly.per_person_emissions, yearly.per_person_emissions);
        assert_eq!(monthly.emission_rating, yearly.emission_rating);
        assert_eq!(monthly.net_zero_score, yearly.net_zero_score);
        assert_eq!(monthly.period_suffix(), "/month");
    }

    #[test]
    fn test_category_iteration_order() {
        let report = compute(&HouseholdProfile::default());
        let categories: Vec<Category> = report.displayed().iter().map(|(c, _)| c).collect();
        assert_eq!(categories, Category::ALL.to_vec());
    }
}
