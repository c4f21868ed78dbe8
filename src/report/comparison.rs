//! Comparison against the national baseline and "what if" savings.

use super::CategoryEmissions;
use crate::constants::{
    FINNISH_AVERAGE_KG, RECEIPT_GUIDED_SAVING_SHARE, REDUCED_MEAT_SAVING_SHARE,
    RENOVATION_SAVING_SHARE,
};
use serde::Serialize;

/// Annual emissions set against the national household baseline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BaselineComparison {
    pub annual_emissions: f64,
    pub baseline: f64,
    /// Positive when above the baseline.
    pub difference: f64,
}

impl BaselineComparison {
    pub fn for_annual_total(annual_emissions: f64) -> Self {
        Self {
            annual_emissions,
            baseline: FINNISH_AVERAGE_KG,
            difference: annual_emissions - FINNISH_AVERAGE_KG,
        }
    }

    pub fn is_below_baseline(&self) -> bool {
        self.annual_emissions < self.baseline
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScenarioKind {
    RenewableElectricity,
    ElectricVehicles,
    ReduceMeat,
    EnergyRenovation,
    ReceiptGuidedShopping,
}

impl ScenarioKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::RenewableElectricity => "Renewable Electricity",
            Self::ElectricVehicles => "Electric Vehicles",
            Self::ReduceMeat => "Reduce Meat 30%",
            Self::EnergyRenovation => "Energy Renovation",
            Self::ReceiptGuidedShopping => "Receipt-Guided Grocery Shopping",
        }
    }
}

/// Estimated annual saving (kg CO₂/yr) from one household change.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImprovementScenario {
    pub kind: ScenarioKind,
    pub annual_saving: f64,
}

pub fn improvement_scenarios(annual: &CategoryEmissions) -> Vec<ImprovementScenario> {
    [
        (ScenarioKind::RenewableElectricity, annual.electricity),
        (ScenarioKind::ElectricVehicles, annual.transport),
        (
            ScenarioKind::ReduceMeat,
            annual.grocery * REDUCED_MEAT_SAVING_SHARE,
        ),
        (
            ScenarioKind::EnergyRenovation,
            annual.heating * RENOVATION_SAVING_SHARE,
        ),
        (
            ScenarioKind::ReceiptGuidedShopping,
            annual.grocery * RECEIPT_GUIDED_SAVING_SHARE,
        ),
    ]
    .into_iter()
    .map(|(kind, annual_saving)| ImprovementScenario {
        kind,
        annual_saving,
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_baseline_comparison() {
        let below = BaselineComparison::for_annual_total(3000.0);
        assert_eq!(below.difference, -1200.0);
        assert!(below.is_below_baseline());

        let at = BaselineComparison::for_annual_total(4200.0);
        assert!(!at.is_below_baseline());
    }

    #[test]
    fn test_scenarios_scale_categories() {
        let annual = CategoryEmissions {
            heating: 1000.0,
            electricity: 500.0,
            wastewater: 100.0,
            transport: 800.0,
            grocery: 1000.0,
        };
        let savings: Vec<(ScenarioKind, f64)> = improvement_scenarios(&annual)
            .into_iter()
            .map(|s| (s.kind, s.annual_saving))
            .collect();

        assert_eq!(
            savings,
            vec![
                (ScenarioKind::RenewableElectricity, 500.0),
                (ScenarioKind::ElectricVehicles, 800.0),
                (ScenarioKind::ReduceMeat, 300.0),
                (ScenarioKind::EnergyRenovation, 400.0),
                (ScenarioKind::ReceiptGuidedShopping, 200.0),
            ]
        );
    }
}
