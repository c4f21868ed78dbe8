//! Receipt-analysis ledger.
//!
//! The receipt analysis service is an external collaborator: it turns an
//! uploaded receipt into per-item emissions. This module only holds its
//! already-resolved results and folds their total into the profile's
//! grocery fields, after which `compute` treats it like any other declared
//! grocery footprint.

use crate::constants::{GroceryMethod, Period};
use crate::errors::FootprintError;
use crate::profile::{HouseholdProfile, NumericInput};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

pub const UNKNOWN_STORE: &str = "Unknown Store";

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StoreInfo {
    #[serde(default)]
    pub name: Option<String>,
}

/// Payload returned by the receipt analysis service.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ReceiptAnalysis {
    /// kg CO₂ for everything on the receipt.
    pub total_emissions: Option<f64>,
    pub total_price: Option<f64>,
    pub items: Vec<serde_json::Value>,
    pub store_info: Option<StoreInfo>,
    pub categories: BTreeMap<String, serde_json::Value>,
}

impl ReceiptAnalysis {
    pub fn from_json(contents: &str) -> Result<Self, FootprintError> {
        serde_json::from_str(contents)
            .map_err(|e| FootprintError::receipt(format!("Invalid receipt analysis payload: {}", e)))
    }
}

/// One analysed receipt as kept in the ledger.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptSummary {
    pub id: u64,
    pub recorded_at: DateTime<Utc>,
    pub total_emissions: f64,
    pub total_price: f64,
    pub item_count: usize,
    pub store_name: String,
    pub categories: BTreeMap<String, serde_json::Value>,
}

impl ReceiptSummary {
    fn from_analysis(id: u64, analysis: ReceiptAnalysis) -> Self {
        Self {
            id,
            recorded_at: Utc::now(),
            total_emissions: analysis.total_emissions.unwrap_or(0.0),
            total_price: analysis.total_price.unwrap_or(0.0),
            item_count: analysis.items.len(),
            store_name: analysis
                .store_info
                .and_then(|info| info.name)
                .unwrap_or_else(|| UNKNOWN_STORE.to_string()),
            categories: analysis.categories,
        }
    }
}

/// Receipts collected over one analysis period.
#[derive(Debug, Clone, PartialEq)]
pub struct ReceiptLedger {
    period: Period,
    receipts: Vec<ReceiptSummary>,
    next_id: u64,
}

impl Default for ReceiptLedger {
    fn default() -> Self {
        Self::new(Period::Monthly)
    }
}

impl ReceiptLedger {
    /// Ledger whose receipts cover one `period`. Only monthly and annual
    /// periods are meaningful; anything else behaves as annual.
    pub fn new(period: Period) -> Self {
        Self {
            period,
            receipts: Vec::new(),
            next_id: 1,
        }
    }

    /// Record an analysis and return its ledger id.
    pub fn add(&mut self, analysis: ReceiptAnalysis) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        let summary = ReceiptSummary::from_analysis(id, analysis);
        debug!(
            id,
            store = %summary.store_name,
            kg = summary.total_emissions,
            "Recorded receipt"
        );
        self.receipts.push(summary);
        id
    }

    /// Remove a receipt by id, returning it if it was present.
    pub fn remove(&mut self, id: u64) -> Option<ReceiptSummary> {
        let index = self.receipts.iter().position(|r| r.id == id)?;
        Some(self.receipts.remove(index))
    }

    pub fn receipts(&self) -> &[ReceiptSummary] {
        &self.receipts
    }

    pub fn len(&self) -> usize {
        self.receipts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.receipts.is_empty()
    }

    /// Sum of receipt emissions (kg CO₂).
    pub fn total_emissions(&self) -> f64 {
        self.receipts.iter().map(|r| r.total_emissions).sum()
    }

    pub fn total_price(&self) -> f64 {
        self.receipts.iter().map(|r| r.total_price).sum()
    }

    /// Footprint written to the profile: the receipt total for a monthly
    /// ledger, one twelfth of it otherwise.
    pub fn imported_emissions(&self) -> f64 {
        let divisor = if self.period == Period::Monthly {
            1.0
        } else {
            12.0
        };
        self.total_emissions() / divisor
    }

    /// Switch the profile to receipt analysis using this ledger's footprint.
    ///
    /// Returns the imported value. An empty ledger leaves the profile
    /// untouched and is an error.
    pub fn import_into(&self, profile: &mut HouseholdProfile) -> Result<f64, FootprintError> {
        if self.is_empty() {
            return Err(FootprintError::receipt(
                "No receipt data to import; add at least one receipt first",
            ));
        }

        let imported = self.imported_emissions();
        profile.grocery_method = GroceryMethod::ReceiptAnalysis.as_str().to_string();
        profile.grocery_co2 = NumericInput::Text(imported.to_string());
        profile.grocery_period = self.period.as_str().to_string();

        debug!(
            receipts = self.len(),
            kg = imported,
            period = %self.period,
            "Imported receipt footprint into profile"
        );
        Ok(imported)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    fn analysis(kg: f64) -> ReceiptAnalysis {
        ReceiptAnalysis {
            total_emissions: Some(kg),
            ..ReceiptAnalysis::default()
        }
    }

    #[test]
    fn test_parse_service_payload() {
        let payload = indoc! {r#"
            {
              "total_emissions": 12.4,
              "total_price": 48.9,
              "items": [{"name": "milk"}, {"name": "beef"}],
              "store_info": {"name": "K-Market"},
              "categories": {"dairy": 2.1, "meat": 9.8}
            }
        "#};
        let analysis = ReceiptAnalysis::from_json(payload).unwrap();
        let mut ledger = ReceiptLedger::default();
        ledger.add(analysis);

        let summary = &ledger.receipts()[0];
        assert_eq!(summary.total_emissions, 12.4);
        assert_eq!(summary.item_count, 2);
        assert_eq!(summary.store_name, "K-Market");
        assert_eq!(summary.categories.len(), 2);
    }

    #[test]
    fn test_missing_fields_default() {
        let analysis = ReceiptAnalysis::from_json("{}").unwrap();
        let mut ledger = ReceiptLedger::default();
        ledger.add(analysis);
        let summary = &ledger.receipts()[0];
        assert_eq!(summary.total_emissions, 0.0);
        assert_eq!(summary.store_name, UNKNOWN_STORE);
    }

    #[test]
    fn test_remove_updates_total() {
        let mut ledger = ReceiptLedger::default();
        let first = ledger.add(analysis(10.0));
        ledger.add(analysis(5.0));
        assert_eq!(ledger.total_emissions(), 15.0);

        assert!(ledger.remove(first).is_some());
        assert!(ledger.remove(first).is_none());
        assert_eq!(ledger.total_emissions(), 5.0);
    }

    #[test]
    fn test_import_monthly_ledger() {
        let mut ledger = ReceiptLedger::new(Period::Monthly);
        ledger.add(analysis(30.0));
        ledger.add(analysis(20.0));

        let mut profile = HouseholdProfile::default();
        let imported = ledger.import_into(&mut profile).unwrap();

        assert_eq!(imported, 50.0);
        assert_eq!(profile.grocery_method, "receipt-analysis");
        assert_eq!(profile.grocery_co2.value(), 50.0);
        assert_eq!(profile.grocery_period, "monthly");
    }

    #[test]
    fn test_import_annual_ledger_takes_twelfth() {
        let mut ledger = ReceiptLedger::new(Period::Annual);
        ledger.add(analysis(120.0));

        let mut profile = HouseholdProfile::default();
        assert_eq!(ledger.import_into(&mut profile).unwrap(), 10.0);
        assert_eq!(profile.grocery_period, "annual");
    }

    #[test]
    fn test_import_empty_ledger_fails() {
        let mut profile = HouseholdProfile::default();
        let before = profile.clone();
        assert!(ReceiptLedger::default().import_into(&mut profile).is_err());
        assert_eq!(profile, before);
    }
}
