use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::info;

use crate::constants::Period;
use crate::io;
use crate::receipts::{ReceiptAnalysis, ReceiptLedger};

#[derive(Debug, Clone)]
pub struct ReceiptsConfig {
    pub profile: PathBuf,
    pub receipts: Vec<PathBuf>,
    pub period: Period,
    /// Where to write the updated profile; the input profile when absent.
    pub output: Option<PathBuf>,
}

/// Fold receipt analyses into a profile's grocery fields and save it.
///
/// Returns the imported footprint (kg CO₂ per grocery period).
pub fn import_receipts(config: ReceiptsConfig) -> Result<f64> {
    let mut profile = io::load_profile(&config.profile)?;

    let mut ledger = ReceiptLedger::new(config.period);
    for path in &config.receipts {
        let analysis = ReceiptAnalysis::from_json(&io::read_file(path)?)
            .with_context(|| format!("Failed to load receipt {}", path.display()))?;
        let id = ledger.add(analysis);
        tracing::debug!(id, receipt = %path.display(), "Added receipt");
    }

    let imported = ledger.import_into(&mut profile)?;

    let destination = config.output.as_ref().unwrap_or(&config.profile);
    io::save_profile(destination, &profile)?;
    info!(
        "Imported {:.2} kg CO₂ from {} receipt(s) into {}",
        imported,
        ledger.len(),
        destination.display()
    );
    println!(
        "Imported {:.2} kg CO₂ ({}) from {} receipt(s)",
        imported,
        config.period,
        ledger.len()
    );

    Ok(imported)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::NumericInput;

    #[test]
    fn test_import_writes_receipt_analysis_fields() {
        let dir = tempfile::tempdir().unwrap();
        let profile = dir.path().join("home.json");
        std::fs::write(&profile, "{}").unwrap();
        let receipt = dir.path().join("r1.json");
        std::fs::write(&receipt, r#"{"total_emissions": 36.0, "total_price": 80.0}"#).unwrap();

        let imported = import_receipts(ReceiptsConfig {
            profile: profile.clone(),
            receipts: vec![receipt],
            period: Period::Annual,
            output: None,
        })
        .unwrap();
        assert_eq!(imported, 3.0);

        let saved = io::load_profile(&profile).unwrap();
        assert_eq!(saved.grocery_method, "receipt-analysis");
        assert_eq!(saved.grocery_period, "annual");
        assert_eq!(saved.grocery_co2, NumericInput::Text("3".to_string()));
    }

    #[test]
    fn test_import_without_receipts_fails() {
        let dir = tempfile::tempdir().unwrap();
        let profile = dir.path().join("home.json");
        std::fs::write(&profile, "{}").unwrap();

        let result = import_receipts(ReceiptsConfig {
            profile,
            receipts: Vec::new(),
            period: Period::Monthly,
            output: None,
        });
        assert!(result.is_err());
    }
}
