use anyhow::Result;
use std::path::Path;

use crate::effects::collect_errors;
use crate::errors::format_error_report;
use crate::formatting::FormattingConfig;
use crate::io;
use crate::profile::validate_profile;

/// Check a profile file and print every issue found.
///
/// Returns an error when the profile has issues so the process exits
/// non-zero.
pub fn validate_profile_file(path: &Path, formatting: FormattingConfig) -> Result<()> {
    let profile = io::load_profile(path)?;
    let errors = collect_errors(validate_profile(&profile));
    let f = formatting.formatter();

    if errors.is_empty() {
        println!(
            "{} {}",
            f.emoji("✓", "[OK]"),
            f.success(&format!("{} is valid", path.display()))
        );
        return Ok(());
    }

    eprintln!("{}", f.error(&format_error_report(&errors)));
    tracing::debug!(issues = errors.len(), "Profile validation failed");
    anyhow::bail!(
        "{} has {} issue(s)",
        path.display(),
        errors.len()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_and_invalid_profiles() {
        let dir = tempfile::tempdir().unwrap();

        let good = dir.path().join("good.json");
        std::fs::write(&good, "{}").unwrap();
        assert!(validate_profile_file(&good, FormattingConfig::plain()).is_ok());

        let bad = dir.path().join("bad.json");
        std::fs::write(&bad, r#"{"residents":0,"heatingSystem":"peat"}"#).unwrap();
        let error = validate_profile_file(&bad, FormattingConfig::plain()).unwrap_err();
        assert!(error.to_string().contains("2 issue(s)"), "{}", error);
    }
}
