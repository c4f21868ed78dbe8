//! Error types for profile handling and the command line.
//!
//! The calculation engine itself never fails: missing or malformed inputs
//! degrade to documented defaults. Errors arise only at the edges, when
//! reading profiles and configuration, validating caller preconditions, or
//! importing receipt data.
//!
//! # Example
//!
//! ```rust
//! use homeprint::errors::{FootprintError, format_error_list};
//!
//! let errors = vec![
//!     FootprintError::validation("residents", "must be at least 1"),
//!     FootprintError::validation("builtArea", "must be greater than 0"),
//! ];
//! let formatted = format_error_list(&errors);
//! assert!(formatted.contains("1. Validation error: residents"));
//! ```

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FootprintError {
    /// File system errors while reading or writing profiles and reports.
    #[error("I/O error: {message}")]
    Io {
        message: String,
        path: Option<PathBuf>,
    },

    /// A profile or payload could not be deserialized.
    #[error("Parse error: {message}")]
    Parse {
        message: String,
        path: Option<PathBuf>,
    },

    /// A profile field violates a precondition or is not a recognized option.
    #[error("Validation error: {field}: {message}")]
    Validation { field: String, message: String },

    /// Configuration file errors.
    #[error("Config error: {message}")]
    Config {
        message: String,
        path: Option<PathBuf>,
    },

    /// Receipt ledger errors.
    #[error("Receipt error: {0}")]
    Receipt(String),
}

impl FootprintError {
    pub fn io_with_path(message: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self::Io {
            message: message.into(),
            path: Some(path.into()),
        }
    }

    pub fn parse_with_path(message: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self::Parse {
            message: message.into(),
            path: Some(path.into()),
        }
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            path: None,
        }
    }

    pub fn receipt(message: impl Into<String>) -> Self {
        Self::Receipt(message.into())
    }

    /// Get the error message without context details.
    pub fn message(&self) -> &str {
        match self {
            Self::Io { message, .. } => message,
            Self::Parse { message, .. } => message,
            Self::Validation { message, .. } => message,
            Self::Config { message, .. } => message,
            Self::Receipt(message) => message,
        }
    }

    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Self::Io { path, .. } | Self::Parse { path, .. } | Self::Config { path, .. } => {
                path.as_ref()
            }
            _ => None,
        }
    }

    pub fn category(&self) -> &'static str {
        match self {
            Self::Io { .. } => "I/O",
            Self::Parse { .. } => "Parse",
            Self::Validation { .. } => "Validation",
            Self::Config { .. } => "Config",
            Self::Receipt(_) => "Receipt",
        }
    }

    /// Whether the user can fix this by editing their input.
    pub fn is_user_fixable(&self) -> bool {
        !matches!(self, Self::Io { .. })
    }
}

/// Format a list of errors for display, numbered from 1.
pub fn format_error_list(errors: &[FootprintError]) -> String {
    errors
        .iter()
        .enumerate()
        .map(|(i, e)| format!("  {}. {}", i + 1, e))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Collapse accumulated errors into a single `anyhow::Error`.
pub fn errors_to_anyhow(errors: Vec<FootprintError>) -> anyhow::Error {
    match errors.len() {
        0 => anyhow::anyhow!("Unknown error (no errors provided)"),
        1 => match errors.into_iter().next() {
            Some(error) => error.into(),
            None => anyhow::anyhow!("Unknown error (no errors provided)"),
        },
        _ => anyhow::anyhow!("Multiple errors occurred:\n{}", format_error_list(&errors)),
    }
}

/// Format an error report for the terminal.
pub fn format_error_report(errors: &[FootprintError]) -> String {
    if errors.is_empty() {
        return String::new();
    }

    let issue_count = if errors.len() == 1 {
        "1 issue".to_string()
    } else {
        format!("{} issues", errors.len())
    };

    let mut output = format!("Error: {} found:\n\n", issue_count);
    output.push_str(&format_error_list(errors));
    output.push_str("\n\nTip: Fix the issues above and run again.");
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_field() {
        let err = FootprintError::validation("vehicles[0].fuelType", "unknown fuel 'coal'");
        assert_eq!(
            err.to_string(),
            "Validation error: vehicles[0].fuelType: unknown fuel 'coal'"
        );
        assert_eq!(err.category(), "Validation");
        assert_eq!(err.message(), "unknown fuel 'coal'");
    }

    #[test]
    fn test_path_context() {
        let err = FootprintError::parse_with_path("bad toml", "home.toml");
        assert_eq!(err.path(), Some(&PathBuf::from("home.toml")));
        assert!(err.is_user_fixable());
        assert!(!FootprintError::io_with_path("denied", "x").is_user_fixable());
    }

    #[test]
    fn test_error_report() {
        let report = format_error_report(&[
            FootprintError::validation("residents", "must be at least 1"),
            FootprintError::receipt("empty"),
        ]);
        assert!(report.starts_with("Error: 2 issues found:"));
        assert!(report.contains("  2. Receipt error: empty"));
        assert_eq!(format_error_report(&[]), "");
    }

    #[test]
    fn test_errors_to_anyhow_single_and_multiple() {
        let single = errors_to_anyhow(vec![FootprintError::config("bad")]);
        assert_eq!(single.to_string(), "Config error: bad");

        let multiple = errors_to_anyhow(vec![
            FootprintError::config("a"),
            FootprintError::config("b"),
        ]);
        assert!(multiple.to_string().starts_with("Multiple errors occurred:"));
    }
}
