use serde::{Deserialize, Serialize};

use crate::constants::DisplayMode;
use crate::io::output::OutputFormat;

/// Root configuration structure, read from `.homeprint.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct HomeprintConfig {
    /// Output configuration
    #[serde(default)]
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct OutputConfig {
    /// terminal, json, or markdown
    pub default_format: Option<String>,
    /// yearly or monthly; overrides the profile's own display mode
    pub display_mode: Option<String>,
    /// Plain output: ASCII only, no colors, no emoji
    #[serde(default)]
    pub plain: Option<bool>,
    /// Include improvement scenarios in reports
    #[serde(default)]
    pub show_scenarios: Option<bool>,
}

impl HomeprintConfig {
    pub fn default_format(&self) -> Option<OutputFormat> {
        self.output
            .as_ref()
            .and_then(|o| o.default_format.as_deref())
            .and_then(OutputFormat::parse)
    }

    pub fn display_mode(&self) -> Option<DisplayMode> {
        self.output
            .as_ref()
            .and_then(|o| o.display_mode.as_deref())
            .and_then(DisplayMode::parse)
    }

    pub fn plain(&self) -> bool {
        self.output.as_ref().and_then(|o| o.plain).unwrap_or(false)
    }

    pub fn show_scenarios(&self) -> bool {
        self.output
            .as_ref()
            .and_then(|o| o.show_scenarios)
            .unwrap_or(false)
    }

    /// Human-readable problems with values that will be ignored.
    pub fn warnings(&self) -> Vec<String> {
        let Some(output) = &self.output else {
            return Vec::new();
        };

        let mut warnings = Vec::new();
        if let Some(format) = &output.default_format {
            if OutputFormat::parse(format).is_none() {
                warnings.push(format!(
                    "output.default_format '{}' is not one of: terminal, json, markdown",
                    format
                ));
            }
        }
        if let Some(mode) = &output.display_mode {
            if DisplayMode::parse(mode).is_none() {
                warnings.push(format!(
                    "output.display_mode '{}' is not one of: {}",
                    mode,
                    DisplayMode::names().join(", ")
                ));
            }
        }
        warnings
    }
}
