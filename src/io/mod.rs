pub mod output;
pub mod writers;

use anyhow::Result;
use std::fs;
use std::path::Path;

use crate::errors::FootprintError;
use crate::profile::HouseholdProfile;

pub fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| {
        FootprintError::io_with_path(format!("Failed to read {}: {}", path.display(), e), path)
            .into()
    })
}

pub fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|e| {
        FootprintError::io_with_path(format!("Failed to write {}: {}", path.display(), e), path)
            .into()
    })
}

/// Serialization used for a profile file, chosen by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileFormat {
    Json,
    Toml,
    Yaml,
}

impl ProfileFormat {
    /// JSON unless the extension says otherwise.
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("toml") => Self::Toml,
            Some("yaml" | "yml") => Self::Yaml,
            _ => Self::Json,
        }
    }

    pub fn parse_profile(self, contents: &str) -> Result<HouseholdProfile> {
        let profile = match self {
            Self::Json => serde_json::from_str(contents)?,
            Self::Toml => toml::from_str(contents)?,
            Self::Yaml => serde_yaml::from_str(contents)?,
        };
        Ok(profile)
    }

    pub fn render_profile(self, profile: &HouseholdProfile) -> Result<String> {
        let rendered = match self {
            Self::Json => serde_json::to_string_pretty(profile)?,
            Self::Toml => toml::to_string_pretty(profile)?,
            Self::Yaml => serde_yaml::to_string(profile)?,
        };
        Ok(rendered)
    }
}

pub fn load_profile(path: &Path) -> Result<HouseholdProfile> {
    let contents = read_file(path)?;
    ProfileFormat::from_path(path)
        .parse_profile(&contents)
        .map_err(|e| {
            FootprintError::parse_with_path(
                format!("Failed to parse profile {}: {}", path.display(), e),
                path,
            )
            .into()
        })
}

pub fn save_profile(path: &Path, profile: &HouseholdProfile) -> Result<()> {
    let rendered = ProfileFormat::from_path(path).render_profile(profile)?;
    write_file(path, &rendered)
}
