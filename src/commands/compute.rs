use anyhow::Result;
use std::io::Write;
use std::path::PathBuf;
use tracing::{debug, info};

use crate::config::HomeprintConfig;
use crate::constants::DisplayMode;
use crate::effects::run_validation;
use crate::formatting::FormattingConfig;
use crate::io::output::{create_writer, OutputFormat, ReportOptions};
use crate::io::{self, ProfileFormat};
use crate::profile::validation::validate_preconditions;
use crate::report::compute;

#[derive(Debug, Clone, Default)]
pub struct ComputeConfig {
    pub profile: PathBuf,
    pub format: Option<OutputFormat>,
    pub output: Option<PathBuf>,
    pub display_mode: Option<DisplayMode>,
    pub scenarios: bool,
    pub plain: bool,
}

/// Settings after command-line flags have been layered over the config file.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Resolved {
    format: OutputFormat,
    display_mode: Option<DisplayMode>,
    options: ReportOptions,
}

fn resolve(config: &ComputeConfig, settings: &HomeprintConfig) -> Resolved {
    let plain = config.plain || settings.plain() || config.output.is_some();
    let formatting = if plain {
        FormattingConfig::plain()
    } else {
        FormattingConfig::from_env()
    };

    Resolved {
        format: config
            .format
            .or_else(|| settings.default_format())
            .unwrap_or_default(),
        display_mode: config.display_mode.or_else(|| settings.display_mode()),
        options: ReportOptions {
            show_scenarios: config.scenarios || settings.show_scenarios(),
            formatting,
        },
    }
}

pub fn handle_compute(config: ComputeConfig, settings: &HomeprintConfig) -> Result<()> {
    let mut profile = io::load_profile(&config.profile)?;
    info!(
        "Loaded {:?} profile from {}",
        ProfileFormat::from_path(&config.profile),
        config.profile.display()
    );

    let resolved = resolve(&config, settings);
    if let Some(mode) = resolved.display_mode {
        profile.display_mode = mode.as_str().to_string();
    }

    run_validation(validate_preconditions(&profile))?;

    let report = compute(&profile);
    debug!(
        total = report.annual_total(),
        rating = %report.emission_rating,
        score = report.net_zero_score,
        "Computed footprint"
    );

    let sink: Box<dyn Write> = match &config.output {
        Some(path) => Box::new(std::fs::File::create(path)?),
        None => Box::new(std::io::stdout()),
    };
    create_writer(resolved.format, sink).write_report(&report, &resolved.options)?;

    if let Some(path) = &config.output {
        info!("Report written to {}", path.display());
    }
    Ok(())
}
