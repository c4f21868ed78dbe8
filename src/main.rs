use anyhow::{Context, Result};
use clap::Parser;
use homeprint::cli::{Cli, Commands};
use homeprint::commands::{self, ComputeConfig, ReceiptsConfig};
use homeprint::config::load_config;
use homeprint::constants::{DisplayMode, Period};
use homeprint::formatting::FormattingConfig;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Compute {
            profile,
            format,
            output,
            display_mode,
            scenarios,
            plain,
        } => {
            let settings = load_config();
            let config = ComputeConfig {
                profile,
                format,
                output,
                display_mode: display_mode.as_deref().and_then(DisplayMode::parse),
                scenarios,
                plain,
            };
            commands::handle_compute(config, &settings)
        }
        Commands::Validate { profile, plain } => {
            commands::validate_profile_file(&profile, create_formatting_config(plain))
        }
        Commands::Init { path, force } => commands::init_profile(&path, force),
        Commands::Options { plain } => {
            commands::list_options(create_formatting_config(plain));
            Ok(())
        }
        Commands::Receipts {
            profile,
            receipts,
            period,
            output,
        } => {
            let period = Period::parse(&period)
                .with_context(|| format!("Unsupported receipt period '{}'", period))?;
            commands::import_receipts(ReceiptsConfig {
                profile,
                receipts,
                period,
                output,
            })
            .map(|_| ())
        }
    }
}

/// `RUST_LOG` wins over `-v`; logs go to stderr so reports stay pipeable.
fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("homeprint={}", level).into()),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn create_formatting_config(plain: bool) -> FormattingConfig {
    if plain || load_config().plain() {
        FormattingConfig::plain()
    } else {
        FormattingConfig::from_env()
    }
}
