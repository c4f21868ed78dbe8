use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::io::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "homeprint")]
#[command(about = "Household carbon footprint calculator", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Calculate the footprint of a household profile
    Compute {
        /// Profile file (.json, .toml, .yaml)
        profile: PathBuf,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Show absolute figures per year or per month
        #[arg(long, value_parser = ["yearly", "monthly"])]
        display_mode: Option<String>,

        /// Include improvement scenarios
        #[arg(long)]
        scenarios: bool,

        /// Plain output: ASCII only, no colors, no emoji
        #[arg(long)]
        plain: bool,
    },

    /// Check a profile and list every problem found
    Validate {
        /// Profile file (.json, .toml, .yaml)
        profile: PathBuf,

        /// Plain output: ASCII only, no colors, no emoji
        #[arg(long)]
        plain: bool,
    },

    /// Write a sample profile
    Init {
        /// Where to write the profile
        #[arg(long, default_value = crate::commands::init::DEFAULT_PROFILE_PATH)]
        path: PathBuf,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// List accepted values for every option field
    Options {
        /// Plain output: ASCII only, no colors, no emoji
        #[arg(long)]
        plain: bool,
    },

    /// Import receipt analyses into a profile's grocery fields
    Receipts {
        /// Profile file to update
        profile: PathBuf,

        /// Receipt analysis JSON files
        #[arg(required = true)]
        receipts: Vec<PathBuf>,

        /// Period the receipts cover
        #[arg(long, default_value = "monthly", value_parser = ["monthly", "annual"])]
        period: String,

        /// Write the updated profile here instead of in place
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}
