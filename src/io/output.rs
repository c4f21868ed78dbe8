use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::io::Write;

use super::writers::{JsonWriter, MarkdownWriter, TerminalWriter};
use crate::formatting::FormattingConfig;
use crate::report::EmissionsReport;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Terminal,
    Json,
    Markdown,
}

impl OutputFormat {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "terminal" => Some(Self::Terminal),
            "json" => Some(Self::Json),
            "markdown" | "md" => Some(Self::Markdown),
            _ => None,
        }
    }
}

/// Rendering switches shared by every writer.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ReportOptions {
    pub show_scenarios: bool,
    pub formatting: FormattingConfig,
}

pub trait OutputWriter {
    fn write_report(
        &mut self,
        report: &EmissionsReport,
        options: &ReportOptions,
    ) -> anyhow::Result<()>;
}

pub fn create_writer<'a>(
    format: OutputFormat,
    writer: Box<dyn Write + 'a>,
) -> Box<dyn OutputWriter + 'a> {
    match format {
        OutputFormat::Terminal => Box::new(TerminalWriter::new(writer)),
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(writer)),
    }
}

/// Render a report to a string.
pub fn render_report(
    report: &EmissionsReport,
    format: OutputFormat,
    options: &ReportOptions,
) -> anyhow::Result<String> {
    let mut buffer = Vec::new();
    create_writer(format, Box::new(&mut buffer)).write_report(report, options)?;
    Ok(String::from_utf8(buffer)?)
}
