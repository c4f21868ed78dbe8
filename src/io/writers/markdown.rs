use crate::constants::FACTOR_TABLE_VERSION;
use crate::io::output::{OutputWriter, ReportOptions};
use crate::report::EmissionsReport;
use chrono::{DateTime, Utc};
use std::io::Write;

pub struct MarkdownWriter<W: Write> {
    writer: W,
    generated_at: DateTime<Utc>,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self::with_timestamp(writer, Utc::now())
    }

    pub fn with_timestamp(writer: W, generated_at: DateTime<Utc>) -> Self {
        Self {
            writer,
            generated_at,
        }
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_report(
        &mut self,
        report: &EmissionsReport,
        options: &ReportOptions,
    ) -> anyhow::Result<()> {
        self.write_header()?;
        self.write_summary(report)?;
        self.write_breakdown(report)?;
        self.write_baseline(report)?;
        if options.show_scenarios {
            self.write_scenarios(report)?;
        }
        Ok(())
    }
}

impl<W: Write> MarkdownWriter<W> {
    fn write_header(&mut self) -> anyhow::Result<()> {
        writeln!(self.writer, "# Household Carbon Footprint")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "Generated: {}",
            self.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        )?;
        writeln!(self.writer, "Factor tables: {}", FACTOR_TABLE_VERSION)?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_summary(&mut self, report: &EmissionsReport) -> anyhow::Result<()> {
        let suffix = report.period_suffix();

        writeln!(self.writer, "## Summary")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Metric | Value |")?;
        writeln!(self.writer, "|--------|-------|")?;
        self.write_row(
            "Total emissions",
            &format!("{:.0} kg CO₂{}", report.total_emissions, suffix),
        )?;
        self.write_row(
            "Net-zero score",
            &format!("{}/100 ({})", report.net_zero_score, report.score_band),
        )?;
        self.write_row("Emission rating", &report.emission_rating.to_string())?;
        self.write_row(
            "Per person",
            &format!("{:.0} kg CO₂/year", report.per_person_emissions),
        )?;
        self.write_row(
            "Per m²",
            &format!("{:.1} kg CO₂/m²/year", report.per_m2_emissions),
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_breakdown(&mut self, report: &EmissionsReport) -> anyhow::Result<()> {
        let total = report.total_emissions;

        writeln!(self.writer, "## Breakdown")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Category | kg CO₂{} | Share |", report.period_suffix())?;
        writeln!(self.writer, "|----------|--------|-------|")?;
        for (category, value) in report.displayed().iter() {
            writeln!(
                self.writer,
                "| {} | {:.0} | {} |",
                category,
                value,
                share(value, total)
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_baseline(&mut self, report: &EmissionsReport) -> anyhow::Result<()> {
        let comparison = report.compare_to_baseline();
        let relation = if comparison.is_below_baseline() {
            "below"
        } else {
            "above"
        };

        writeln!(self.writer, "## Compared to the Finnish average")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "{:.0} kg CO₂/year {} the {:.0} kg average.",
            comparison.difference.abs(),
            relation,
            comparison.baseline
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_scenarios(&mut self, report: &EmissionsReport) -> anyhow::Result<()> {
        writeln!(self.writer, "## Improvement scenarios")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Change | Saving (kg CO₂/year) |")?;
        writeln!(self.writer, "|--------|----------------------|")?;
        for scenario in report.improvement_scenarios() {
            writeln!(
                self.writer,
                "| {} | {:.0} |",
                scenario.kind.label(),
                scenario.annual_saving
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_row(&mut self, metric: &str, value: &str) -> anyhow::Result<()> {
        writeln!(self.writer, "| {metric} | {value} |")?;
        Ok(())
    }
}

fn share(value: f64, total: f64) -> String {
    if total > 0.0 {
        format!("{:.1}%", value / total * 100.0)
    } else {
        "-".to_string()
    }
}
