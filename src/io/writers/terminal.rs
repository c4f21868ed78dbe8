use crate::io::output::{OutputWriter, ReportOptions};
use crate::report::EmissionsReport;
use std::io::Write;

const RULE: &str = "───────────────────────────────────────────";

pub struct TerminalWriter<W: Write> {
    writer: W,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_report(
        &mut self,
        report: &EmissionsReport,
        options: &ReportOptions,
    ) -> anyhow::Result<()> {
        let f = options.formatting.formatter();
        let suffix = report.period_suffix();

        writeln!(
            self.writer,
            "{} {}",
            f.emoji("🌍", "=="),
            f.header("HOUSEHOLD CARBON FOOTPRINT")
        )?;
        writeln!(self.writer, "{}", RULE)?;
        writeln!(
            self.writer,
            "Total:          {} kg CO₂{}",
            f.bold(&format!("{:.0}", report.total_emissions)),
            suffix
        )?;
        writeln!(
            self.writer,
            "Net-zero score: {}",
            f.score(report.net_zero_score, report.score_band)
        )?;
        writeln!(self.writer, "Rating:         {}", f.rating(report.emission_rating))?;
        writeln!(
            self.writer,
            "Per person:     {:.0} kg CO₂/year",
            report.per_person_emissions
        )?;
        writeln!(
            self.writer,
            "Per m²:         {:.1} kg CO₂/m²/year",
            report.per_m2_emissions
        )?;
        writeln!(self.writer)?;

        writeln!(self.writer, "{}", f.header("Breakdown"))?;
        writeln!(self.writer, "{}", RULE)?;
        for (category, value) in report.displayed().iter() {
            writeln!(
                self.writer,
                "  {:<14}{:>8.0} kg CO₂{}",
                category.label(),
                value,
                suffix
            )?;
        }
        writeln!(self.writer)?;

        let comparison = report.compare_to_baseline();
        let line = format!(
            "{:.0} kg CO₂/year {} the Finnish average of {:.0} kg",
            comparison.difference.abs(),
            if comparison.is_below_baseline() {
                "below"
            } else {
                "above"
            },
            comparison.baseline
        );
        if comparison.is_below_baseline() {
            writeln!(self.writer, "{} {}", f.emoji("✓", "[OK]"), f.success(&line))?;
        } else {
            writeln!(self.writer, "{} {}", f.emoji("⚠", "[WARN]"), f.warning(&line))?;
        }

        if options.show_scenarios {
            writeln!(self.writer)?;
            writeln!(
                self.writer,
                "{} {}",
                f.emoji("💡", "[IDEA]"),
                f.header("Improvement scenarios")
            )?;
            writeln!(self.writer, "{}", RULE)?;
            for scenario in report.improvement_scenarios() {
                writeln!(
                    self.writer,
                    "  {:<34}{} kg CO₂/year",
                    scenario.kind.label(),
                    f.dim(&format!("-{:.0}", scenario.annual_saving))
                )?;
            }
        }

        Ok(())
    }
}
