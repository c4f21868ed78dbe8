use crate::io::output::{OutputWriter, ReportOptions};
use crate::report::{BaselineComparison, EmissionsReport, ImprovementScenario};
use serde::Serialize;
use std::io::Write;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonReport<'a> {
    #[serde(flatten)]
    report: &'a EmissionsReport,
    baseline_comparison: BaselineComparison,
    #[serde(skip_serializing_if = "Option::is_none")]
    improvement_scenarios: Option<Vec<ImprovementScenario>>,
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_report(
        &mut self,
        report: &EmissionsReport,
        options: &ReportOptions,
    ) -> anyhow::Result<()> {
        let document = JsonReport {
            report,
            baseline_comparison: report.compare_to_baseline(),
            improvement_scenarios: options
                .show_scenarios
                .then(|| report.improvement_scenarios()),
        };
        let json = serde_json::to_string_pretty(&document)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::HouseholdProfile;
    use crate::report::compute;

    fn render(show_scenarios: bool) -> serde_json::Value {
        let report = compute(&HouseholdProfile::default());
        let mut buffer = Vec::new();
        JsonWriter::new(&mut buffer)
            .write_report(
                &report,
                &ReportOptions {
                    show_scenarios,
                    ..ReportOptions::default()
                },
            )
            .unwrap();
        serde_json::from_slice(&buffer).unwrap()
    }

    #[test]
    fn test_json_uses_camel_case_report_fields() {
        let json = render(false);
        assert!(json.get("totalEmissions").is_some());
        assert!(json.get("netZeroScore").is_some());
        assert_eq!(json["baselineComparison"]["baseline"], 4200.0);
        assert!(json.get("improvementScenarios").is_none());
    }

    #[test]
    fn test_json_includes_scenarios_on_request() {
        let json = render(true);
        assert_eq!(json["improvementScenarios"].as_array().map(Vec::len), Some(5));
    }
}
