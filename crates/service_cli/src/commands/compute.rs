//! Compute command implementation
//!
//! Evaluates a single mix and compares it against the fixed baseline.

use scenario_core::scenario::{
    BaselineScenario, CompositionSlice, EnergyMixInput, ScenarioComparison, ScenarioOutcome,
    SCENARIO_LABEL,
};
use serde::Serialize;
use tracing::{debug, info};

use super::{render_csv, OutputFormat, ScenarioRow};
use crate::Result;

/// Hint shown under every text summary
pub const SUMMARY_HINT: &str =
    "Raising the nuclear and renewable shares lowers carbon emission and raises self-sufficiency.";

/// Everything the compute command reports for one mix
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComputeReport {
    pub input: EnergyMixInput,
    #[serde(flatten)]
    pub outcome: ScenarioOutcome,
    pub composition: [CompositionSlice; 3],
    pub comparison: ScenarioComparison,
}

impl ComputeReport {
    /// Validate the shares and evaluate the mix
    pub fn build(nuclear: i64, renewable: i64) -> Result<Self> {
        let input = EnergyMixInput::new(nuclear, renewable)?;
        let outcome = input.outcome();
        Ok(Self {
            input,
            outcome,
            composition: input.composition(),
            comparison: ScenarioComparison::against_baseline(outcome.metrics),
        })
    }
}

/// Render the report as text: composition, summary, and baseline comparison
pub fn render_text(report: &ComputeReport) -> String {
    let mut lines = vec!["Energy mix".to_string()];
    for slice in &report.composition {
        lines.push(format!(
            "  {:<12} {:>3}%",
            slice.source.label(),
            slice.share_percent
        ));
    }

    let comparison = &report.comparison;
    lines.push(String::new());
    lines.push("Summary".to_string());
    lines.push(format!(
        "  Carbon emission:         {:.1} MtCO₂",
        report.outcome.carbon_emission()
    ));
    lines.push(format!(
        "  Energy self-sufficiency: {:.1} %",
        report.outcome.energy_self_sufficiency()
    ));

    lines.push(String::new());
    lines.push(format!(
        "  {:<26} {:>15} {:>15} {:>8}",
        "Comparison",
        BaselineScenario::CURRENT.label,
        SCENARIO_LABEL,
        "Change"
    ));
    lines.push(format!(
        "  {:<26} {:>15.1} {:>15.1} {:>+8.1}",
        "Carbon emission (MtCO₂)",
        comparison.baseline.carbon_emission,
        comparison.scenario.carbon_emission,
        comparison.carbon_emission_delta
    ));
    lines.push(format!(
        "  {:<26} {:>15.1} {:>15.1} {:>+8.1}",
        "Energy self-sufficiency (%)",
        comparison.baseline.energy_self_sufficiency,
        comparison.scenario.energy_self_sufficiency,
        comparison.energy_self_sufficiency_delta
    ));

    lines.push(String::new());
    lines.push(format!("Tip: {}", SUMMARY_HINT));
    lines.join("\n")
}

/// Run the compute command
pub fn run(nuclear: i64, renewable: i64, format: OutputFormat) -> Result<()> {
    info!("Computing scenario...");
    info!("  Nuclear share: {}%", nuclear);
    info!("  Renewable share: {}%", renewable);

    let report = ComputeReport::build(nuclear, renewable)?;
    debug!(
        fossil = report.outcome.fossil_share_percent,
        carbon_emission = report.outcome.carbon_emission(),
        energy_self_sufficiency = report.outcome.energy_self_sufficiency(),
        "Scenario computed"
    );

    match format {
        OutputFormat::Table => println!("{}", render_text(&report)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Csv => {
            let row = ScenarioRow::new(SCENARIO_LABEL, &report.input);
            print!("{}", render_csv(&[row])?);
        }
    }

    info!("Scenario complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CliError;
    use approx::assert_relative_eq;

    #[test]
    fn test_build_default_mix() {
        let report = ComputeReport::build(30, 20).unwrap();
        assert_eq!(report.outcome.fossil_share_percent, 50);
        assert_relative_eq!(report.comparison.carbon_emission_delta, -15.0, epsilon = 1e-9);
    }

    #[test]
    fn test_build_rejects_overflow() {
        let err = ComputeReport::build(60, 50).unwrap_err();
        assert!(matches!(err, CliError::Scenario(e) if e.is_out_of_range()));
    }

    #[test]
    fn test_render_text() {
        let report = ComputeReport::build(30, 20).unwrap();
        let text = render_text(&report);

        assert!(text.contains("Nuclear"));
        assert!(text.contains(" 50%"));
        assert!(text.contains("Carbon emission:         35.0 MtCO₂"));
        assert!(text.contains("Energy self-sufficiency: 44.0 %"));
        assert!(text.contains("Current (2024)"));
        assert!(text.contains("-15.0"));
        assert!(text.contains("-16.0"));
        assert!(text.ends_with(SUMMARY_HINT));
    }

    #[test]
    fn test_report_json_shape() {
        let report = ComputeReport::build(100, 0).unwrap();
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["fossilSharePercent"], 0);
        assert_eq!(value["input"]["nuclearSharePercent"], 100);
        assert_eq!(value["composition"][0]["source"], "nuclear");
        assert_eq!(value["composition"][0]["sharePercent"], 100);
        assert!(value["comparison"]["carbonEmissionDelta"].as_f64().unwrap() < 0.0);
    }
}
