//! Baseline command implementation

use scenario_core::scenario::BaselineScenario;

use super::OutputFormat;
use crate::{CliError, Result};

/// Render the baseline as text
pub fn render_text(baseline: &BaselineScenario) -> String {
    format!(
        "{}\n  Carbon emission:         {:.1} MtCO₂\n  Energy self-sufficiency: {:.1} %",
        baseline.label, baseline.metrics.carbon_emission, baseline.metrics.energy_self_sufficiency
    )
}

/// Run the baseline command
pub fn run(format: OutputFormat) -> Result<()> {
    let baseline = BaselineScenario::CURRENT;
    match format {
        OutputFormat::Table => println!("{}", render_text(&baseline)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&baseline)?),
        OutputFormat::Csv => {
            return Err(CliError::InvalidArgument(
                "CSV output is not available for the baseline. Supported: table, json".to_string(),
            ))
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_text() {
        let text = render_text(&BaselineScenario::CURRENT);
        assert!(text.starts_with("Current (2024)"));
        assert!(text.contains("50.0 MtCO₂"));
        assert!(text.contains("60.0 %"));
    }

    #[test]
    fn test_csv_rejected() {
        assert!(matches!(
            run(OutputFormat::Csv),
            Err(CliError::InvalidArgument(_))
        ));
    }
}
