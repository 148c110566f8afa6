//! Presets command implementation
//!
//! Lists the preset mixes with their evaluated metrics.

use scenario_core::scenario::{MixPreset, ScenarioOutcome};
use serde::Serialize;
use tracing::info;

use super::{render_csv, render_rows_table, OutputFormat, ScenarioRow};
use crate::Result;

/// Preset with its description and outcome, for JSON output
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PresetEntry {
    pub preset: MixPreset,
    pub description: &'static str,
    pub nuclear_share_percent: u8,
    pub renewable_share_percent: u8,
    #[serde(flatten)]
    pub outcome: ScenarioOutcome,
}

/// Evaluate every preset
pub fn build_entries() -> Vec<PresetEntry> {
    MixPreset::all()
        .into_iter()
        .map(|preset| {
            let input = preset.input();
            PresetEntry {
                preset,
                description: preset.description(),
                nuclear_share_percent: input.nuclear_share_percent(),
                renewable_share_percent: input.renewable_share_percent(),
                outcome: input.outcome(),
            }
        })
        .collect()
}

/// Run the presets command
pub fn run(format: OutputFormat) -> Result<()> {
    info!("Listing presets...");

    let rows: Vec<ScenarioRow> = MixPreset::all()
        .into_iter()
        .map(|preset| ScenarioRow::new(preset.name(), &preset.input()))
        .collect();

    match format {
        OutputFormat::Table => {
            println!("{}", render_rows_table(&rows));
            for preset in MixPreset::all() {
                println!("  {:<14} {}", preset.name(), preset.description());
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&build_entries())?),
        OutputFormat::Csv => print!("{}", render_csv(&rows)?),
    }

    Ok(())
}
