//! CLI command implementations
//!
//! Each submodule implements a specific CLI command. Shared tabular and
//! CSV rendering of scenario rows lives here.

pub mod baseline;
pub mod check;
pub mod compute;
pub mod presets;
pub mod sweep;

use clap::ValueEnum;
use scenario_core::scenario::EnergyMixInput;
use serde::Serialize;

use crate::{CliError, Result};

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    #[default]
    Table,
    /// Pretty-printed JSON
    Json,
    /// Comma-separated values with a header row
    Csv,
}

/// One evaluated mix, flattened for tables and CSV
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioRow {
    pub label: String,
    pub nuclear_share_percent: u8,
    pub renewable_share_percent: u8,
    pub fossil_share_percent: u8,
    pub carbon_emission: f64,
    pub energy_self_sufficiency: f64,
}

impl ScenarioRow {
    pub fn new(label: impl Into<String>, mix: &EnergyMixInput) -> Self {
        let outcome = mix.outcome();
        Self {
            label: label.into(),
            nuclear_share_percent: mix.nuclear_share_percent(),
            renewable_share_percent: mix.renewable_share_percent(),
            fossil_share_percent: outcome.fossil_share_percent,
            carbon_emission: outcome.carbon_emission(),
            energy_self_sufficiency: outcome.energy_self_sufficiency(),
        }
    }
}

/// Render rows as a boxed table, metrics to one decimal place
pub fn render_rows_table(rows: &[ScenarioRow]) -> String {
    let label_width = rows
        .iter()
        .map(|row| row.label.chars().count())
        .max()
        .unwrap_or(0)
        .max("Scenario".len());
    let bar = "─".repeat(label_width + 2);

    let mut lines = vec![
        format!("┌{bar}┬─────────┬───────────┬────────┬──────────────┬────────────────┐"),
        format!(
            "│ {:<label_width$} │ Nuclear │ Renewable │ Fossil │ CO₂ (MtCO₂)  │ Self-suff. (%) │",
            "Scenario"
        ),
        format!("├{bar}┼─────────┼───────────┼────────┼──────────────┼────────────────┤"),
    ];

    for row in rows {
        lines.push(format!(
            "│ {:<label_width$} │ {:>6}% │ {:>8}% │ {:>5}% │ {:>12.1} │ {:>14.1} │",
            row.label,
            row.nuclear_share_percent,
            row.renewable_share_percent,
            row.fossil_share_percent,
            row.carbon_emission,
            row.energy_self_sufficiency,
        ));
    }

    lines.push(format!(
        "└{bar}┴─────────┴───────────┴────────┴──────────────┴────────────────┘"
    ));
    lines.join("\n")
}

/// Render rows as CSV with a header
pub fn render_csv(rows: &[ScenarioRow]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for row in rows {
        writer.serialize(row)?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| CliError::Serialisation(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| CliError::Serialisation(e.to_string()))
}
