//! Sweep command implementation
//!
//! Steps one adjustable share across its valid range with the other held fixed.

use scenario_core::scenario::sweep;
use scenario_core::EnergySource;
use tracing::{debug, info};

use super::{render_csv, render_rows_table, OutputFormat, ScenarioRow};
use crate::Result;

/// Evaluate the sweep and flatten it into rows
pub fn build_rows(vary: EnergySource, fixed: i64, step: i64) -> Result<Vec<ScenarioRow>> {
    let points = sweep(vary, fixed, step)?;
    Ok(points
        .iter()
        .map(|point| {
            let label = format!("{} {}%", vary.label(), point.input.share(vary));
            ScenarioRow::new(label, &point.input)
        })
        .collect())
}

/// Run the sweep command
pub fn run(vary: EnergySource, fixed: i64, step: i64, format: OutputFormat) -> Result<()> {
    info!("Sweeping scenario...");
    info!("  Varying: {}", vary);
    info!("  Fixed share: {}%", fixed);
    info!("  Step: {}", step);

    let rows = build_rows(vary, fixed, step)?;
    debug!(points = rows.len(), "Sweep computed");

    match format {
        OutputFormat::Table => println!("{}", render_rows_table(&rows)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&rows)?),
        OutputFormat::Csv => print!("{}", render_csv(&rows)?),
    }

    info!("Sweep complete");
    Ok(())
}
