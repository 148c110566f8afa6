//! Scenario calculation model.
//!
//! This module provides:
//! - `input`: Validated [`EnergyMixInput`] with the dependent renewable bound
//! - `metrics`: [`compute_scenario`] and the derived [`ScenarioMetrics`]
//! - `baseline`: The fixed [`BaselineScenario`] and [`ScenarioComparison`]
//! - `presets`: Named [`MixPreset`] compositions
//! - `sweep`: One-dimensional sweeps over an adjustable share

pub mod baseline;
pub mod input;
pub mod metrics;
pub mod presets;
pub mod sweep;

pub use baseline::{baseline, BaselineScenario, ScenarioComparison, SCENARIO_LABEL};
pub use input::{CompositionSlice, EnergyMixInput, RawEnergyMix, TOTAL_SHARE_PERCENT};
pub use metrics::{
    compute_scenario, ScenarioMetrics, ScenarioOutcome, FOSSIL_CARBON_INTENSITY,
    NUCLEAR_SELF_SUFFICIENCY_WEIGHT, RENEWABLE_SELF_SUFFICIENCY_WEIGHT,
};
pub use presets::MixPreset;
pub use sweep::{sweep, sweep_nuclear, sweep_renewable, SweepPoint};
