//! # scenario_core: Energy Mix Scenario Calculator
//!
//! ## Layer 1 (Foundation) Role
//!
//! scenario_core is the bottom layer of the workspace, providing:
//! - Validated energy mix input with a dependent share bound (`scenario::input`)
//! - The scenario calculation model (`scenario::metrics`)
//! - The fixed comparison baseline (`scenario::baseline`)
//! - Preset mixes and share sweeps (`scenario::presets`, `scenario::sweep`)
//! - Source categories and error types (`types`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other workspace crates and performs no I/O:
//! - thiserror: Error derivation
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use scenario_core::scenario::{compute_scenario, EnergyMixInput, ScenarioComparison};
//!
//! let mix = EnergyMixInput::new(30, 20).unwrap();
//! assert_eq!(mix.fossil_share_percent(), 50);
//!
//! let outcome = compute_scenario(30, 20).unwrap();
//! let comparison = ScenarioComparison::against_baseline(outcome.metrics);
//! assert!(comparison.reduces_emissions());
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Enable serialisation with camelCase field names

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod scenario;
pub mod types;

pub use scenario::{compute_scenario, EnergyMixInput, ScenarioMetrics, ScenarioOutcome};
pub use types::{EnergySource, ScenarioError};
