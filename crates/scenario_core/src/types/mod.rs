//! Core share and error types.
//!
//! This module provides:
//! - `source`: Energy source categories with labels and display colours
//! - `error`: Structured error type for validation, sweep, and lookup failures
//!
//! # Re-exports
//!
//! - [`EnergySource`] from `source`
//! - [`ScenarioError`] from `error`

pub mod error;
pub mod source;

pub use error::ScenarioError;
pub use source::EnergySource;
