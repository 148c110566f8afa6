//! Error types for structured error handling.
//!
//! This module provides:
//! - `ScenarioError`: Errors from share validation, sweeps, and preset lookup

use thiserror::Error;

use super::source::EnergySource;

/// Categorised scenario errors.
///
/// Every variant signals a caller programming error: the calculator is
/// total over valid input, so there is no retry policy and no partial result.
///
/// # Variants
/// - `OutOfRangeInput`: A share outside its domain, or the dependent
///   bound `renewable <= 100 - nuclear` violated
/// - `InvalidStep`: Sweep step smaller than one percentage point
/// - `NotAdjustable`: Attempt to drive a derived share (fossil) directly
/// - `UnknownPreset`: Preset name not recognised
/// - `UnknownSource`: Energy source name not recognised
///
/// # Examples
/// ```
/// use scenario_core::types::{EnergySource, ScenarioError};
///
/// let err = ScenarioError::OutOfRangeInput {
///     share: EnergySource::Renewable,
///     value: 50,
///     min: 0,
///     max: 40,
/// };
/// assert_eq!(
///     format!("{}", err),
///     "Out of range input: renewable share 50% outside [0, 40]"
/// );
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScenarioError {
    /// Share outside its valid domain.
    #[error("Out of range input: {share} share {value}% outside [{min}, {max}]")]
    OutOfRangeInput {
        /// The share that was rejected
        share: EnergySource,
        /// The value supplied by the caller
        value: i64,
        /// Lower bound of the valid domain
        min: i64,
        /// Upper bound of the valid domain (dependent on other shares)
        max: i64,
    },

    /// Sweep step must be at least one percentage point.
    #[error("Invalid sweep step: {0}. Must be at least 1")]
    InvalidStep(i64),

    /// The share is derived from the others and cannot be set.
    #[error("{0} share is derived from the other shares and cannot be set directly")]
    NotAdjustable(EnergySource),

    /// Unknown preset name.
    #[error("Unknown preset: {0}")]
    UnknownPreset(String),

    /// Unknown energy source name.
    #[error("Unknown energy source: {0}. Supported: nuclear, renewable, fossil")]
    UnknownSource(String),
}

impl ScenarioError {
    /// Returns `true` for the out-of-range input condition.
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, ScenarioError::OutOfRangeInput { .. })
    }

    /// Stable machine-readable code for the error kind.
    ///
    /// # Examples
    /// ```
    /// use scenario_core::types::ScenarioError;
    ///
    /// assert_eq!(ScenarioError::InvalidStep(0).code(), "invalid_step");
    /// ```
    pub fn code(&self) -> &'static str {
        match self {
            ScenarioError::OutOfRangeInput { .. } => "out_of_range_input",
            ScenarioError::InvalidStep(_) => "invalid_step",
            ScenarioError::NotAdjustable(_) => "not_adjustable",
            ScenarioError::UnknownPreset(_) => "unknown_preset",
            ScenarioError::UnknownSource(_) => "unknown_source",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_display() {
        let err = ScenarioError::OutOfRangeInput {
            share: EnergySource::Nuclear,
            value: 101,
            min: 0,
            max: 100,
        };
        assert_eq!(
            err.to_string(),
            "Out of range input: nuclear share 101% outside [0, 100]"
        );
        assert!(err.is_out_of_range());
        assert_eq!(err.code(), "out_of_range_input");
    }

    #[test]
    fn test_other_variants_display() {
        assert!(ScenarioError::InvalidStep(0).to_string().contains("at least 1"));
        assert!(!ScenarioError::InvalidStep(0).is_out_of_range());

        let err = ScenarioError::NotAdjustable(EnergySource::Fossil);
        assert!(err.to_string().starts_with("fossil share is derived"));

        let err = ScenarioError::UnknownPreset("coal-boom".to_string());
        assert_eq!(err.to_string(), "Unknown preset: coal-boom");
        assert_eq!(err.code(), "unknown_preset");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_error_serialisation() {
        let err = ScenarioError::InvalidStep(-5);
        let json = serde_json::to_string(&err).unwrap();
        let back: ScenarioError = serde_json::from_str(&json).unwrap();
        assert_eq!(err, back);
    }
}
