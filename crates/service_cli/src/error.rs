//! Error types for the CLI.

use scenario_core::ScenarioError;
use thiserror::Error;

use crate::config::ConfigError;

/// CLI error type
#[derive(Debug, Error)]
pub enum CliError {
    /// Scenario calculation error
    #[error("Scenario error: {0}")]
    Scenario(#[from] ScenarioError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Invalid command-line argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Calculator self-check mismatch
    #[error("Self-check failed: {0}")]
    SelfCheck(String),

    /// Output serialisation error
    #[error("Serialisation error: {0}")]
    Serialisation(String),
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialisation(err.to_string())
    }
}

impl From<csv::Error> for CliError {
    fn from(err: csv::Error) -> Self {
        Self::Serialisation(err.to_string())
    }
}

/// CLI result type
pub type Result<T> = std::result::Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scenario_error_wraps() {
        let err: CliError = ScenarioError::InvalidStep(0).into();
        assert!(err.to_string().starts_with("Scenario error: Invalid sweep step"));
    }

    #[test]
    fn test_invalid_argument_display() {
        let err = CliError::InvalidArgument("bad".to_string());
        assert_eq!(err.to_string(), "Invalid argument: bad");
    }
}
