//! CLI configuration management.
//!
//! Handles loading configuration from a TOML file with environment
//! variable override support. A missing file yields the defaults.

use scenario_core::scenario::EnergyMixInput;
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Log level override
pub const ENV_LOG_LEVEL: &str = "ENERGYMIX_LOG_LEVEL";
/// Default nuclear share override
pub const ENV_NUCLEAR: &str = "ENERGYMIX_NUCLEAR";
/// Default renewable share override
pub const ENV_RENEWABLE: &str = "ENERGYMIX_RENEWABLE";

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// IO error reading the file
    #[error("IO error: {0}")]
    Io(String),

    /// TOML parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Invalid value in configuration
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// CLI configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Log level used when `RUST_LOG` is not set
    pub log_level: String,

    /// Nuclear share used when `--nuclear` is omitted
    pub default_nuclear: i64,

    /// Renewable share used when `--renewable` is omitted
    pub default_renewable: i64,

    /// Sweep step used when `--step` is omitted
    pub sweep_step: i64,
}

impl Default for CliConfig {
    fn default() -> Self {
        let mix = EnergyMixInput::default();
        Self {
            log_level: "info".to_string(),
            default_nuclear: i64::from(mix.nuclear_share_percent()),
            default_renewable: i64::from(mix.renewable_share_percent()),
            sweep_step: 10,
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load from `path` if it exists, otherwise return the defaults
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Apply environment variable overrides
    pub fn with_env_override(mut self) -> Result<Self, ConfigError> {
        if let Ok(log_level) = std::env::var(ENV_LOG_LEVEL) {
            self.log_level = log_level;
        }

        if let Ok(nuclear) = std::env::var(ENV_NUCLEAR) {
            self.default_nuclear = parse_share(ENV_NUCLEAR, &nuclear)?;
        }

        if let Ok(renewable) = std::env::var(ENV_RENEWABLE) {
            self.default_renewable = parse_share(ENV_RENEWABLE, &renewable)?;
        }

        Ok(self)
    }

    /// Validate the configuration
    ///
    /// The default shares must form a valid mix and the sweep step must be positive.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        if let Err(e) = self.default_mix() {
            errors.push(e.to_string());
        }

        if self.sweep_step < 1 {
            errors.push(format!("sweep_step must be at least 1, got {}", self.sweep_step));
        }

        if !matches!(
            self.log_level.to_lowercase().as_str(),
            "trace" | "debug" | "info" | "warn" | "error"
        ) {
            errors.push(format!("unknown log_level '{}'", self.log_level));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Invalid(errors.join("; ")))
        }
    }

    /// The default mix described by this configuration
    pub fn default_mix(&self) -> Result<EnergyMixInput, scenario_core::ScenarioError> {
        EnergyMixInput::new(self.default_nuclear, self.default_renewable)
    }
}

fn parse_share(var: &str, value: &str) -> Result<i64, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::Invalid(format!("{} must be an integer, got '{}'", var, value)))
}
