//! Check command implementation
//!
//! Validates the loaded configuration and runs the calculator against its
//! reference scenarios.

use scenario_core::compute_scenario;
use tracing::{info, warn};

use crate::config::CliConfig;
use crate::{CliError, Result};

/// Reference scenarios: (nuclear, renewable, fossil, carbon, self-sufficiency)
pub const REFERENCE_SCENARIOS: [(i64, i64, u8, f64, f64); 3] = [
    (100, 0, 0, 0.0, 80.0),
    (0, 0, 100, 70.0, 0.0),
    (30, 20, 50, 35.0, 44.0),
];

const TOLERANCE: f64 = 1e-9;

/// Evaluate the reference scenarios, returning a description of each mismatch
pub fn self_check() -> Vec<String> {
    let mut failures = Vec::new();

    for (nuclear, renewable, fossil, carbon, self_sufficiency) in REFERENCE_SCENARIOS {
        match compute_scenario(nuclear, renewable) {
            Ok(outcome) => {
                if outcome.fossil_share_percent != fossil
                    || (outcome.carbon_emission() - carbon).abs() > TOLERANCE
                    || (outcome.energy_self_sufficiency() - self_sufficiency).abs() > TOLERANCE
                {
                    failures.push(format!(
                        "({}, {}) gave {:?}",
                        nuclear, renewable, outcome
                    ));
                }
            }
            Err(e) => failures.push(format!("({}, {}) failed: {}", nuclear, renewable, e)),
        }
    }

    if compute_scenario(60, 50).is_ok() {
        failures.push("(60, 50) was accepted".to_string());
    }

    failures
}

/// Run the check command
pub fn run(config: &CliConfig, config_path: &str) -> Result<()> {
    info!("Checking configuration...");
    println!("Configuration file: {}", config_path);
    println!("  log_level:         {}", config.log_level);
    println!("  default_nuclear:   {}%", config.default_nuclear);
    println!("  default_renewable: {}%", config.default_renewable);
    println!("  sweep_step:        {}", config.sweep_step);

    config.validate()?;
    println!("Configuration: OK");

    let failures = self_check();
    if failures.is_empty() {
        println!("Calculator self-check: OK ({} scenarios)", REFERENCE_SCENARIOS.len() + 1);
        Ok(())
    } else {
        for failure in &failures {
            warn!("Self-check mismatch: {}", failure);
        }
        Err(CliError::SelfCheck(failures.join("; ")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_self_check_passes() {
        assert!(self_check().is_empty());
    }

    #[test]
    fn test_run_rejects_invalid_config() {
        let config = CliConfig {
            sweep_step: 0,
            ..Default::default()
        };
        assert!(matches!(
            run(&config, "test.toml"),
            Err(CliError::Config(_))
        ));
    }

    #[test]
    fn test_run_with_defaults() {
        assert!(run(&CliConfig::default(), "energymix.toml").is_ok());
    }
}
