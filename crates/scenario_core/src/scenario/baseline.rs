//! Fixed comparison baseline.
//!
//! The baseline is a constant reference point, not derived from any mix.

use super::metrics::ScenarioMetrics;

/// Label used for the user's scenario alongside the baseline.
pub const SCENARIO_LABEL: &str = "Future scenario";

/// Constant reference scenario for comparisons.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct BaselineScenario {
    /// Display label
    pub label: &'static str,
    /// Reference year
    pub year: i32,
    /// Baseline metrics
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub metrics: ScenarioMetrics,
}

impl BaselineScenario {
    /// Current-year baseline: 50 MtCO₂ emission, 60% self-sufficiency.
    pub const CURRENT: BaselineScenario = BaselineScenario {
        label: "Current (2024)",
        year: 2024,
        metrics: ScenarioMetrics {
            carbon_emission: 50.0,
            energy_self_sufficiency: 60.0,
        },
    };
}

impl Default for BaselineScenario {
    fn default() -> Self {
        Self::CURRENT
    }
}

/// Baseline metrics.
///
/// ```
/// use scenario_core::scenario::baseline;
///
/// assert_eq!(baseline().carbon_emission, 50.0);
/// assert_eq!(baseline().energy_self_sufficiency, 60.0);
/// ```
pub const fn baseline() -> ScenarioMetrics {
    BaselineScenario::CURRENT.metrics
}

/// Side-by-side comparison of a scenario against a baseline.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ScenarioComparison {
    /// Reference metrics
    pub baseline: ScenarioMetrics,
    /// Metrics of the scenario under study
    pub scenario: ScenarioMetrics,
    /// `scenario - baseline` carbon emission, MtCO₂
    pub carbon_emission_delta: f64,
    /// `scenario - baseline` self-sufficiency, percentage points
    pub energy_self_sufficiency_delta: f64,
}

impl ScenarioComparison {
    /// Compares `scenario` against an arbitrary reference.
    pub fn new(baseline: ScenarioMetrics, scenario: ScenarioMetrics) -> Self {
        Self {
            baseline,
            scenario,
            carbon_emission_delta: scenario.carbon_emission - baseline.carbon_emission,
            energy_self_sufficiency_delta: scenario.energy_self_sufficiency
                - baseline.energy_self_sufficiency,
        }
    }

    /// Compares `scenario` against [`BaselineScenario::CURRENT`].
    pub fn against_baseline(scenario: ScenarioMetrics) -> Self {
        Self::new(baseline(), scenario)
    }

    /// Whether the scenario emits less than the baseline.
    pub fn reduces_emissions(&self) -> bool {
        self.carbon_emission_delta < 0.0
    }

    /// Whether the scenario is more self-sufficient than the baseline.
    pub fn improves_self_sufficiency(&self) -> bool {
        self.energy_self_sufficiency_delta > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenario::compute_scenario;
    use approx::assert_relative_eq;

    #[test]
    fn test_baseline_constants() {
        let current = BaselineScenario::default();
        assert_eq!(current.year, 2024);
        assert_eq!(current.metrics, baseline());
        assert_eq!(current.label, "Current (2024)");
    }

    #[test]
    fn test_default_mix_against_baseline() {
        let outcome = compute_scenario(30, 20).unwrap();
        let comparison = ScenarioComparison::against_baseline(outcome.metrics);

        assert_relative_eq!(comparison.carbon_emission_delta, -15.0, epsilon = 1e-12);
        assert_relative_eq!(
            comparison.energy_self_sufficiency_delta,
            -16.0,
            epsilon = 1e-12
        );
        assert!(comparison.reduces_emissions());
        assert!(!comparison.improves_self_sufficiency());
    }

    #[test]
    fn test_all_fossil_against_baseline() {
        let outcome = compute_scenario(0, 0).unwrap();
        let comparison = ScenarioComparison::against_baseline(outcome.metrics);
        assert!(!comparison.reduces_emissions());
        assert_relative_eq!(comparison.carbon_emission_delta, 20.0, epsilon = 1e-12);
    }

    #[test]
    fn test_custom_reference() {
        let reference = ScenarioMetrics {
            carbon_emission: 10.0,
            energy_self_sufficiency: 90.0,
        };
        let comparison = ScenarioComparison::new(reference, reference);
        assert_eq!(comparison.carbon_emission_delta, 0.0);
        assert!(!comparison.reduces_emissions());
        assert!(!comparison.improves_self_sufficiency());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_baseline_serialises_flat() {
        let value = serde_json::to_value(BaselineScenario::CURRENT).unwrap();
        assert_eq!(value["carbonEmission"], 50.0);
        assert_eq!(value["energySelfSufficiency"], 60.0);
        assert_eq!(value["year"], 2024);
    }
}
