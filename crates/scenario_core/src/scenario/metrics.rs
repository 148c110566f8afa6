//! Derived scenario metrics.
//!
//! Both metrics are linear in the shares:
//!
//! - carbon emission (MtCO₂) = fossil × 0.7
//! - energy self-sufficiency (%) = nuclear × 0.8 + renewable × 1.0
//!
//! This is a pedagogical approximation, not a physical energy model.
//! No rounding is applied here; see [`ScenarioMetrics::rounded`] for display.

use crate::types::ScenarioError;

use super::input::EnergyMixInput;

/// Carbon emission per percentage point of fossil share, in MtCO₂.
pub const FOSSIL_CARBON_INTENSITY: f64 = 0.7;

/// Self-sufficiency contribution per percentage point of nuclear share.
pub const NUCLEAR_SELF_SUFFICIENCY_WEIGHT: f64 = 0.8;

/// Self-sufficiency contribution per percentage point of renewable share.
pub const RENEWABLE_SELF_SUFFICIENCY_WEIGHT: f64 = 1.0;

/// Metrics derived from an energy mix.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ScenarioMetrics {
    /// Annual carbon emission in megatonnes CO₂
    pub carbon_emission: f64,
    /// Energy self-sufficiency in percent
    pub energy_self_sufficiency: f64,
}

impl ScenarioMetrics {
    /// Computes metrics for a validated mix.
    pub fn from_mix(mix: &EnergyMixInput) -> Self {
        let fossil = f64::from(mix.fossil_share_percent());
        let nuclear = f64::from(mix.nuclear_share_percent());
        let renewable = f64::from(mix.renewable_share_percent());

        Self {
            carbon_emission: fossil * FOSSIL_CARBON_INTENSITY,
            energy_self_sufficiency: nuclear * NUCLEAR_SELF_SUFFICIENCY_WEIGHT
                + renewable * RENEWABLE_SELF_SUFFICIENCY_WEIGHT,
        }
    }

    /// Copy rounded half away from zero to `decimals` places, for display.
    ///
    /// ```
    /// use scenario_core::scenario::ScenarioMetrics;
    ///
    /// let m = ScenarioMetrics { carbon_emission: 20.349, energy_self_sufficiency: 60.05 };
    /// let r = m.rounded(1);
    /// assert_eq!(r.carbon_emission, 20.3);
    /// ```
    pub fn rounded(&self, decimals: u32) -> Self {
        let scale = 10_f64.powi(decimals as i32);
        let round = |x: f64| (x * scale).round() / scale;
        Self {
            carbon_emission: round(self.carbon_emission),
            energy_self_sufficiency: round(self.energy_self_sufficiency),
        }
    }
}

/// Result of [`compute_scenario`]: the derived fossil share and metrics.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ScenarioOutcome {
    /// Fossil share in percent, `100 - nuclear - renewable`
    pub fossil_share_percent: u8,
    /// Derived metrics
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub metrics: ScenarioMetrics,
}

impl ScenarioOutcome {
    /// Carbon emission in MtCO₂.
    #[inline]
    pub fn carbon_emission(&self) -> f64 {
        self.metrics.carbon_emission
    }

    /// Energy self-sufficiency in percent.
    #[inline]
    pub fn energy_self_sufficiency(&self) -> f64 {
        self.metrics.energy_self_sufficiency
    }
}

/// Computes the fossil share and derived metrics for a share pair.
///
/// Pure and deterministic: identical input yields bit-identical output.
///
/// # Errors
///
/// Returns `ScenarioError::OutOfRangeInput` when `nuclear` is outside
/// [0, 100] or `renewable` is outside [0, 100 - nuclear]. Out-of-range
/// input is never clamped.
///
/// # Examples
///
/// ```
/// use scenario_core::scenario::compute_scenario;
///
/// let outcome = compute_scenario(30, 20).unwrap();
/// assert_eq!(outcome.fossil_share_percent, 50);
/// assert!((outcome.carbon_emission() - 35.0).abs() < 1e-12);
/// assert!((outcome.energy_self_sufficiency() - 44.0).abs() < 1e-12);
///
/// assert!(compute_scenario(60, 50).is_err());
/// ```
pub fn compute_scenario(nuclear: i64, renewable: i64) -> Result<ScenarioOutcome, ScenarioError> {
    EnergyMixInput::new(nuclear, renewable).map(|mix| mix.outcome())
}
