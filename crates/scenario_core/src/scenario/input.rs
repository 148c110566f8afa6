//! Validated energy mix input.
//!
//! An [`EnergyMixInput`] can only be obtained through [`EnergyMixInput::new`],
//! which enforces the dependent bound `renewable <= 100 - nuclear`. The
//! fossil share is derived, so the three shares always sum to exactly 100.

use crate::types::{EnergySource, ScenarioError};

use super::metrics::{ScenarioMetrics, ScenarioOutcome};

/// Total of all shares in a mix, in percent.
pub const TOTAL_SHARE_PERCENT: u8 = 100;

/// Unvalidated share pair as supplied by a caller.
///
/// Use `EnergyMixInput::try_from` to validate it. Values are signed so that
/// negative input can be reported rather than wrapped.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct RawEnergyMix {
    /// Requested nuclear share in percent
    pub nuclear_share_percent: i64,
    /// Requested renewable share in percent
    pub renewable_share_percent: i64,
}

/// Composition of generation by source, with shares summing to 100.
///
/// # Examples
///
/// ```
/// use scenario_core::scenario::EnergyMixInput;
///
/// let mix = EnergyMixInput::new(30, 20).unwrap();
/// assert_eq!(mix.fossil_share_percent(), 50);
///
/// // Renewable may not push the total over 100
/// assert!(EnergyMixInput::new(60, 50).is_err());
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(rename_all = "camelCase", try_from = "RawEnergyMix")
)]
pub struct EnergyMixInput {
    nuclear_share_percent: u8,
    renewable_share_percent: u8,
}

/// One source's slice of the mix.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct CompositionSlice {
    /// Source category
    pub source: EnergySource,
    /// Share of total generation in percent
    pub share_percent: u8,
}

impl EnergyMixInput {
    /// Creates a mix from nuclear and renewable shares.
    ///
    /// # Errors
    ///
    /// Returns `ScenarioError::OutOfRangeInput` when `nuclear` is outside
    /// [0, 100] or `renewable` is outside [0, 100 - nuclear].
    pub fn new(nuclear: i64, renewable: i64) -> Result<Self, ScenarioError> {
        let total = i64::from(TOTAL_SHARE_PERCENT);

        if !(0..=total).contains(&nuclear) {
            return Err(ScenarioError::OutOfRangeInput {
                share: EnergySource::Nuclear,
                value: nuclear,
                min: 0,
                max: total,
            });
        }

        let renewable_max = total - nuclear;
        if !(0..=renewable_max).contains(&renewable) {
            return Err(ScenarioError::OutOfRangeInput {
                share: EnergySource::Renewable,
                value: renewable,
                min: 0,
                max: renewable_max,
            });
        }

        Ok(Self::from_validated(nuclear as u8, renewable as u8))
    }

    /// Builds a mix from shares already known to satisfy the bounds.
    pub(crate) const fn from_validated(nuclear: u8, renewable: u8) -> Self {
        debug_assert!(nuclear as u16 + renewable as u16 <= TOTAL_SHARE_PERCENT as u16);
        Self {
            nuclear_share_percent: nuclear,
            renewable_share_percent: renewable,
        }
    }

    /// Largest renewable share permitted alongside the given nuclear share.
    ///
    /// This is the upper bound of a dependent renewable control.
    ///
    /// ```
    /// use scenario_core::scenario::EnergyMixInput;
    ///
    /// assert_eq!(EnergyMixInput::renewable_upper_bound(30), 70);
    /// assert_eq!(EnergyMixInput::renewable_upper_bound(100), 0);
    /// ```
    pub const fn renewable_upper_bound(nuclear: u8) -> u8 {
        TOTAL_SHARE_PERCENT.saturating_sub(nuclear)
    }

    /// Nuclear share in percent.
    #[inline]
    pub fn nuclear_share_percent(&self) -> u8 {
        self.nuclear_share_percent
    }

    /// Renewable share in percent.
    #[inline]
    pub fn renewable_share_percent(&self) -> u8 {
        self.renewable_share_percent
    }

    /// Fossil share in percent, the remainder to 100.
    #[inline]
    pub fn fossil_share_percent(&self) -> u8 {
        TOTAL_SHARE_PERCENT - self.nuclear_share_percent - self.renewable_share_percent
    }

    /// Share attributed to the given source.
    pub fn share(&self, source: EnergySource) -> u8 {
        match source {
            EnergySource::Nuclear => self.nuclear_share_percent(),
            EnergySource::Renewable => self.renewable_share_percent(),
            EnergySource::Fossil => self.fossil_share_percent(),
        }
    }

    /// Composition breakdown in the order nuclear, renewable, fossil.
    pub fn composition(&self) -> [CompositionSlice; 3] {
        EnergySource::ALL.map(|source| CompositionSlice {
            source,
            share_percent: self.share(source),
        })
    }

    /// Returns a copy with a different nuclear share, keeping renewable.
    ///
    /// # Errors
    ///
    /// Fails with `OutOfRangeInput` if the current renewable share no longer
    /// fits under the new nuclear share.
    pub fn with_nuclear(&self, nuclear: i64) -> Result<Self, ScenarioError> {
        Self::new(nuclear, i64::from(self.renewable_share_percent))
    }

    /// Returns a copy with a different renewable share, keeping nuclear.
    pub fn with_renewable(&self, renewable: i64) -> Result<Self, ScenarioError> {
        Self::new(i64::from(self.nuclear_share_percent), renewable)
    }

    /// Derived metrics for this mix.
    #[inline]
    pub fn metrics(&self) -> ScenarioMetrics {
        ScenarioMetrics::from_mix(self)
    }

    /// Fossil share together with the derived metrics.
    #[inline]
    pub fn outcome(&self) -> ScenarioOutcome {
        ScenarioOutcome {
            fossil_share_percent: self.fossil_share_percent(),
            metrics: self.metrics(),
        }
    }
}

impl Default for EnergyMixInput {
    /// 30% nuclear, 20% renewable, 50% fossil.
    fn default() -> Self {
        Self::from_validated(30, 20)
    }
}

impl TryFrom<RawEnergyMix> for EnergyMixInput {
    type Error = ScenarioError;

    fn try_from(raw: RawEnergyMix) -> Result<Self, Self::Error> {
        Self::new(raw.nuclear_share_percent, raw.renewable_share_percent)
    }
}

impl From<EnergyMixInput> for RawEnergyMix {
    fn from(mix: EnergyMixInput) -> Self {
        Self {
            nuclear_share_percent: i64::from(mix.nuclear_share_percent),
            renewable_share_percent: i64::from(mix.renewable_share_percent),
        }
    }
}
