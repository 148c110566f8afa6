//! Preset mixes for quick exploration.
//!
//! Provides ready-made compositions:
//! - The default 30/20 split
//! - Nuclear-led and renewable-led transitions
//! - A balanced three-way split
//! - The all-fossil and carbon-free extremes

use std::fmt;
use std::str::FromStr;

use crate::types::ScenarioError;

use super::input::EnergyMixInput;

/// Named preset mixes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum MixPreset {
    /// 30% nuclear, 20% renewable
    Default,
    /// 60% nuclear, 20% renewable
    NuclearLed,
    /// 20% nuclear, 60% renewable
    RenewableLed,
    /// 34% nuclear, 33% renewable, 33% fossil
    Balanced,
    /// No nuclear or renewable generation
    FossilOnly,
    /// 50% nuclear, 50% renewable
    CarbonFree,
}

impl MixPreset {
    /// All presets in display order.
    pub fn all() -> Vec<Self> {
        vec![
            Self::Default,
            Self::NuclearLed,
            Self::RenewableLed,
            Self::Balanced,
            Self::FossilOnly,
            Self::CarbonFree,
        ]
    }

    /// Kebab-case identifier.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::NuclearLed => "nuclear-led",
            Self::RenewableLed => "renewable-led",
            Self::Balanced => "balanced",
            Self::FossilOnly => "fossil-only",
            Self::CarbonFree => "carbon-free",
        }
    }

    /// One-line description.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Default => "Starting point: 30% nuclear, 20% renewable",
            Self::NuclearLed => "Transition led by expanded nuclear capacity",
            Self::RenewableLed => "Transition led by renewable build-out",
            Self::Balanced => "Roughly equal thirds across all sources",
            Self::FossilOnly => "Reference extreme with no low-carbon generation",
            Self::CarbonFree => "Fossil fully phased out, even nuclear/renewable split",
        }
    }

    /// The mix this preset stands for.
    pub fn input(&self) -> EnergyMixInput {
        let (nuclear, renewable) = match self {
            Self::Default => (30, 20),
            Self::NuclearLed => (60, 20),
            Self::RenewableLed => (20, 60),
            Self::Balanced => (34, 33),
            Self::FossilOnly => (0, 0),
            Self::CarbonFree => (50, 50),
        };
        EnergyMixInput::from_validated(nuclear, renewable)
    }
}

impl FromStr for MixPreset {
    type Err = ScenarioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalised = s.trim().to_lowercase().replace('_', "-");
        Self::all()
            .into_iter()
            .find(|preset| preset.name() == normalised)
            .ok_or_else(|| ScenarioError::UnknownPreset(s.to_string()))
    }
}

impl fmt::Display for MixPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
