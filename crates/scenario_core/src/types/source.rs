//! Energy source categories.
//!
//! Every unit of generation in a mix is attributed to exactly one of three
//! categories. Nuclear and renewable shares are chosen by the user; the
//! fossil share is whatever remains.
//!
//! # Examples
//!
//! ```
//! use scenario_core::types::EnergySource;
//!
//! let nuclear = EnergySource::Nuclear;
//! assert_eq!(nuclear.key(), "nuclear");
//! assert_eq!(nuclear.label(), "Nuclear");
//! assert!(nuclear.is_adjustable());
//! assert!(!EnergySource::Fossil.is_adjustable());
//! ```

use std::fmt;
use std::str::FromStr;

use super::error::ScenarioError;

/// Source category of a share in the energy mix.
///
/// # Variants
/// - `Nuclear`: Nuclear fission generation (user-adjustable)
/// - `Renewable`: Wind, solar, hydro and other renewables (user-adjustable)
/// - `Fossil`: Coal, gas and oil; derived as the remainder to 100%
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum EnergySource {
    /// Nuclear fission generation
    Nuclear,

    /// Renewable generation
    Renewable,

    /// Fossil fuel generation
    Fossil,
}

impl EnergySource {
    /// All sources in composition order.
    pub const ALL: [EnergySource; 3] = [
        EnergySource::Nuclear,
        EnergySource::Renewable,
        EnergySource::Fossil,
    ];

    /// Returns the lowercase identifier used on the wire and in the CLI.
    pub fn key(&self) -> &'static str {
        match self {
            EnergySource::Nuclear => "nuclear",
            EnergySource::Renewable => "renewable",
            EnergySource::Fossil => "fossil",
        }
    }

    /// Returns the human-readable label for legends and tables.
    pub fn label(&self) -> &'static str {
        match self {
            EnergySource::Nuclear => "Nuclear",
            EnergySource::Renewable => "Renewable",
            EnergySource::Fossil => "Fossil fuel",
        }
    }

    /// Returns the display colour as a hex RGB string.
    ///
    /// # Examples
    ///
    /// ```
    /// use scenario_core::types::EnergySource;
    ///
    /// assert_eq!(EnergySource::Nuclear.colour(), "#3E7CB1");
    /// assert_eq!(EnergySource::Renewable.colour(), "#53A548");
    /// assert_eq!(EnergySource::Fossil.colour(), "#D94F4F");
    /// ```
    pub fn colour(&self) -> &'static str {
        match self {
            EnergySource::Nuclear => "#3E7CB1",
            EnergySource::Renewable => "#53A548",
            EnergySource::Fossil => "#D94F4F",
        }
    }

    /// Whether the share can be set directly by a caller.
    pub fn is_adjustable(&self) -> bool {
        !matches!(self, EnergySource::Fossil)
    }
}

impl FromStr for EnergySource {
    type Err = ScenarioError;

    /// Parses a source identifier (case-insensitive).
    ///
    /// # Examples
    ///
    /// ```
    /// use scenario_core::types::EnergySource;
    ///
    /// let source: EnergySource = "Renewable".parse().unwrap();
    /// assert_eq!(source, EnergySource::Renewable);
    /// assert!("wind".parse::<EnergySource>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "nuclear" => Ok(EnergySource::Nuclear),
            "renewable" | "renewables" => Ok(EnergySource::Renewable),
            "fossil" => Ok(EnergySource::Fossil),
            _ => Err(ScenarioError::UnknownSource(s.to_string())),
        }
    }
}

impl fmt::Display for EnergySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}
