//! One-dimensional sweeps over an adjustable share.
//!
//! A sweep holds one adjustable share fixed and steps the other from 0 up
//! to its dependent upper bound, inclusive. The upper bound is always the
//! last point even when it is not a multiple of the step.

use crate::types::{EnergySource, ScenarioError};

use super::input::{EnergyMixInput, TOTAL_SHARE_PERCENT};
use super::metrics::ScenarioOutcome;

/// A single evaluated point of a sweep.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct SweepPoint {
    /// Mix at this point
    pub input: EnergyMixInput,
    /// Fossil share and metrics at this point
    pub outcome: ScenarioOutcome,
}

impl SweepPoint {
    fn at(input: EnergyMixInput) -> Self {
        Self {
            input,
            outcome: input.outcome(),
        }
    }
}

/// Sweeps `vary` while holding the other adjustable share at `fixed`.
///
/// # Errors
///
/// - `NotAdjustable` when `vary` is the derived fossil share
/// - `OutOfRangeInput` when `fixed` is outside [0, 100]
/// - `InvalidStep` when `step < 1`
///
/// # Examples
///
/// ```
/// use scenario_core::scenario::sweep;
/// use scenario_core::types::EnergySource;
///
/// let points = sweep(EnergySource::Nuclear, 20, 25).unwrap();
/// let nuclear: Vec<u8> = points.iter().map(|p| p.input.nuclear_share_percent()).collect();
/// assert_eq!(nuclear, vec![0, 25, 50, 75, 80]);
/// ```
pub fn sweep(vary: EnergySource, fixed: i64, step: i64) -> Result<Vec<SweepPoint>, ScenarioError> {
    match vary {
        EnergySource::Nuclear => sweep_nuclear(fixed, step),
        EnergySource::Renewable => sweep_renewable(fixed, step),
        EnergySource::Fossil => Err(ScenarioError::NotAdjustable(EnergySource::Fossil)),
    }
}

/// Steps nuclear from 0 to `100 - renewable` with renewable fixed.
pub fn sweep_nuclear(renewable: i64, step: i64) -> Result<Vec<SweepPoint>, ScenarioError> {
    let fixed = check_fixed(EnergySource::Renewable, renewable)?;
    let values = steps(TOTAL_SHARE_PERCENT - fixed, step)?;
    Ok(values
        .into_iter()
        .map(|nuclear| SweepPoint::at(EnergyMixInput::from_validated(nuclear, fixed)))
        .collect())
}

/// Steps renewable from 0 to `100 - nuclear` with nuclear fixed.
pub fn sweep_renewable(nuclear: i64, step: i64) -> Result<Vec<SweepPoint>, ScenarioError> {
    let fixed = check_fixed(EnergySource::Nuclear, nuclear)?;
    let values = steps(TOTAL_SHARE_PERCENT - fixed, step)?;
    Ok(values
        .into_iter()
        .map(|renewable| SweepPoint::at(EnergyMixInput::from_validated(fixed, renewable)))
        .collect())
}

fn check_fixed(share: EnergySource, value: i64) -> Result<u8, ScenarioError> {
    let total = i64::from(TOTAL_SHARE_PERCENT);
    if (0..=total).contains(&value) {
        Ok(value as u8)
    } else {
        Err(ScenarioError::OutOfRangeInput {
            share,
            value,
            min: 0,
            max: total,
        })
    }
}

fn steps(upper: u8, step: i64) -> Result<Vec<u8>, ScenarioError> {
    if step < 1 {
        return Err(ScenarioError::InvalidStep(step));
    }
    // Steps beyond the full range collapse to the two endpoints.
    let step = step.min(i64::from(TOTAL_SHARE_PERCENT)) as usize;

    let mut values: Vec<u8> = (0..=upper).step_by(step).collect();
    if values.last() != Some(&upper) {
        values.push(upper);
    }
    Ok(values)
}
