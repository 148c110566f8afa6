//! Integration tests for module exports.
//!
//! Verify that all public modules and types are correctly exported
//! and accessible via absolute paths.

/// Test that the calculator is reachable from the crate root.
#[test]
fn test_root_exports() {
    use scenario_core::{compute_scenario, EnergyMixInput, EnergySource, ScenarioError};

    let outcome = compute_scenario(0, 0).unwrap();
    assert_eq!(outcome.fossil_share_percent, 100);

    let mix = EnergyMixInput::default();
    assert_eq!(mix.share(EnergySource::Fossil), 50);

    let err: ScenarioError = compute_scenario(60, 50).unwrap_err();
    assert!(err.is_out_of_range());
}

/// Test that scenario submodules are accessible via absolute path.
#[test]
fn test_scenario_module_exports() {
    use scenario_core::scenario::baseline::{baseline, BaselineScenario, ScenarioComparison};
    use scenario_core::scenario::input::{CompositionSlice, RawEnergyMix, TOTAL_SHARE_PERCENT};
    use scenario_core::scenario::metrics::{
        FOSSIL_CARBON_INTENSITY, NUCLEAR_SELF_SUFFICIENCY_WEIGHT,
        RENEWABLE_SELF_SUFFICIENCY_WEIGHT,
    };
    use scenario_core::scenario::presets::MixPreset;
    use scenario_core::scenario::sweep::{sweep_nuclear, SweepPoint};

    assert_eq!(TOTAL_SHARE_PERCENT, 100);
    assert_eq!(FOSSIL_CARBON_INTENSITY, 0.7);
    assert_eq!(NUCLEAR_SELF_SUFFICIENCY_WEIGHT, 0.8);
    assert_eq!(RENEWABLE_SELF_SUFFICIENCY_WEIGHT, 1.0);

    assert_eq!(BaselineScenario::CURRENT.metrics, baseline());
    let comparison = ScenarioComparison::against_baseline(baseline());
    assert_eq!(comparison.carbon_emission_delta, 0.0);

    let raw = RawEnergyMix::default();
    let mix = scenario_core::EnergyMixInput::try_from(raw).unwrap();
    let slices: [CompositionSlice; 3] = mix.composition();
    assert_eq!(slices[2].share_percent, 100);

    assert_eq!(MixPreset::all().len(), 6);

    let points: Vec<SweepPoint> = sweep_nuclear(0, 50).unwrap();
    assert_eq!(points.len(), 3);
}

/// Test that types module is accessible via absolute path.
#[test]
fn test_types_module_exports() {
    use scenario_core::types::error::ScenarioError;
    use scenario_core::types::source::EnergySource;

    assert_eq!(EnergySource::ALL.len(), 3);
    assert_eq!(ScenarioError::InvalidStep(0).code(), "invalid_step");
}
