//! Scenario endpoints
//!
//! Provides endpoints for computing a scenario, reading the fixed baseline,
//! listing presets, and sweeping one share across its valid range.

use axum::{
    extract::{Path, Query},
    response::Json,
    routing::{get, post},
    Router,
};
use scenario_core::scenario::{
    sweep, BaselineScenario, EnergyMixInput, MixPreset, RawEnergyMix, ScenarioComparison,
    ScenarioOutcome, SweepPoint, SCENARIO_LABEL,
};
use scenario_core::EnergySource;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::AppState;
use crate::error::ApiError;

/// Default sweep step in percentage points
pub const DEFAULT_SWEEP_STEP: i64 = 10;

/// One slice of the composition with its display metadata
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompositionEntry {
    pub source: EnergySource,
    pub label: &'static str,
    pub colour: &'static str,
    pub share_percent: u8,
}

/// Full scenario evaluation returned to the dashboard
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioResponse {
    pub input: EnergyMixInput,
    #[serde(flatten)]
    pub outcome: ScenarioOutcome,
    pub composition: Vec<CompositionEntry>,
    pub comparison: ScenarioComparison,
    pub baseline_label: &'static str,
    pub scenario_label: &'static str,
}

impl ScenarioResponse {
    /// Evaluate a validated mix
    pub fn from_mix(mix: EnergyMixInput) -> Self {
        let outcome = mix.outcome();
        let composition = mix
            .composition()
            .iter()
            .map(|slice| CompositionEntry {
                source: slice.source,
                label: slice.source.label(),
                colour: slice.source.colour(),
                share_percent: slice.share_percent,
            })
            .collect();

        Self {
            input: mix,
            outcome,
            composition,
            comparison: ScenarioComparison::against_baseline(outcome.metrics),
            baseline_label: BaselineScenario::CURRENT.label,
            scenario_label: SCENARIO_LABEL,
        }
    }
}

/// Query form of a scenario request; missing shares fall back to the default mix
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScenarioQuery {
    pub nuclear: Option<i64>,
    pub renewable: Option<i64>,
}

/// Preset with its evaluated scenario
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PresetResponse {
    pub preset: MixPreset,
    pub description: &'static str,
    pub scenario: ScenarioResponse,
}

impl From<MixPreset> for PresetResponse {
    fn from(preset: MixPreset) -> Self {
        Self {
            preset,
            description: preset.description(),
            scenario: ScenarioResponse::from_mix(preset.input()),
        }
    }
}

/// Sweep request body
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SweepRequest {
    pub vary: EnergySource,
    pub fixed: i64,
    #[serde(default = "default_sweep_step")]
    pub step: i64,
}

fn default_sweep_step() -> i64 {
    DEFAULT_SWEEP_STEP
}

/// Sweep response body
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SweepResponse {
    pub vary: EnergySource,
    pub fixed: i64,
    pub step: i64,
    pub points: Vec<SweepPoint>,
}

/// Build the scenario routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/v1/scenario", post(compute_handler).get(query_handler))
        .route("/api/v1/baseline", get(baseline_handler))
        .route("/api/v1/presets", get(presets_handler))
        .route("/api/v1/presets/{name}", get(preset_handler))
        .route("/api/v1/sweep", post(sweep_handler))
}

/// POST /api/v1/scenario - Evaluate a mix from a JSON body
async fn compute_handler(
    Json(request): Json<RawEnergyMix>,
) -> Result<Json<ScenarioResponse>, ApiError> {
    evaluate(request)
}

/// GET /api/v1/scenario?nuclear=N&renewable=R - Evaluate a mix from query parameters
async fn query_handler(
    Query(query): Query<ScenarioQuery>,
) -> Result<Json<ScenarioResponse>, ApiError> {
    let defaults = RawEnergyMix::from(EnergyMixInput::default());
    evaluate(RawEnergyMix {
        nuclear_share_percent: query.nuclear.unwrap_or(defaults.nuclear_share_percent),
        renewable_share_percent: query.renewable.unwrap_or(defaults.renewable_share_percent),
    })
}

fn evaluate(request: RawEnergyMix) -> Result<Json<ScenarioResponse>, ApiError> {
    let mix = EnergyMixInput::try_from(request)?;
    let response = ScenarioResponse::from_mix(mix);
    debug!(
        nuclear = mix.nuclear_share_percent(),
        renewable = mix.renewable_share_percent(),
        fossil = response.outcome.fossil_share_percent,
        carbon_emission = response.outcome.carbon_emission(),
        energy_self_sufficiency = response.outcome.energy_self_sufficiency(),
        "Scenario computed"
    );
    Ok(Json(response))
}

/// GET /api/v1/baseline - Fixed comparison baseline
async fn baseline_handler() -> Json<BaselineScenario> {
    Json(BaselineScenario::CURRENT)
}

/// GET /api/v1/presets - All presets with their evaluations
async fn presets_handler() -> Json<Vec<PresetResponse>> {
    Json(MixPreset::all().into_iter().map(PresetResponse::from).collect())
}

/// GET /api/v1/presets/{name} - A single preset
async fn preset_handler(Path(name): Path<String>) -> Result<Json<PresetResponse>, ApiError> {
    let preset: MixPreset = name.parse()?;
    Ok(Json(PresetResponse::from(preset)))
}

/// POST /api/v1/sweep - Sweep one adjustable share
async fn sweep_handler(Json(request): Json<SweepRequest>) -> Result<Json<SweepResponse>, ApiError> {
    let points = sweep(request.vary, request.fixed, request.step)?;
    debug!(
        vary = %request.vary,
        fixed = request.fixed,
        step = request.step,
        points = points.len(),
        "Sweep computed"
    );
    Ok(Json(SweepResponse {
        vary: request.vary,
        fixed: request.fixed,
        step: request.step,
        points,
    }))
}
