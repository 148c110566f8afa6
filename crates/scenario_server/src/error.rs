//! API error mapping
//!
//! Converts calculator errors into JSON error responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use scenario_core::ScenarioError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error body returned by all endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

/// Errors surfaced by request handlers
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Scenario(#[from] ScenarioError),
}

impl ApiError {
    /// HTTP status for this error
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Scenario(ScenarioError::UnknownPreset(_)) => StatusCode::NOT_FOUND,
            ApiError::Scenario(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self {
            ApiError::Scenario(err) => ErrorResponse {
                error: err.code().to_string(),
                message: err.to_string(),
            },
        };
        tracing::warn!(status = %status, error = %body.error, "{}", body.message);
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scenario_core::EnergySource;

    #[test]
    fn test_out_of_range_is_unprocessable() {
        let err = ApiError::from(ScenarioError::OutOfRangeInput {
            share: EnergySource::Renewable,
            value: 50,
            min: 0,
            max: 40,
        });
        assert_eq!(err.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn test_unknown_preset_is_not_found() {
        let err = ApiError::from(ScenarioError::UnknownPreset("x".to_string()));
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "Unknown preset: x");
    }
}
