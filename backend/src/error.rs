//! Error handling for the Crop Stress Monitoring Platform
//!
//! The three boundary error kinds stay distinguishable so the caller can
//! decide on retry policy: invalid input, a malformed answer from the
//! prediction service, and the prediction service being unreachable.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use shared::{FieldViolation, ProbabilityError};
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    /// One or more reading fields missing or out of range
    #[error("validation failed for {} field(s)", .violations.len())]
    Validation { violations: Vec<FieldViolation> },

    /// The prediction service answered, but its probability vector is
    /// malformed. Never defaulted or clamped.
    #[error("malformed prediction response: {0}")]
    MalformedPrediction(String),

    /// The prediction service answered with `success: false`; its error
    /// string is surfaced as-is
    #[error("prediction failed upstream: {0}")]
    PredictionFailed(String),

    /// The prediction service call itself failed or timed out
    #[error("prediction service unavailable: {0}")]
    PredictionServiceUnavailable(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

impl From<ProbabilityError> for AppError {
    fn from(err: ProbabilityError) -> Self {
        AppError::MalformedPrediction(err.to_string())
    }
}

/// Error response structure
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub violations: Option<Vec<FieldViolation>>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_detail) = match &self {
            AppError::Validation { violations } => (
                StatusCode::BAD_REQUEST,
                ErrorDetail {
                    code: "VALIDATION_ERROR".to_string(),
                    message: "One or more reading fields are missing or out of range".to_string(),
                    violations: Some(violations.clone()),
                },
            ),
            AppError::MalformedPrediction(msg) => (
                StatusCode::BAD_GATEWAY,
                ErrorDetail {
                    code: "MALFORMED_PREDICTION".to_string(),
                    message: format!("Prediction service returned a malformed response: {}", msg),
                    violations: None,
                },
            ),
            AppError::PredictionFailed(msg) => (
                StatusCode::BAD_GATEWAY,
                ErrorDetail {
                    code: "PREDICTION_FAILED".to_string(),
                    message: msg.clone(),
                    violations: None,
                },
            ),
            AppError::PredictionServiceUnavailable(msg) => (
                StatusCode::SERVICE_UNAVAILABLE,
                ErrorDetail {
                    code: "PREDICTION_SERVICE_UNAVAILABLE".to_string(),
                    message: format!("Prediction service is unavailable: {}", msg),
                    violations: None,
                },
            ),
            AppError::Configuration(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorDetail {
                    code: "CONFIGURATION_ERROR".to_string(),
                    message: format!("Configuration error: {}", msg),
                    violations: None,
                },
            ),
            AppError::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorDetail {
                    code: "INTERNAL_ERROR".to_string(),
                    message: "An internal server error occurred".to_string(),
                    violations: None,
                },
            ),
        };

        // Log the error for debugging
        tracing::error!("Error: {:?}", self);

        (status, Json(ErrorResponse { error: error_detail })).into_response()
    }
}

/// Result type alias for handlers
pub type AppResult<T> = Result<T, AppError>;
