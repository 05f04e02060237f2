//! ML Prediction Service Client
//!
//! Client for the external crop-stress classifier. The classifier is a
//! collaborator, not part of this system: this module owns the single
//! request/response round trip and translates wire-level failures into the
//! boundary error taxonomy. Probability semantics are checked by the
//! advisory service, not here.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use shared::{PredictionResult, ReadingSnapshot, StressLevel, StressProbabilities};

use crate::error::{AppError, AppResult};

/// Client for the ML prediction service
#[derive(Clone)]
pub struct PredictionClient {
    base_url: String,
    api_key: Option<String>,
    http_client: Client,
}

/// Request body for the prediction endpoint
#[derive(Debug, Serialize)]
struct PredictRequest {
    season: String,
    crop_type: String,
    temperature: f64,
    rainfall: f64,
    soil_moisture: f64,
    pest_damage: f64,
}

impl From<&ReadingSnapshot> for PredictRequest {
    fn from(reading: &ReadingSnapshot) -> Self {
        Self {
            season: reading.season.to_string(),
            crop_type: reading.crop_type.to_string(),
            temperature: reading.temperature_c,
            rainfall: reading.rainfall_mm,
            soil_moisture: reading.soil_moisture_pct,
            pest_damage: reading.pest_damage_pct,
        }
    }
}

/// Raw response from the prediction endpoint
#[derive(Debug, Deserialize)]
struct PredictResponse {
    success: bool,
    #[serde(default)]
    prediction: Option<StressLevel>,
    #[serde(default)]
    confidence: Option<f64>,
    #[serde(default)]
    probabilities: Option<StressProbabilities>,
    #[serde(default)]
    error: Option<String>,
}

/// Health response from the prediction service
#[derive(Debug, Deserialize)]
struct ServiceHealth {
    status: String,
}

impl PredictionClient {
    /// Create a new prediction client
    pub fn new(base_url: String, api_key: Option<String>, timeout_seconds: u64) -> Self {
        let http_client = Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_seconds))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url,
            api_key,
            http_client,
        }
    }

    /// Request a stress prediction for a validated reading
    ///
    /// On `success: false` the upstream error string is surfaced as-is and
    /// nothing downstream (score normalization included) runs.
    pub async fn predict(&self, reading: &ReadingSnapshot) -> AppResult<PredictionResult> {
        let url = format!("{}/api/predict", self.base_url);
        let body = PredictRequest::from(reading);

        let mut request = self.http_client.post(&url).json(&body);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request
            .send()
            .await
            .map_err(|e| AppError::PredictionServiceUnavailable(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AppError::PredictionServiceUnavailable(format!(
                "API returned {}: {}",
                status, body
            )));
        }

        let result: PredictResponse = response.json().await.map_err(|e| {
            AppError::MalformedPrediction(format!("Failed to parse response: {}", e))
        })?;

        if !result.success {
            return Err(AppError::PredictionFailed(
                result.error.unwrap_or_else(|| "Prediction service reported failure".to_string()),
            ));
        }

        let probabilities = result.probabilities.ok_or_else(|| {
            AppError::MalformedPrediction("probabilities missing from response".to_string())
        })?;
        let prediction = result.prediction.ok_or_else(|| {
            AppError::MalformedPrediction("prediction label missing from response".to_string())
        })?;
        let confidence = result.confidence.ok_or_else(|| {
            AppError::MalformedPrediction("confidence missing from response".to_string())
        })?;

        Ok(PredictionResult {
            prediction,
            confidence,
            probabilities,
        })
    }

    /// Check whether the prediction service is reachable
    pub async fn is_healthy(&self) -> bool {
        let url = format!("{}/api/health", self.base_url);
        match self.http_client.get(&url).send().await {
            Ok(response) if response.status().is_success() => response
                .json::<ServiceHealth>()
                .await
                .map(|h| h.status == "ok")
                .unwrap_or(false),
            _ => false,
        }
    }
}
