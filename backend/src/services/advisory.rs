//! Advisory service
//!
//! Orchestrates one assessment: validate the submitted reading, generate
//! rule-based recommendations, fetch the external stress prediction and
//! normalize it into a display score. The recommendations and the stress
//! score are independent views over the same farm state; neither feeds the
//! other.

use chrono::{DateTime, Utc};
use serde::Serialize;
use shared::{
    generate_recommendations, stress_score, validate_probabilities, PredictionResult,
    ReadingDraft, ReadingSnapshot, Recommendation,
};
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::external::PredictionClient;

/// Advisory service
#[derive(Clone)]
pub struct AdvisoryService {
    prediction: PredictionClient,
}

/// A full assessment: recommendations plus the normalized prediction
#[derive(Debug, Clone, Serialize)]
pub struct Assessment {
    pub id: Uuid,
    pub assessed_at: DateTime<Utc>,
    pub reading: ReadingSnapshot,
    pub recommendations: Vec<Recommendation>,
    pub prediction: PredictionResult,
    /// 0-100 display severity derived from the class probabilities
    pub stress_score: u8,
}

/// Rule-only advisory output, produced without contacting the classifier
#[derive(Debug, Clone, Serialize)]
pub struct RecommendationReport {
    pub reading: ReadingSnapshot,
    pub recommendations: Vec<Recommendation>,
}

impl AdvisoryService {
    /// Create a new AdvisoryService instance
    pub fn new(prediction: PredictionClient) -> Self {
        Self { prediction }
    }

    /// Run a full assessment for a submitted reading
    pub async fn assess(&self, draft: ReadingDraft) -> AppResult<Assessment> {
        let reading = draft
            .validate()
            .map_err(|violations| AppError::Validation { violations })?;

        let recommendations = generate_recommendations(&reading);

        let prediction = self.prediction.predict(&reading).await?;
        // Reject malformed probability vectors before normalizing; clamping
        // here would mask a correctness bug in the collaborator.
        validate_probabilities(&prediction.probabilities)?;
        let score = stress_score(&prediction.probabilities);

        tracing::debug!(
            prediction = %prediction.prediction,
            stress_score = score,
            recommendations = recommendations.len(),
            "assessment complete"
        );

        Ok(Assessment {
            id: Uuid::new_v4(),
            assessed_at: Utc::now(),
            reading,
            recommendations,
            prediction,
            stress_score: score,
        })
    }

    /// Generate rule-based recommendations without calling the classifier
    pub fn recommend(&self, draft: ReadingDraft) -> AppResult<RecommendationReport> {
        let reading = draft
            .validate()
            .map_err(|violations| AppError::Validation { violations })?;

        Ok(RecommendationReport {
            recommendations: generate_recommendations(&reading),
            reading,
        })
    }
}
