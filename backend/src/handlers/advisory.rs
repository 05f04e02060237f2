//! HTTP handlers for advisory endpoints

use axum::{extract::State, Json};
use shared::ReadingDraft;

use crate::error::AppResult;
use crate::services::advisory::{Assessment, RecommendationReport};
use crate::services::AdvisoryService;
use crate::AppState;

/// Run a full assessment: validation, recommendations, prediction, score
pub async fn create_assessment(
    State(state): State<AppState>,
    Json(input): Json<ReadingDraft>,
) -> AppResult<Json<Assessment>> {
    let service = AdvisoryService::new(state.prediction.clone());
    let assessment = service.assess(input).await?;
    Ok(Json(assessment))
}

/// Generate rule-based recommendations without contacting the classifier
pub async fn create_recommendations(
    State(state): State<AppState>,
    Json(input): Json<ReadingDraft>,
) -> AppResult<Json<RecommendationReport>> {
    let service = AdvisoryService::new(state.prediction.clone());
    let report = service.recommend(input)?;
    Ok(Json(report))
}
