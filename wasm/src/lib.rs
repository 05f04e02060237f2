//! WebAssembly module for the Crop Stress Monitoring Platform
//!
//! Lets the browser dashboard run the advisory engine client-side:
//! - Reading validation
//! - Rule-based recommendation generation
//! - Stress-score normalization

use wasm_bindgen::prelude::*;

use shared::{
    generate_recommendations, stress_score, validate_probabilities, ReadingDraft,
    StressProbabilities,
};

/// Validate a reading draft and generate recommendations from it
///
/// Takes the six reading fields as JSON and returns the recommendation
/// list as JSON. Validation failures come back as a JS error carrying the
/// full list of field violations.
#[wasm_bindgen]
pub fn recommendations_for_reading(reading_json: &str) -> Result<String, JsValue> {
    let draft: ReadingDraft = serde_json::from_str(reading_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid reading JSON: {}", e)))?;

    let reading = draft.validate().map_err(|violations| {
        let body = serde_json::to_string(&violations).unwrap_or_default();
        JsValue::from_str(&body)
    })?;

    let recommendations = generate_recommendations(&reading);
    serde_json::to_string(&recommendations)
        .map_err(|e| JsValue::from_str(&format!("Serialization failed: {}", e)))
}

/// Check a reading draft without generating recommendations
///
/// Returns the violation list as JSON; an empty array means the reading
/// is valid.
#[wasm_bindgen]
pub fn validate_reading_json(reading_json: &str) -> Result<String, JsValue> {
    let draft: ReadingDraft = serde_json::from_str(reading_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid reading JSON: {}", e)))?;

    let violations = match draft.validate() {
        Ok(_) => Vec::new(),
        Err(violations) => violations,
    };

    serde_json::to_string(&violations)
        .map_err(|e| JsValue::from_str(&format!("Serialization failed: {}", e)))
}

/// Normalize classifier probabilities into a 0-100 stress score
///
/// Rejects malformed vectors the same way the backend does.
#[wasm_bindgen]
pub fn stress_score_from_probabilities(
    healthy: f64,
    moderate_stress: f64,
    severe_stress: f64,
) -> Result<u8, JsValue> {
    let probs = StressProbabilities {
        healthy,
        moderate_stress,
        severe_stress,
    };

    validate_probabilities(&probs).map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok(stress_score(&probs))
}
