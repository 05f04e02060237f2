//! Prediction service models
//!
//! The external ML classifier returns class probabilities for three stress
//! levels. These types are consumed, not owned: the classifier itself lives
//! outside this system.

use serde::{Deserialize, Serialize};

/// Stress class labels produced by the external classifier
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum StressLevel {
    Healthy,
    #[serde(rename = "Moderate Stress")]
    ModerateStress,
    #[serde(rename = "Severe Stress")]
    SevereStress,
}

impl std::fmt::Display for StressLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StressLevel::Healthy => write!(f, "Healthy"),
            StressLevel::ModerateStress => write!(f, "Moderate Stress"),
            StressLevel::SevereStress => write!(f, "Severe Stress"),
        }
    }
}

/// Class-probability vector from the external classifier
///
/// Each value lies in [0, 1] and the vector sums to approximately 1.
/// Missing entries deserialize to 0.0; whether that is acceptable is decided
/// by [`crate::score::validate_probabilities`] at the boundary.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct StressProbabilities {
    #[serde(rename = "Healthy", default)]
    pub healthy: f64,
    #[serde(rename = "Moderate Stress", default)]
    pub moderate_stress: f64,
    #[serde(rename = "Severe Stress", default)]
    pub severe_stress: f64,
}

impl StressProbabilities {
    pub fn sum(&self) -> f64 {
        self.healthy + self.moderate_stress + self.severe_stress
    }

    /// The top-1 class label
    pub fn top(&self) -> StressLevel {
        let mut best = (StressLevel::Healthy, self.healthy);
        if self.moderate_stress > best.1 {
            best = (StressLevel::ModerateStress, self.moderate_stress);
        }
        if self.severe_stress > best.1 {
            best = (StressLevel::SevereStress, self.severe_stress);
        }
        best.0
    }
}

/// A prediction from the external classifier, as consumed by this system
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PredictionResult {
    /// Top-1 class label
    pub prediction: StressLevel,
    /// Probability of the top-1 class
    pub confidence: f64,
    pub probabilities: StressProbabilities,
}
