//! Stress score normalization
//!
//! Collapses the classifier's class-probability vector into a single
//! 0-100 display percentage. The score is a display quantity only; it has
//! no invariant relationship with the recommendation generator.

use thiserror::Error;

use crate::models::StressProbabilities;

/// Tolerance when checking that a probability vector sums to 1
///
/// The upstream classifier rounds each probability to two decimals, so
/// three entries can each miss their true value by up to 0.005 and the
/// reported sum by up to 0.015. Anything beyond that is a real defect,
/// not rounding.
pub const PROBABILITY_SUM_TOLERANCE: f64 = 0.015;

/// A malformed class-probability vector from the upstream classifier
#[derive(Debug, Clone, Copy, Error, PartialEq)]
pub enum ProbabilityError {
    #[error("probability for {label} is negative: {value}")]
    Negative { label: &'static str, value: f64 },

    #[error("probability for {label} exceeds 1: {value}")]
    AboveOne { label: &'static str, value: f64 },

    #[error("probabilities sum to {sum}, expected approximately 1")]
    BadSum { sum: f64 },
}

/// Validate a class-probability vector from the upstream classifier
///
/// Rejects negative values, values above 1, and vectors whose sum is not
/// approximately 1. A malformed vector indicates a correctness bug in the
/// collaborator and is surfaced, never clamped or defaulted.
pub fn validate_probabilities(probs: &StressProbabilities) -> Result<(), ProbabilityError> {
    let entries = [
        ("Healthy", probs.healthy),
        ("Moderate Stress", probs.moderate_stress),
        ("Severe Stress", probs.severe_stress),
    ];

    for (label, value) in entries {
        if value < 0.0 {
            return Err(ProbabilityError::Negative { label, value });
        }
        if value > 1.0 {
            return Err(ProbabilityError::AboveOne { label, value });
        }
    }

    let sum = probs.sum();
    if (sum - 1.0).abs() > PROBABILITY_SUM_TOLERANCE {
        return Err(ProbabilityError::BadSum { sum });
    }

    Ok(())
}

/// Normalize a validated probability vector into a 0-100 stress score
///
/// Defined as `round(moderate * 50 + severe * 100)`; Healthy contributes 0.
/// Infallible on a vector that passed [`validate_probabilities`].
pub fn stress_score(probs: &StressProbabilities) -> u8 {
    let raw = probs.moderate_stress * 50.0 + probs.severe_stress * 100.0;
    raw.round().min(100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn probs(healthy: f64, moderate: f64, severe: f64) -> StressProbabilities {
        StressProbabilities {
            healthy,
            moderate_stress: moderate,
            severe_stress: severe,
        }
    }

    #[test]
    fn test_score_anchor_points() {
        assert_eq!(stress_score(&probs(1.0, 0.0, 0.0)), 0);
        assert_eq!(stress_score(&probs(0.0, 1.0, 0.0)), 50);
        assert_eq!(stress_score(&probs(0.0, 0.0, 1.0)), 100);
    }

    #[test]
    fn test_score_mixed_vector() {
        // 0.3 * 50 + 0.2 * 100 = 35
        assert_eq!(stress_score(&probs(0.5, 0.3, 0.2)), 35);
    }

    #[test]
    fn test_score_rounds_to_nearest() {
        // 0.25 * 50 + 0.01 * 100 = 13.5 -> 14
        assert_eq!(stress_score(&probs(0.74, 0.25, 0.01)), 14);
    }

    #[test]
    fn test_missing_entries_contribute_zero() {
        let parsed: StressProbabilities = serde_json::from_str(r#"{"Healthy": 1.0}"#).unwrap();
        assert_eq!(parsed.moderate_stress, 0.0);
        assert_eq!(parsed.severe_stress, 0.0);
        assert_eq!(stress_score(&parsed), 0);
    }

    #[test]
    fn test_validate_accepts_rounded_vector() {
        // Two-decimal rounding upstream can miss 1.0 slightly; thirds are
        // the classic case, summing to 0.99 with float noise on top
        assert!(validate_probabilities(&probs(0.33, 0.33, 0.33)).is_ok());
        assert!(validate_probabilities(&probs(0.34, 0.33, 0.33)).is_ok());
        assert!(validate_probabilities(&probs(0.34, 0.34, 0.33)).is_ok());
    }

    #[test]
    fn test_validate_rejects_sum_beyond_rounding() {
        // 0.98 is more than two-decimal rounding can explain
        let err = validate_probabilities(&probs(0.33, 0.33, 0.32)).unwrap_err();
        assert!(matches!(err, ProbabilityError::BadSum { .. }));
    }

    #[test]
    fn test_validate_rejects_negative() {
        let err = validate_probabilities(&probs(0.9, -0.1, 0.2)).unwrap_err();
        assert_eq!(
            err,
            ProbabilityError::Negative {
                label: "Moderate Stress",
                value: -0.1
            }
        );
    }

    #[test]
    fn test_validate_rejects_above_one() {
        let err = validate_probabilities(&probs(1.5, 0.0, 0.0)).unwrap_err();
        assert!(matches!(err, ProbabilityError::AboveOne { label: "Healthy", .. }));
    }

    #[test]
    fn test_validate_rejects_bad_sum() {
        let err = validate_probabilities(&probs(0.2, 0.2, 0.2)).unwrap_err();
        assert!(matches!(err, ProbabilityError::BadSum { .. }));
    }

    #[test]
    fn test_top_label() {
        use crate::models::StressLevel;
        assert_eq!(probs(0.7, 0.2, 0.1).top(), StressLevel::Healthy);
        assert_eq!(probs(0.1, 0.6, 0.3).top(), StressLevel::ModerateStress);
        assert_eq!(probs(0.1, 0.2, 0.7).top(), StressLevel::SevereStress);
    }
}
