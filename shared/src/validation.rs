//! Range validation for reading snapshots
//!
//! Validation is the precondition gate for the advisory engine: the
//! generator is never invoked on an unvalidated reading. All violations
//! are collected in one pass so a caller can report every problem at once.

use serde::Serialize;

use crate::advisory::format_reading_value;
use crate::models::{
    ReadingDraft, ReadingSnapshot, PEST_DAMAGE_RANGE_PCT, RAINFALL_RANGE_MM,
    SOIL_MOISTURE_RANGE_PCT, TEMPERATURE_RANGE_C,
};

/// One field-level validation failure
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: &'static str,
    pub message: String,
}

/// Validate a draft reading into a [`ReadingSnapshot`]
///
/// Checks presence and range inclusion of all four numeric fields and
/// returns every violation found, not just the first. Values are rejected,
/// never clamped.
pub fn validate_reading(draft: ReadingDraft) -> Result<ReadingSnapshot, Vec<FieldViolation>> {
    let mut violations = Vec::new();

    let temperature_c = check_field(
        "temperature_c",
        draft.temperature_c,
        TEMPERATURE_RANGE_C,
        "°C",
        &mut violations,
    );
    let rainfall_mm = check_field(
        "rainfall_mm",
        draft.rainfall_mm,
        RAINFALL_RANGE_MM,
        "mm",
        &mut violations,
    );
    let soil_moisture_pct = check_field(
        "soil_moisture_pct",
        draft.soil_moisture_pct,
        SOIL_MOISTURE_RANGE_PCT,
        "%",
        &mut violations,
    );
    let pest_damage_pct = check_field(
        "pest_damage_pct",
        draft.pest_damage_pct,
        PEST_DAMAGE_RANGE_PCT,
        "%",
        &mut violations,
    );

    match (temperature_c, rainfall_mm, soil_moisture_pct, pest_damage_pct) {
        (Some(temperature_c), Some(rainfall_mm), Some(soil_moisture_pct), Some(pest_damage_pct))
            if violations.is_empty() =>
        {
            Ok(ReadingSnapshot {
                season: draft.season,
                crop_type: draft.crop_type,
                temperature_c,
                rainfall_mm,
                soil_moisture_pct,
                pest_damage_pct,
            })
        }
        _ => Err(violations),
    }
}

fn check_field(
    field: &'static str,
    value: Option<f64>,
    (min, max): (f64, f64),
    unit: &str,
    violations: &mut Vec<FieldViolation>,
) -> Option<f64> {
    let Some(value) = value else {
        violations.push(FieldViolation {
            field,
            message: format!("{field} is required"),
        });
        return None;
    };

    if !value.is_finite() {
        violations.push(FieldViolation {
            field,
            message: format!("{field} must be a finite number"),
        });
        return None;
    }

    if value < min || value > max {
        violations.push(FieldViolation {
            field,
            message: format!(
                "{field} must be between {}{unit} and {}{unit} (got {}{unit})",
                format_reading_value(min),
                format_reading_value(max),
                format_reading_value(value),
            ),
        });
        return None;
    }

    Some(value)
}
