//! Reading snapshot models
//!
//! A reading snapshot is one farmer- or sensor-submitted set of
//! season/crop/weather/soil values at a point in time.

use serde::{Deserialize, Serialize};

/// Growing season
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Season {
    Summer,
    Winter,
    Monsoon,
}

impl std::fmt::Display for Season {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Season::Summer => write!(f, "Summer"),
            Season::Winter => write!(f, "Winter"),
            Season::Monsoon => write!(f, "Monsoon"),
        }
    }
}

/// Monitored crop type
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum CropType {
    Rice,
    Wheat,
}

impl std::fmt::Display for CropType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CropType::Rice => write!(f, "Rice"),
            CropType::Wheat => write!(f, "Wheat"),
        }
    }
}

/// Declared valid range for temperature readings (°C)
pub const TEMPERATURE_RANGE_C: (f64, f64) = (-50.0, 60.0);
/// Declared valid range for rainfall readings (mm)
pub const RAINFALL_RANGE_MM: (f64, f64) = (0.0, 500.0);
/// Declared valid range for soil moisture readings (%)
pub const SOIL_MOISTURE_RANGE_PCT: (f64, f64) = (0.0, 100.0);
/// Declared valid range for pest damage readings (%)
pub const PEST_DAMAGE_RANGE_PCT: (f64, f64) = (0.0, 100.0);

/// A validated reading snapshot
///
/// All numeric fields are guaranteed to lie within their declared ranges.
/// Obtain one through [`crate::validation::validate_reading`] or
/// [`ReadingDraft::validate`]; the advisory engine assumes this invariant
/// and does not re-check it.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct ReadingSnapshot {
    pub season: Season,
    pub crop_type: CropType,
    pub temperature_c: f64,
    pub rainfall_mm: f64,
    pub soil_moisture_pct: f64,
    pub pest_damage_pct: f64,
}

/// An unvalidated reading as submitted over the wire
///
/// Numeric fields are optional so that a missing field is reported as a
/// field-level violation rather than a blunt deserialization failure.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ReadingDraft {
    pub season: Season,
    pub crop_type: CropType,
    pub temperature_c: Option<f64>,
    pub rainfall_mm: Option<f64>,
    pub soil_moisture_pct: Option<f64>,
    pub pest_damage_pct: Option<f64>,
}

impl ReadingDraft {
    /// Validate this draft into a [`ReadingSnapshot`], reporting every
    /// violation found in one pass.
    pub fn validate(self) -> Result<ReadingSnapshot, Vec<crate::FieldViolation>> {
        crate::validation::validate_reading(self)
    }
}
