//! Rule-based crop-stress advisory engine
//!
//! The engine is a fixed, declarative threshold table evaluated uniformly
//! over a validated reading. Thresholds live in data, not in branching
//! code, so they can be tuned without touching the generator.
//!
//! Boundary convention: Critical bands use strict comparison and the
//! adjacent High band is the half-open interval touching it, so a soil
//! moisture of exactly 20% or a pest damage of exactly 50% falls in the
//! High band, not the Critical one.

use crate::models::{Category, Priority, ReadingSnapshot, Recommendation, Season};

/// Which reading field a rule inspects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variable {
    PestDamage,
    SoilMoisture,
    Temperature,
    Rainfall,
}

impl Variable {
    /// Extract this variable's value from a reading
    pub fn value(&self, reading: &ReadingSnapshot) -> f64 {
        match self {
            Variable::PestDamage => reading.pest_damage_pct,
            Variable::SoilMoisture => reading.soil_moisture_pct,
            Variable::Temperature => reading.temperature_c,
            Variable::Rainfall => reading.rainfall_mm,
        }
    }
}

/// A severity band over one variable
///
/// Bands for the same variable are disjoint by construction; at most one
/// band per variable matches any given value, which is what keeps the
/// "only the more severe band fires" guarantee out of the generator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Band {
    /// value > threshold
    Above(f64),
    /// value < threshold
    Below(f64),
    /// lo < value <= hi
    WithinAbove(f64, f64),
    /// lo <= value < hi
    WithinBelow(f64, f64),
}

impl Band {
    pub fn matches(&self, value: f64) -> bool {
        match *self {
            Band::Above(threshold) => value > threshold,
            Band::Below(threshold) => value < threshold,
            Band::WithinAbove(lo, hi) => value > lo && value <= hi,
            Band::WithinBelow(lo, hi) => value >= lo && value < hi,
        }
    }
}

/// One row of the threshold table
#[derive(Debug, Clone, Copy)]
pub struct ThresholdRule {
    pub variable: Variable,
    pub band: Band,
    /// Rule only applies during this season; `None` means any season
    pub season: Option<Season>,
    pub priority: Priority,
    pub category: Category,
    /// Message template; `{value}` is replaced with the triggering value
    pub template: &'static str,
}

impl ThresholdRule {
    /// Whether this rule fires for the given reading
    pub fn fires(&self, reading: &ReadingSnapshot) -> bool {
        if let Some(season) = self.season {
            if reading.season != season {
                return false;
            }
        }
        self.band.matches(self.variable.value(reading))
    }

    /// Render the rule's message with the triggering value interpolated
    pub fn render(&self, reading: &ReadingSnapshot) -> String {
        let value = self.variable.value(reading);
        self.template.replace("{value}", &format_reading_value(value))
    }
}

/// The threshold table, in generation order: pest, moisture, temperature,
/// rainfall, seasonal. Output ordering of the generator follows this table.
pub const THRESHOLD_RULES: &[ThresholdRule] = &[
    ThresholdRule {
        variable: Variable::PestDamage,
        band: Band::Above(50.0),
        season: None,
        priority: Priority::Critical,
        category: Category::Pest,
        template: "High pest damage detected ({value}%) - Apply pesticide immediately",
    },
    ThresholdRule {
        variable: Variable::PestDamage,
        band: Band::WithinAbove(25.0, 50.0),
        season: None,
        priority: Priority::High,
        category: Category::Pest,
        template: "Moderate pest damage ({value}%) - Monitor closely and consider treatment",
    },
    ThresholdRule {
        variable: Variable::SoilMoisture,
        band: Band::Below(20.0),
        season: None,
        priority: Priority::Critical,
        category: Category::Moisture,
        template: "Very low soil moisture ({value}%) - Increase irrigation immediately",
    },
    ThresholdRule {
        variable: Variable::SoilMoisture,
        band: Band::WithinBelow(20.0, 40.0),
        season: None,
        priority: Priority::High,
        category: Category::Moisture,
        template: "Low soil moisture ({value}%) - Plan irrigation soon",
    },
    ThresholdRule {
        variable: Variable::Temperature,
        band: Band::Above(45.0),
        season: None,
        priority: Priority::High,
        category: Category::Temperature,
        template: "High temperature ({value}°C) - Provide shade/cooling measures",
    },
    ThresholdRule {
        variable: Variable::Temperature,
        band: Band::Below(-10.0),
        season: None,
        priority: Priority::High,
        category: Category::Temperature,
        template: "Very low temperature ({value}°C) - Protect crops from frost",
    },
    // Rainfall rules are season-specific. Winter rainfall is deliberately
    // unconstrained.
    ThresholdRule {
        variable: Variable::Rainfall,
        band: Band::Above(300.0),
        season: Some(Season::Monsoon),
        priority: Priority::High,
        category: Category::Rainfall,
        template: "High rainfall ({value}mm) - Ensure proper drainage",
    },
    ThresholdRule {
        variable: Variable::Rainfall,
        band: Band::Below(10.0),
        season: Some(Season::Summer),
        priority: Priority::Medium,
        category: Category::Rainfall,
        template: "Low rainfall ({value}mm) - Plan supplementary irrigation",
    },
    ThresholdRule {
        variable: Variable::SoilMoisture,
        band: Band::Above(80.0),
        season: Some(Season::Monsoon),
        priority: Priority::Medium,
        category: Category::Seasonal,
        template: "Very high moisture during monsoon - Watch for waterlogging",
    },
];

/// Generate prioritized recommendations for a validated reading
///
/// Evaluates every rule in table order; each firing rule appends exactly
/// one recommendation. Output order is table order; no re-sorting by
/// priority is performed (the caller sorts for display if desired). An
/// empty result is the healthy, non-error outcome.
pub fn generate_recommendations(reading: &ReadingSnapshot) -> Vec<Recommendation> {
    THRESHOLD_RULES
        .iter()
        .filter(|rule| rule.fires(reading))
        .map(|rule| Recommendation {
            priority: rule.priority,
            category: rule.category,
            message: rule.render(reading),
        })
        .collect()
}

/// Format a reading value for message interpolation
///
/// Whole numbers drop the trailing `.0` so messages read "62%" rather
/// than "62.0%".
pub fn format_reading_value(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}
