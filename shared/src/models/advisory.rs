//! Advisory output models

use serde::{Deserialize, Serialize};

/// Recommendation priority, ordered Medium < High < Critical
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub enum Priority {
    Medium,
    High,
    Critical,
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Priority::Medium => write!(f, "Medium"),
            Priority::High => write!(f, "High"),
            Priority::Critical => write!(f, "Critical"),
        }
    }
}

/// Which aspect of the reading a recommendation addresses
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Category {
    Pest,
    Moisture,
    Temperature,
    Rainfall,
    Seasonal,
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Pest => write!(f, "Pest"),
            Category::Moisture => write!(f, "Moisture"),
            Category::Temperature => write!(f, "Temperature"),
            Category::Rainfall => write!(f, "Rainfall"),
            Category::Seasonal => write!(f, "Seasonal"),
        }
    }
}

/// A prioritized, human-readable suggested action derived from a reading
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recommendation {
    pub priority: Priority,
    pub category: Category,
    pub message: String,
}
