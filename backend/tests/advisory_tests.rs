//! Advisory engine integration tests
//!
//! Tests for the rule-based recommendation generator including:
//! - Disjoint severity bands per variable
//! - Deterministic table-order generation
//! - Season-gated rainfall and waterlogging rules

use proptest::prelude::*;
use shared::{
    generate_recommendations, Category, CropType, Priority, ReadingDraft, ReadingSnapshot, Season,
};

fn reading(
    season: Season,
    crop_type: CropType,
    temperature_c: f64,
    rainfall_mm: f64,
    soil_moisture_pct: f64,
    pest_damage_pct: f64,
) -> ReadingSnapshot {
    ReadingSnapshot {
        season,
        crop_type,
        temperature_c,
        rainfall_mm,
        soil_moisture_pct,
        pest_damage_pct,
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod unit_tests {
    use super::*;

    /// Stressed summer rice reading fires four rules in order
    #[test]
    fn test_summer_rice_full_stress() {
        let r = reading(Season::Summer, CropType::Rice, 46.0, 5.0, 15.0, 60.0);
        let recs = generate_recommendations(&r);

        let expected = [
            (Priority::Critical, Category::Pest),
            (Priority::Critical, Category::Moisture),
            (Priority::High, Category::Temperature),
            (Priority::Medium, Category::Rainfall),
        ];
        assert_eq!(recs.len(), expected.len());
        for (rec, (priority, category)) in recs.iter().zip(expected) {
            assert_eq!(rec.priority, priority);
            assert_eq!(rec.category, category);
        }
    }

    /// Monsoon wheat with heavy rain and saturated soil
    #[test]
    fn test_monsoon_wheat_rain_before_seasonal() {
        let r = reading(Season::Monsoon, CropType::Wheat, 25.0, 350.0, 85.0, 5.0);
        let recs = generate_recommendations(&r);

        assert_eq!(recs.len(), 2);
        assert_eq!(recs[0].category, Category::Rainfall);
        assert_eq!(recs[0].priority, Priority::High);
        assert_eq!(recs[1].category, Category::Seasonal);
        assert_eq!(recs[1].priority, Priority::Medium);
    }

    /// An out-of-range field blocks generation entirely
    #[test]
    fn test_out_of_range_reading_rejected_before_generation() {
        let draft = ReadingDraft {
            season: Season::Summer,
            crop_type: CropType::Rice,
            temperature_c: Some(25.0),
            rainfall_mm: Some(100.0),
            soil_moisture_pct: Some(150.0),
            pest_damage_pct: Some(5.0),
        };

        let violations = draft.validate().unwrap_err();
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].field, "soil_moisture_pct");
    }

    /// Messages embed the triggering value
    #[test]
    fn test_messages_interpolate_values() {
        let r = reading(Season::Winter, CropType::Rice, 25.0, 100.0, 60.0, 62.0);
        let recs = generate_recommendations(&r);
        assert_eq!(
            recs[0].message,
            "High pest damage detected (62%) - Apply pesticide immediately"
        );
    }

    /// Healthy readings are a valid, empty, non-error outcome
    #[test]
    fn test_healthy_reading_is_empty_not_error() {
        let r = reading(Season::Winter, CropType::Wheat, 20.0, 150.0, 55.0, 10.0);
        assert!(generate_recommendations(&r).is_empty());
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod property_tests {
    use super::*;

    fn season_strategy() -> impl Strategy<Value = Season> {
        prop_oneof![
            Just(Season::Summer),
            Just(Season::Winter),
            Just(Season::Monsoon),
        ]
    }

    fn crop_strategy() -> impl Strategy<Value = CropType> {
        prop_oneof![Just(CropType::Rice), Just(CropType::Wheat)]
    }

    /// Strategy for whole readings within declared ranges
    fn reading_strategy() -> impl Strategy<Value = ReadingSnapshot> {
        (
            season_strategy(),
            crop_strategy(),
            -50.0..=60.0f64,
            0.0..=500.0f64,
            0.0..=100.0f64,
            0.0..=100.0f64,
        )
            .prop_map(|(season, crop, temp, rain, moisture, pest)| {
                reading(season, crop, temp, rain, moisture, pest)
            })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        /// Generation is a pure function: same reading, same output
        #[test]
        fn prop_generation_idempotent(r in reading_strategy()) {
            prop_assert_eq!(generate_recommendations(&r), generate_recommendations(&r));
        }

        /// Disjoint bands: at most one pest and one moisture-or-seasonal
        /// severity recommendation each, so Critical count never exceeds 2
        #[test]
        fn prop_at_most_two_critical(r in reading_strategy()) {
            let criticals = generate_recommendations(&r)
                .iter()
                .filter(|rec| rec.priority == Priority::Critical)
                .count();
            prop_assert!(criticals <= 2);
        }

        /// At most one recommendation per category fires
        #[test]
        fn prop_one_recommendation_per_category(r in reading_strategy()) {
            let recs = generate_recommendations(&r);
            for category in [
                Category::Pest,
                Category::Moisture,
                Category::Rainfall,
                Category::Seasonal,
            ] {
                let count = recs.iter().filter(|rec| rec.category == category).count();
                prop_assert!(count <= 1, "{:?} fired {} times", category, count);
            }
        }

        /// Output order always follows table order: pest before moisture
        /// before temperature before rainfall before seasonal
        #[test]
        fn prop_output_follows_table_order(r in reading_strategy()) {
            fn rank(category: Category) -> u8 {
                match category {
                    Category::Pest => 0,
                    Category::Moisture => 1,
                    Category::Temperature => 2,
                    Category::Rainfall => 3,
                    Category::Seasonal => 4,
                }
            }

            let recs = generate_recommendations(&r);
            for pair in recs.windows(2) {
                prop_assert!(rank(pair[0].category) <= rank(pair[1].category));
            }
        }

        /// Pest priority is monotonic non-decreasing in pest damage
        #[test]
        fn prop_pest_priority_monotonic(
            r in reading_strategy(),
            lower in 0.0..=100.0f64,
            higher in 0.0..=100.0f64,
        ) {
            let (lower, higher) = if lower <= higher { (lower, higher) } else { (higher, lower) };

            fn pest_rank(r: &ReadingSnapshot) -> u8 {
                generate_recommendations(r)
                    .iter()
                    .find(|rec| rec.category == Category::Pest)
                    .map(|rec| match rec.priority {
                        Priority::Medium => 1,
                        Priority::High => 2,
                        Priority::Critical => 3,
                    })
                    .unwrap_or(0)
            }

            let mut low_reading = r;
            low_reading.pest_damage_pct = lower;
            let mut high_reading = r;
            high_reading.pest_damage_pct = higher;

            prop_assert!(pest_rank(&low_reading) <= pest_rank(&high_reading));
        }

        /// Rainfall rules never fire in Winter
        #[test]
        fn prop_winter_rainfall_unconstrained(
            crop in crop_strategy(),
            rain in 0.0..=500.0f64,
        ) {
            let r = reading(Season::Winter, crop, 25.0, rain, 60.0, 5.0);
            let rainfall_recs = generate_recommendations(&r)
                .iter()
                .filter(|rec| rec.category == Category::Rainfall)
                .count();
            prop_assert_eq!(rainfall_recs, 0);
        }

        /// Readings with no band touched produce no recommendations
        #[test]
        fn prop_quiet_band_is_empty(
            crop in crop_strategy(),
            temp in -10.0..=45.0f64,
            moisture in 40.0..=80.0f64,
            pest in 0.0..=25.0f64,
        ) {
            // Winter carries no rainfall or seasonal rules
            let r = reading(Season::Winter, crop, temp, 100.0, moisture, pest);
            prop_assert!(generate_recommendations(&r).is_empty());
        }
    }
}
