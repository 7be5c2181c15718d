//! Baseline demand multipliers.
//!
//! Pure functions of the calendar date (and category for seasonality); event
//! multipliers come from [`crate::EventCalendar`] lookups instead.

use chrono::{Datelike, NaiveDate, Weekday};

use sarisim_catalog::Category;

/// Month-of-year seasonality. December and November dominate; April/May lift
/// beverage categories harder than the generic March/April bump.
pub fn seasonality(date: NaiveDate, category: Option<Category>) -> f64 {
    let month = date.month();

    // Christmas season.
    if month == 12 {
        return 1.5;
    }
    // Pre-Christmas buildup.
    if month == 11 {
        return 1.2;
    }
    // Philippine summer, beverages only.
    if matches!(month, 4 | 5) && category.is_some_and(Category::is_beverage) {
        return 1.4;
    }
    // Graduation season and summer start.
    if matches!(month, 3 | 4) {
        return 1.1;
    }
    // Back to school.
    if month == 8 {
        return 1.15;
    }
    1.0
}

/// Weekend lift, Friday included.
pub fn day_of_week(date: NaiveDate) -> f64 {
    match date.weekday() {
        Weekday::Sat => 1.3,
        Weekday::Sun => 1.25,
        Weekday::Fri => 1.15,
        _ => 1.0,
    }
}

/// Mid-month and month-end payday bump, with smaller shoulders the day
/// before and after.
pub fn payday(date: NaiveDate) -> f64 {
    match date.day() {
        15 | 30 | 31 => 1.4,
        14 | 16 | 29 => 1.2,
        _ => 1.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn december_outranks_everything() {
        assert_eq!(seasonality(date(2024, 12, 10), None), 1.5);
        assert_eq!(seasonality(date(2024, 12, 10), Some(Category::Soda)), 1.5);
    }

    #[test]
    fn november_beats_the_generic_baseline() {
        assert_eq!(seasonality(date(2024, 11, 5), Some(Category::Beverages)), 1.2);
    }

    #[test]
    fn summer_months_favor_beverages() {
        for category in [Category::Beverages, Category::Soda, Category::SoftdrinksCase] {
            assert_eq!(seasonality(date(2024, 4, 15), Some(category)), 1.4);
            assert_eq!(seasonality(date(2024, 5, 15), Some(category)), 1.4);
        }
        // Non-beverages in April get the graduation bump, in May nothing.
        assert_eq!(seasonality(date(2024, 4, 15), Some(Category::Snack)), 1.1);
        assert_eq!(seasonality(date(2024, 5, 15), Some(Category::Snack)), 1.0);
        // No category at all (store-wide traffic) behaves like non-beverage.
        assert_eq!(seasonality(date(2024, 5, 15), None), 1.0);
    }

    #[test]
    fn march_april_and_august_bumps() {
        assert_eq!(seasonality(date(2024, 3, 20), Some(Category::Dairy)), 1.1);
        assert_eq!(seasonality(date(2024, 8, 20), Some(Category::Dairy)), 1.15);
        assert_eq!(seasonality(date(2024, 6, 20), Some(Category::Dairy)), 1.0);
    }

    #[test]
    fn weekend_multipliers() {
        // 2024-01-05 is a Friday.
        assert_eq!(day_of_week(date(2024, 1, 5)), 1.15);
        assert_eq!(day_of_week(date(2024, 1, 6)), 1.3);
        assert_eq!(day_of_week(date(2024, 1, 7)), 1.25);
        assert_eq!(day_of_week(date(2024, 1, 8)), 1.0);
    }

    #[test]
    fn payday_peaks_and_shoulders() {
        assert_eq!(payday(date(2024, 1, 15)), 1.4);
        assert_eq!(payday(date(2024, 1, 30)), 1.4);
        assert_eq!(payday(date(2024, 1, 31)), 1.4);
        assert_eq!(payday(date(2024, 1, 14)), 1.2);
        assert_eq!(payday(date(2024, 1, 16)), 1.2);
        assert_eq!(payday(date(2024, 1, 29)), 1.2);
        assert_eq!(payday(date(2024, 1, 17)), 1.0);
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn any_date() -> impl Strategy<Value = NaiveDate> {
            (2024i32..2028, 1u32..=12, 1u32..=28)
                .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap())
        }

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 1000,
                ..ProptestConfig::default()
            })]

            /// Property: every multiplier comes from its closed table.
            #[test]
            fn multipliers_stay_in_their_tables(day in any_date()) {
                let s = seasonality(day, Some(Category::Soda));
                prop_assert!([1.0, 1.1, 1.15, 1.2, 1.4, 1.5].contains(&s));
                prop_assert!([1.0, 1.15, 1.25, 1.3].contains(&day_of_week(day)));
                prop_assert!([1.0, 1.2, 1.4].contains(&payday(day)));
            }

            /// Property: seasonality never dips below baseline.
            #[test]
            fn seasonality_only_lifts(day in any_date()) {
                for category in [None, Some(Category::Beverages), Some(Category::Household)] {
                    prop_assert!(seasonality(day, category) >= 1.0);
                }
            }
        }
    }
}
