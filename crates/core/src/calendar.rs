//! Inclusive date spans.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{SimError, SimResult};

/// Inclusive range of calendar days. Both endpoints are covered days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateSpan {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateSpan {
    pub fn new(start: NaiveDate, end: NaiveDate) -> SimResult<Self> {
        if end < start {
            return Err(SimError::validation(format!(
                "date span ends ({end}) before it starts ({start})"
            )));
        }
        Ok(Self { start, end })
    }

    /// Span covering exactly one day.
    pub fn single(day: NaiveDate) -> Self {
        Self { start: day, end: day }
    }

    pub fn start(self) -> NaiveDate {
        self.start
    }

    pub fn end(self) -> NaiveDate {
        self.end
    }

    pub fn contains(self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Number of covered days, at least 1.
    pub fn num_days(self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    /// Overlap with `other`, if the spans intersect.
    pub fn intersect(self, other: DateSpan) -> Option<DateSpan> {
        let start = self.start.max(other.start);
        let end = self.end.min(other.end);
        (start <= end).then_some(Self { start, end })
    }

    /// Iterate every covered day in order.
    pub fn iter_days(self) -> impl Iterator<Item = NaiveDate> {
        self.start.iter_days().take_while(move |d| *d <= self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn rejects_inverted_span() {
        let err = DateSpan::new(date(2024, 3, 2), date(2024, 3, 1)).unwrap_err();
        assert!(matches!(err, SimError::Validation(_)));
    }

    #[test]
    fn contains_is_inclusive_of_both_endpoints() {
        let span = DateSpan::new(date(2024, 12, 24), date(2024, 12, 26)).unwrap();
        assert!(span.contains(date(2024, 12, 24)));
        assert!(span.contains(date(2024, 12, 25)));
        assert!(span.contains(date(2024, 12, 26)));
        assert!(!span.contains(date(2024, 12, 23)));
        assert!(!span.contains(date(2024, 12, 27)));
    }

    #[test]
    fn num_days_counts_both_endpoints() {
        let span = DateSpan::new(date(2024, 1, 1), date(2024, 1, 7)).unwrap();
        assert_eq!(span.num_days(), 7);
        assert_eq!(DateSpan::single(date(2024, 1, 1)).num_days(), 1);
    }

    #[test]
    fn iter_days_walks_the_whole_span_in_order() {
        let span = DateSpan::new(date(2024, 2, 28), date(2024, 3, 1)).unwrap();
        let days: Vec<_> = span.iter_days().collect();
        // 2024 is a leap year.
        assert_eq!(
            days,
            vec![date(2024, 2, 28), date(2024, 2, 29), date(2024, 3, 1)]
        );
    }

    #[test]
    fn intersect_clamps_to_the_overlap() {
        let a = DateSpan::new(date(2024, 1, 1), date(2024, 1, 10)).unwrap();
        let b = DateSpan::new(date(2024, 1, 8), date(2024, 1, 20)).unwrap();
        let overlap = a.intersect(b).unwrap();
        assert_eq!(overlap.start(), date(2024, 1, 8));
        assert_eq!(overlap.end(), date(2024, 1, 10));

        let c = DateSpan::new(date(2024, 2, 1), date(2024, 2, 2)).unwrap();
        assert!(a.intersect(c).is_none());
    }
}
