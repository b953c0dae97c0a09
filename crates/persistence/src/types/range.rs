//! Creation-date ranges used by the decklists-by-date lookup.

use chrono::{DateTime, NaiveDate, NaiveTime, TimeDelta, Utc};

/// A half-open UTC interval `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CreationRange {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl CreationRange {
    /// Creates a range, returning `None` when `end` is not after `start`.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Option<Self> {
        (start < end).then_some(Self { start, end })
    }

    /// The range covering one calendar day in UTC.
    pub fn day(date: NaiveDate) -> Option<Self> {
        let start = date.and_time(NaiveTime::MIN).and_utc();
        let end = start.checked_add_signed(TimeDelta::days(1))?;
        Self::new(start, end)
    }

    /// Parses a `YYYY-MM-DD` path segment into a one-day range.
    pub fn parse_day(date: &str) -> Option<Self> {
        let date = NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()?;
        Self::day(date)
    }

    /// Inclusive lower bound.
    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    /// Exclusive upper bound.
    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_day_is_half_open() {
        let range = CreationRange::parse_day("2020-01-15").unwrap();
        assert_eq!(
            range.start(),
            Utc.with_ymd_and_hms(2020, 1, 15, 0, 0, 0).unwrap()
        );
        assert_eq!(range.end(), Utc.with_ymd_and_hms(2020, 1, 16, 0, 0, 0).unwrap());
        assert_eq!(range.end() - range.start(), TimeDelta::days(1));
    }

    #[test]
    fn test_parse_day_rejects_other_formats() {
        assert!(CreationRange::parse_day("15/01/2020").is_none());
        assert!(CreationRange::parse_day("2020-02-30").is_none());
        assert!(CreationRange::parse_day("yesterday").is_none());
    }

    #[test]
    fn test_new_requires_ordered_bounds() {
        let t = Utc.with_ymd_and_hms(2020, 1, 15, 0, 0, 0).unwrap();
        assert!(CreationRange::new(t, t).is_none());
    }
}
