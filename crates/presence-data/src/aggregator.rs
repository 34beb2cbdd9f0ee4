//! Weekday aggregation over a single user's presence records.
//!
//! Pure, stateless transforms from a date→[`DayRecord`] mapping into
//! Monday-indexed weekday buckets, plus the arithmetic-mean helper used by
//! the API layer. No shared state, no synchronisation.

use chrono::Datelike;
use presence_core::models::DayRecords;
use presence_core::time_utils::{interval, seconds_since_midnight};
use serde::Serialize;

/// Weekday abbreviations in dashboard order, Monday first.
pub const WEEKDAY_ABBR: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

// ── WeekdayBuckets ────────────────────────────────────────────────────────────

/// Interval lengths (seconds) grouped by weekday, Monday-indexed at 0.
///
/// All seven buckets always exist; a weekday with no records is an empty
/// sequence, never a missing key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WeekdayBuckets {
    pub buckets: [Vec<i32>; 7],
}

impl WeekdayBuckets {
    /// Intervals recorded for `weekday` (0 = Monday .. 6 = Sunday).
    pub fn get(&self, weekday: usize) -> &[i32] {
        &self.buckets[weekday]
    }

    /// Iterate `(weekday_index, intervals)` in Monday-first order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &[i32])> {
        self.buckets.iter().map(Vec::as_slice).enumerate()
    }
}

// ── WeekdayStartEnd ───────────────────────────────────────────────────────────

/// Arrival and departure times (seconds since midnight) grouped by weekday.
///
/// `start[d]` and `end[d]` are parallel ordered sequences for weekday `d`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WeekdayStartEnd {
    pub start: [Vec<i32>; 7],
    pub end: [Vec<i32>; 7],
}

// ── Grouping transforms ───────────────────────────────────────────────────────

/// Group one user's presence entries by weekday.
///
/// Appends `interval(start, end)` for every (date, record) pair to the bucket
/// of `date.weekday()`.
pub fn group_by_weekday(days: &DayRecords) -> WeekdayBuckets {
    let mut result = WeekdayBuckets::default();
    for (date, record) in days {
        let weekday = date.weekday().num_days_from_monday() as usize;
        result.buckets[weekday].push(interval(record.start, record.end));
    }
    result
}

/// Group one user's arrival and departure times by weekday.
pub fn group_by_weekday_in_secs(days: &DayRecords) -> WeekdayStartEnd {
    let mut result = WeekdayStartEnd::default();
    for (date, record) in days {
        let weekday = date.weekday().num_days_from_monday() as usize;
        result.start[weekday].push(seconds_since_midnight(record.start));
        result.end[weekday].push(seconds_since_midnight(record.end));
    }
    result
}

// ── Mean ──────────────────────────────────────────────────────────────────────

/// Arithmetic mean of `values`. Returns exactly `0.0` for an empty slice.
pub fn mean<T>(values: &[T]) -> f64
where
    T: Copy,
    f64: From<T>,
{
    if values.is_empty() {
        return 0.0;
    }
    let sum: f64 = values.iter().copied().map(f64::from).sum();
    sum / values.len() as f64
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};
    use presence_core::models::DayRecord;

    // ── Helpers ───────────────────────────────────────────────────────────────

    fn record(start: (u32, u32, u32), end: (u32, u32, u32)) -> DayRecord {
        DayRecord {
            start: NaiveTime::from_hms_opt(start.0, start.1, start.2).unwrap(),
            end: NaiveTime::from_hms_opt(end.0, end.1, end.2).unwrap(),
        }
    }

    /// One week of sample entries for user 10: Tue/Wed/Thu of 2013-09-09.
    fn sample_days() -> DayRecords {
        let mut days = DayRecords::new();
        days.insert(
            NaiveDate::from_ymd_opt(2013, 9, 10).unwrap(),
            record((9, 39, 5), (17, 59, 52)),
        );
        days.insert(
            NaiveDate::from_ymd_opt(2013, 9, 11).unwrap(),
            record((9, 19, 52), (16, 7, 37)),
        );
        days.insert(
            NaiveDate::from_ymd_opt(2013, 9, 12).unwrap(),
            record((10, 48, 46), (17, 23, 51)),
        );
        days
    }

    // ── mean ──────────────────────────────────────────────────────────────────

    #[test]
    fn test_mean_integers() {
        assert_eq!(mean(&[3, 4, 5]), 4.0);
    }

    #[test]
    fn test_mean_empty_is_zero() {
        let empty: [i32; 0] = [];
        assert_eq!(mean(&empty), 0.0);
    }

    #[test]
    fn test_mean_floats() {
        assert!((mean(&[12.7, 20.5, 16.5]) - 16.566_666_66).abs() < 1e-6);
    }

    // ── group_by_weekday ──────────────────────────────────────────────────────

    #[test]
    fn test_group_by_weekday_sample_user() {
        let buckets = group_by_weekday(&sample_days());

        assert_eq!(buckets.get(0), &[] as &[i32]); // Mon
        assert_eq!(buckets.get(1), &[30_047]); // Tue
        assert_eq!(buckets.get(2), &[24_465]); // Wed
        assert_eq!(buckets.get(3), &[23_705]); // Thu
        assert_eq!(buckets.get(4), &[] as &[i32]); // Fri
        assert_eq!(buckets.get(5), &[] as &[i32]); // Sat
        assert_eq!(buckets.get(6), &[] as &[i32]); // Sun
    }

    #[test]
    fn test_group_by_weekday_always_seven_buckets() {
        let buckets = group_by_weekday(&DayRecords::new());
        assert_eq!(buckets.buckets.len(), 7);
        assert!(buckets.iter().all(|(_, intervals)| intervals.is_empty()));
    }

    #[test]
    fn test_group_by_weekday_accumulates_same_weekday() {
        let mut days = DayRecords::new();
        // Two consecutive Mondays.
        days.insert(
            NaiveDate::from_ymd_opt(2013, 9, 9).unwrap(),
            record((9, 0, 0), (17, 0, 0)),
        );
        days.insert(
            NaiveDate::from_ymd_opt(2013, 9, 16).unwrap(),
            record((8, 0, 0), (15, 0, 0)),
        );

        let buckets = group_by_weekday(&days);
        assert_eq!(buckets.get(0), &[28_800, 25_200]);
        assert!(buckets.get(1).is_empty());
    }

    #[test]
    fn test_group_by_weekday_negative_interval_propagated() {
        let mut days = DayRecords::new();
        // Friday shift spanning midnight: end precedes start on the clock.
        days.insert(
            NaiveDate::from_ymd_opt(2013, 9, 13).unwrap(),
            record((23, 0, 0), (7, 0, 0)),
        );

        let buckets = group_by_weekday(&days);
        assert_eq!(buckets.get(4), &[-57_600]);
    }

    // ── group_by_weekday_in_secs ──────────────────────────────────────────────

    #[test]
    fn test_group_by_weekday_in_secs_sample_user() {
        let grouped = group_by_weekday_in_secs(&sample_days());

        // Tuesday 2013-09-10: 09:39:05 → 17:59:52.
        assert_eq!(grouped.start[1], vec![34_745]);
        assert_eq!(grouped.end[1], vec![64_792]);
        // Monday has no entries on either side.
        assert!(grouped.start[0].is_empty());
        assert!(grouped.end[0].is_empty());
    }

    #[test]
    fn test_group_by_weekday_in_secs_parallel_sequences() {
        let mut days = DayRecords::new();
        days.insert(
            NaiveDate::from_ymd_opt(2013, 9, 9).unwrap(),
            record((9, 0, 0), (17, 0, 0)),
        );
        days.insert(
            NaiveDate::from_ymd_opt(2013, 9, 16).unwrap(),
            record((10, 0, 0), (18, 0, 0)),
        );

        let grouped = group_by_weekday_in_secs(&days);
        assert_eq!(grouped.start[0], vec![32_400, 36_000]);
        assert_eq!(grouped.end[0], vec![61_200, 64_800]);
    }

    // ── WEEKDAY_ABBR ──────────────────────────────────────────────────────────

    #[test]
    fn test_weekday_abbreviations_monday_first() {
        assert_eq!(WEEKDAY_ABBR[0], "Mon");
        assert_eq!(WEEKDAY_ABBR[6], "Sun");
        assert_eq!(WEEKDAY_ABBR.len(), 7);
    }
}
