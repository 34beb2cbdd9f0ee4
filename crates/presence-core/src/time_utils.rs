use chrono::{NaiveTime, Timelike};

// ── Clock arithmetic ──────────────────────────────────────────────────────────

/// Seconds elapsed since midnight for a wall-clock time.
///
/// `hour * 3600 + minute * 60 + second`. No timezone handling.
pub fn seconds_since_midnight(t: NaiveTime) -> i32 {
    (t.hour() * 3600 + t.minute() * 60 + t.second()) as i32
}

/// Interval in seconds between two wall-clock times on the same date.
///
/// Negative when `end` precedes `start` (a record spanning midnight); the
/// value is propagated uncorrected and callers must tolerate it.
pub fn interval(start: NaiveTime, end: NaiveTime) -> i32 {
    seconds_since_midnight(end) - seconds_since_midnight(start)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
