//! Presentation helpers for timestamps.
//!
//! Display-only: nothing here feeds back into scoring.

use chrono::{DateTime, Utc};

use crate::models::MILLIS_PER_DAY;

/// Formats a timestamp as a short label, e.g. `"Jan 5, 3:45 PM"`.
pub fn format_short(ts: DateTime<Utc>) -> String {
    ts.format("%b %-d, %-I:%M %p").to_string()
}

/// Whole days elapsed between `ts` and `now`, floored.
///
/// A task created 36 hours ago is 1 day old; timestamps in the future
/// yield negative values.
pub fn days_old(ts: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    ((now - ts).num_milliseconds() as f64 / MILLIS_PER_DAY).floor() as i64
}
