//! Time-of-day difference

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

const SECONDS_PER_DAY: i64 = 24 * 60 * 60;

/// Whole hours and remaining minutes, truncated (never rounded up).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeDiff {
    pub hours: i64,
    pub minutes: i64,
}

/// Difference between two times of day on an implicit shared date.
///
/// A negative span means the end time falls on the next day, so a full day
/// is added: 23:00 to 01:00 is 2 hours, not -22.
pub fn time_diff(start: NaiveTime, end: NaiveTime) -> TimeDiff {
    let mut seconds = (end - start).num_seconds();
    if seconds < 0 {
        seconds += SECONDS_PER_DAY;
    }

    TimeDiff {
        hours: seconds / 3600,
        minutes: (seconds % 3600) / 60,
    }
}
