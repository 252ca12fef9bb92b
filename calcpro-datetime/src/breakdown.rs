//! Day counts and years/months/days breakdowns

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// How a day count is split into years, months, and days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DecomposeMode {
    /// Fixed-length model: a year is 365 days, a month 30. Disagrees with
    /// the calendar around leap years and long months; kept as the default
    /// for behavioral parity with the shipped product.
    #[default]
    Approximate,
    /// Calendar-aware (proleptic Gregorian, real month lengths).
    Calendar,
}

/// A span between two dates, decomposed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeBreakdown {
    pub years: i64,
    pub months: i64,
    pub days: i64,
    /// Absolute elapsed days, independent of the decomposition mode.
    pub total_days: i64,
}

/// Absolute number of days between two dates. Order-insensitive.
pub fn days_between(start: NaiveDate, end: NaiveDate) -> i64 {
    (end - start).num_days().abs()
}

/// Age on a given date. The bounds may arrive in either order; the span is
/// absolute.
pub fn age(birth: NaiveDate, on: NaiveDate, mode: DecomposeMode) -> AgeBreakdown {
    decompose(birth, on, mode)
}

/// Difference between two dates, same decomposition as [`age`].
pub fn date_diff(start: NaiveDate, end: NaiveDate, mode: DecomposeMode) -> AgeBreakdown {
    decompose(start, end, mode)
}

fn decompose(a: NaiveDate, b: NaiveDate, mode: DecomposeMode) -> AgeBreakdown {
    let total_days = days_between(a, b);
    let (start, end) = if a <= b { (a, b) } else { (b, a) };

    match mode {
        DecomposeMode::Approximate => {
            let years = total_days / 365;
            let remainder = total_days % 365;
            AgeBreakdown {
                years,
                months: remainder / 30,
                days: remainder % 30,
                total_days,
            }
        }
        DecomposeMode::Calendar => calendar_breakdown(start, end, total_days),
    }
}

fn calendar_breakdown(start: NaiveDate, end: NaiveDate, total_days: i64) -> AgeBreakdown {
    use chrono::{Datelike, Months};

    // Count whole months via clamped month addition (Jan 31 + 1 month is
    // Feb 28/29), then whatever days remain past the anchor.
    let mut whole_months =
        i64::from(end.year() - start.year()) * 12 + i64::from(end.month()) - i64::from(start.month());
    if whole_months > 0 {
        let candidate = start.checked_add_months(Months::new(whole_months as u32));
        if candidate.map_or(true, |d| d > end) {
            whole_months -= 1;
        }
    }

    let anchor = start
        .checked_add_months(Months::new(whole_months.max(0) as u32))
        .unwrap_or(start);

    AgeBreakdown {
        years: whole_months / 12,
        months: whole_months % 12,
        days: (end - anchor).num_days(),
        total_days,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_days_between_full_year() {
        assert_eq!(days_between(date(2024, 1, 1), date(2024, 12, 31)), 365);
    }

    #[test]
    fn test_days_between_is_absolute() {
        assert_eq!(days_between(date(2024, 12, 31), date(2024, 1, 1)), 365);
        assert_eq!(days_between(date(2024, 6, 1), date(2024, 6, 1)), 0);
    }

    #[test]
    fn test_approximate_decomposition() {
        // 400 days: 1 year (365), remainder 35 -> 1 month, 5 days
        let b = date_diff(
            date(2020, 1, 1),
            date(2021, 2, 4),
            DecomposeMode::Approximate,
        );
        assert_eq!(b.total_days, 400);
        assert_eq!((b.years, b.months, b.days), (1, 1, 5));
    }

    #[test]
    fn test_approximate_is_not_calendar_aware() {
        // 2020 is a leap year: 366 elapsed days reads as 1 year 1 day in
        // the fixed model. That mismatch is the documented behavior.
        let b = date_diff(
            date(2020, 1, 1),
            date(2021, 1, 1),
            DecomposeMode::Approximate,
        );
        assert_eq!(b.total_days, 366);
        assert_eq!((b.years, b.months, b.days), (1, 0, 1));
    }

    #[test]
    fn test_calendar_mode_handles_leap_year() {
        let b = date_diff(date(2020, 1, 1), date(2021, 1, 1), DecomposeMode::Calendar);
        assert_eq!((b.years, b.months, b.days), (1, 0, 0));
        assert_eq!(b.total_days, 366);
    }

    #[test]
    fn test_calendar_borrows_month_lengths() {
        // Jan 31 + 1 month clamps to Feb 28, leaving one day to Mar 1
        let b = date_diff(date(2023, 1, 31), date(2023, 3, 1), DecomposeMode::Calendar);
        assert_eq!((b.years, b.months, b.days), (0, 1, 1));

        let c = date_diff(date(2023, 1, 31), date(2023, 2, 1), DecomposeMode::Calendar);
        assert_eq!((c.years, c.months, c.days), (0, 0, 1));
    }

    #[test]
    fn test_age_order_insensitive() {
        let fwd = age(date(1990, 5, 10), date(2024, 5, 10), DecomposeMode::Approximate);
        let rev = age(date(2024, 5, 10), date(1990, 5, 10), DecomposeMode::Approximate);
        assert_eq!(fwd, rev);
    }

    #[test]
    fn test_modes_agree_on_total_days() {
        let a = date(1999, 12, 31);
        let b = date(2024, 3, 1);
        assert_eq!(
            date_diff(a, b, DecomposeMode::Approximate).total_days,
            date_diff(a, b, DecomposeMode::Calendar).total_days,
        );
    }
}
