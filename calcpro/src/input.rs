//! Raw-input parsing for presentation adapters
//!
//! Empty or unparseable input means "not ready": the engine is not invoked
//! and nothing is shown, not even an error. Adapters should disable their
//! trigger action until every required field parses.

use std::str::FromStr;

use chrono::{NaiveDate, NaiveTime};

/// Parse one raw text field. Whitespace-only input is not ready.
pub fn field<T: FromStr>(raw: &str) -> Option<T> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    raw.parse().ok()
}

/// Parse a field the user may omit entirely. An absent field is
/// `Some(None)` (the engine runs with its default); a field that is
/// present but blank or unparseable is `None` (not ready), never a
/// silent default.
pub fn optional_field<T: FromStr>(raw: Option<&str>) -> Option<Option<T>> {
    match raw {
        None => Some(None),
        Some(raw) => field(raw).map(Some),
    }
}

/// Parse an ISO `YYYY-MM-DD` date field.
pub fn date_field(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

/// Parse a time-of-day field, `HH:MM` or `HH:MM:SS`.
pub fn time_field(raw: &str) -> Option<NaiveTime> {
    let raw = raw.trim();
    NaiveTime::parse_from_str(raw, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M:%S"))
        .ok()
}

/// Parse a list of discount-percent fields, keeping blanks as skipped
/// steps (a blank is not 0%).
pub fn discount_fields(raws: &[&str]) -> Vec<Option<f64>> {
    raws.iter().map(|raw| field::<f64>(raw)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_empty_is_not_ready() {
        assert_eq!(field::<f64>(""), None);
        assert_eq!(field::<f64>("   "), None);
    }

    #[test]
    fn test_field_unparseable_is_not_ready() {
        assert_eq!(field::<f64>("12x"), None);
        assert_eq!(field::<u32>("-3"), None);
    }

    #[test]
    fn test_field_parses_with_whitespace() {
        assert_eq!(field::<f64>(" 42.5 "), Some(42.5));
        assert_eq!(field::<u32>("4"), Some(4));
    }

    #[test]
    fn test_optional_field_absent_is_default() {
        assert_eq!(optional_field::<f64>(None), Some(None));
    }

    #[test]
    fn test_optional_field_present_value() {
        assert_eq!(optional_field::<f64>(Some("2400")), Some(Some(2400.0)));
    }

    #[test]
    fn test_optional_field_present_but_unparseable_is_not_ready() {
        // "--tax abc" must stop the calculation, not become tax = 0
        assert_eq!(optional_field::<f64>(Some("abc")), None);
        assert_eq!(optional_field::<f64>(Some("")), None);
    }

    #[test]
    fn test_date_field() {
        assert_eq!(
            date_field("2024-01-01"),
            NaiveDate::from_ymd_opt(2024, 1, 1)
        );
        assert_eq!(date_field("01/01/2024"), None);
    }

    #[test]
    fn test_time_field_both_shapes() {
        assert_eq!(time_field("09:30"), NaiveTime::from_hms_opt(9, 30, 0));
        assert_eq!(time_field("09:30:15"), NaiveTime::from_hms_opt(9, 30, 15));
        assert_eq!(time_field("late"), None);
    }

    #[test]
    fn test_discount_fields_keep_blanks() {
        assert_eq!(
            discount_fields(&["10", "", "5"]),
            vec![Some(10.0), None, Some(5.0)]
        );
    }
}
