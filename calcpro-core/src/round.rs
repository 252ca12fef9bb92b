//! Display rounding
//!
//! Engines compute on full-precision doubles; rounding happens once, at the
//! edge where a result becomes user-visible. Money rounds to cents, health
//! figures to one decimal, unit conversions to at most eight digits with
//! trailing zeros trimmed.

/// Round to 2 fractional digits (cents).
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Round to 1 fractional digit.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Format with at most `max_fraction_digits` fractional digits, trimming
/// trailing zeros down to a minimum of zero fractional digits.
pub fn format_trimmed(value: f64, max_fraction_digits: usize) -> String {
    let formatted = format!("{value:.max_fraction_digits$}");
    if formatted.contains('.') {
        formatted
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    } else {
        formatted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round2() {
        assert_eq!(round2(19.004), 19.0);
        assert_eq!(round2(2.567), 2.57);
        assert_eq!(round2(-1.004), -1.0);
        assert_eq!(round2(81.0), 81.0);
    }

    #[test]
    fn test_round1() {
        assert_eq!(round1(24.69), 24.7);
        assert_eq!(round1(18.44), 18.4);
    }

    #[test]
    fn test_format_trimmed_drops_zeros() {
        assert_eq!(format_trimmed(3280.84, 8), "3280.84");
        assert_eq!(format_trimmed(5.0, 8), "5");
        assert_eq!(format_trimmed(0.5, 8), "0.5");
    }

    #[test]
    fn test_format_trimmed_caps_digits() {
        // 1/3 has more than 8 digits; output stops at 8
        assert_eq!(format_trimmed(1.0 / 3.0, 8), "0.33333333");
    }

    #[test]
    fn test_format_trimmed_integer() {
        assert_eq!(format_trimmed(1000.0, 8), "1000");
        assert_eq!(format_trimmed(0.0, 8), "0");
    }
}
