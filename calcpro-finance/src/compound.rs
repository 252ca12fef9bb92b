//! Compound interest (future value)

/// Future value of `principal` compounded annually at `annual_rate_pct`
/// percent for `years` years. `years` need not be an integer.
///
/// The result is unrounded; interest earned is derived at display time via
/// [`interest_earned`], not stored.
pub fn compound_interest(principal: f64, annual_rate_pct: f64, years: f64) -> f64 {
    principal * (1.0 + annual_rate_pct / 100.0).powf(years)
}

/// Interest earned on top of the principal.
pub fn interest_earned(principal: f64, future_value: f64) -> f64 {
    future_value - principal
}

#[cfg(test)]
mod tests {
    use super::*;
    use calcpro_core::round2;

    #[test]
    fn test_future_value() {
        // 1000 at 5% for 2 years = 1102.50
        let fv = compound_interest(1000.0, 5.0, 2.0);
        assert_eq!(round2(fv), 1102.5);
    }

    #[test]
    fn test_zero_rate_is_flat() {
        assert_eq!(compound_interest(500.0, 0.0, 10.0), 500.0);
    }

    #[test]
    fn test_fractional_years() {
        // half a year at 10%: 1000 * 1.1^0.5 ~= 1048.81
        let fv = compound_interest(1000.0, 10.0, 0.5);
        assert_eq!(round2(fv), 1048.81);
    }

    #[test]
    fn test_interest_earned() {
        let fv = compound_interest(1000.0, 5.0, 2.0);
        assert_eq!(round2(interest_earned(1000.0, fv)), 102.5);
    }
}
