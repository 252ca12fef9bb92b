//! CalcPro Percent - The three percentage questions
//!
//! Three independent pure functions with no shared state:
//! - what is X% of Y
//! - X is what percent of Y
//! - percent change from A to B
//!
//! No rounding happens here; the presentation layer rounds to two decimals
//! at display time.

use calcpro_core::CalcError;

/// What is `percent`% of `number`.
pub fn percent_of(number: f64, percent: f64) -> f64 {
    number * percent / 100.0
}

/// `part` is what percent of `whole`.
///
/// A zero `whole` is an explicit [`CalcError::DivisionByZero`], never a
/// propagated NaN.
pub fn what_percent(part: f64, whole: f64) -> Result<f64, CalcError> {
    if whole == 0.0 {
        return Err(CalcError::DivisionByZero);
    }
    Ok(part / whole * 100.0)
}

/// Percent change from `from` to `to`. Sign is preserved: positive means
/// increase, negative decrease, zero no change.
pub fn percent_change(from: f64, to: f64) -> Result<f64, CalcError> {
    if from == 0.0 {
        return Err(CalcError::DivisionByZero);
    }
    Ok((to - from) / from * 100.0)
}
