//! Amortized mortgage payments

use calcpro_core::{round2, CalcError};
use serde::{Deserialize, Serialize};

/// Where the money over the full term goes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MortgageBreakdown {
    pub principal: f64,
    pub interest: f64,
    pub tax: f64,
    pub insurance: f64,
}

/// Monthly payment plus term totals, all rounded to cents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MortgagePayment {
    /// Amortized payment plus monthly tax and insurance.
    pub monthly: f64,
    /// Total paid over the full term.
    pub total: f64,
    pub breakdown: MortgageBreakdown,
}

/// Standard amortizing-loan payment.
///
/// `payment = P * r(1+r)^n / ((1+r)^n - 1)` with `r` the monthly rate and
/// `n` the number of monthly payments. A zero rate makes that formula
/// divide by zero, so it is special-cased to `P / n`. Annual property tax
/// and insurance (default 0) are split across twelve months and added on
/// top of the amortized payment, never amortized themselves.
pub fn mortgage(
    principal: f64,
    annual_rate_pct: f64,
    term_years: f64,
    annual_tax: Option<f64>,
    annual_insurance: Option<f64>,
) -> Result<MortgagePayment, CalcError> {
    let n = term_years * 12.0;
    if n <= 0.0 {
        return Err(CalcError::domain(format!(
            "loan term must be positive, got {term_years} years"
        )));
    }

    let r = annual_rate_pct / 100.0 / 12.0;
    let monthly_tax = annual_tax.unwrap_or(0.0) / 12.0;
    let monthly_insurance = annual_insurance.unwrap_or(0.0) / 12.0;

    let amortized = if r == 0.0 {
        principal / n
    } else {
        let growth = (1.0 + r).powf(n);
        principal * (r * growth) / (growth - 1.0)
    };

    let monthly = amortized + monthly_tax + monthly_insurance;

    Ok(MortgagePayment {
        monthly: round2(monthly),
        total: round2(monthly * n),
        breakdown: MortgageBreakdown {
            principal: round2(principal),
            interest: round2(amortized * n - principal),
            tax: round2(monthly_tax * n),
            insurance: round2(monthly_insurance * n),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_loan() {
        // 100k at 6% over 30 years: 599.55/month
        let m = mortgage(100_000.0, 6.0, 30.0, None, None).unwrap();
        assert_eq!(m.monthly, 599.55);
        assert_eq!(m.breakdown.principal, 100_000.0);
        assert_eq!(m.breakdown.interest, 115_838.19);
        assert_eq!(m.breakdown.tax, 0.0);
        assert_eq!(m.breakdown.insurance, 0.0);
    }

    #[test]
    fn test_zero_rate_is_principal_over_n() {
        let m = mortgage(120_000.0, 0.0, 10.0, None, None).unwrap();
        assert_eq!(m.monthly, 1000.0);
        assert_eq!(m.breakdown.interest, 0.0);
        assert_eq!(m.total, 120_000.0);
    }

    #[test]
    fn test_tax_and_insurance_added_flat() {
        let bare = mortgage(100_000.0, 6.0, 30.0, None, None).unwrap();
        let with = mortgage(100_000.0, 6.0, 30.0, Some(2400.0), Some(1200.0)).unwrap();
        // 2400/12 + 1200/12 = 300 extra per month
        assert_eq!(with.monthly, bare.monthly + 300.0);
        // monthly tax 200 and insurance 100, over 360 payments
        assert_eq!(with.breakdown.tax, 72_000.0);
        assert_eq!(with.breakdown.insurance, 36_000.0);
    }

    #[test]
    fn test_zero_term_rejected() {
        assert!(mortgage(100_000.0, 6.0, 0.0, None, None).is_err());
    }
}
