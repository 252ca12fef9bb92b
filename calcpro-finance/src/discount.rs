//! Single and chained discounts

use calcpro_core::round2;
use serde::{Deserialize, Serialize};

/// Result of a single percentage discount.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Discount {
    pub final_price: f64,
    pub saved: f64,
}

/// Result of a sequential discount chain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscountChain {
    pub final_price: f64,
    pub total_saved: f64,
    /// Amount saved by each applied step, in order, rounded to cents.
    pub step_savings: Vec<f64>,
}

/// One discount off one price.
pub fn single_discount(price: f64, percent: f64) -> Discount {
    let saved = price * percent / 100.0;
    Discount {
        final_price: round2(price - saved),
        saved: round2(saved),
    }
}

/// Apply discounts sequentially, each to the already-discounted running
/// price, never to the original. A `None` step is a blank entry and is
/// skipped entirely, which is not the same as a 0% discount step.
///
/// Step savings are recorded rounded to cents while the running price is
/// reduced by the unrounded amount; `total_saved` sums the recorded
/// (rounded) step savings.
pub fn chain_discounts(base_price: f64, steps: &[Option<f64>]) -> DiscountChain {
    let mut current = base_price;
    let mut step_savings = Vec::with_capacity(steps.len());

    for percent in steps.iter().flatten() {
        let amount = current * percent / 100.0;
        step_savings.push(round2(amount));
        current -= amount;
    }

    let total_saved: f64 = step_savings.iter().sum();

    DiscountChain {
        final_price: round2(current),
        total_saved: round2(total_saved),
        step_savings,
    }
}
