//! Tip splitting

use calcpro_core::{round2, CalcError};
use serde::{Deserialize, Serialize};

/// Quick-select tip percentages offered by the presentation layer.
pub const TIP_PRESETS: [f64; 4] = [10.0, 15.0, 20.0, 25.0];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TipSplit {
    pub tip_amount: f64,
    pub total: f64,
    pub per_person: f64,
}

/// Tip on a bill, split across a party.
///
/// The party size must be at least one. The UI already disables the action
/// for an empty field, but the engine still refuses zero rather than
/// dividing by it.
pub fn tip_split(bill: f64, tip_percent: f64, people: u32) -> Result<TipSplit, CalcError> {
    if people == 0 {
        return Err(CalcError::domain("party size must be at least 1"));
    }

    let tip_amount = bill * tip_percent / 100.0;
    let total = bill + tip_amount;

    Ok(TipSplit {
        tip_amount: round2(tip_amount),
        total: round2(total),
        per_person: round2(total / f64::from(people)),
    })
}
