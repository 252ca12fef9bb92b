//! Conversion engine
//!
//! `value / factor(from)` normalizes into the category base unit, then
//! `* factor(to)` denormalizes into the target. Two steps, one factor per
//! unit, no pairwise table.

use calcpro_core::format_trimmed;
use serde::Serialize;
use thiserror::Error;

use crate::registry::{UnitCategory, UNITS};

/// Maximum fractional digits shown for a converted value.
pub const DISPLAY_FRACTION_DIGITS: usize = 8;

/// Conversion failure. An unknown unit name is a caller bug (the UI offers
/// only registry names), surfaced as an error value at this boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    #[error("unknown unit '{unit}' in category {category}")]
    UnknownUnit {
        category: UnitCategory,
        unit: String,
    },
}

/// A converted value together with its display rendering.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Conversion {
    pub value: f64,
    pub display: String,
}

/// Convert `value` from one unit of `category` to another.
pub fn convert(
    category: UnitCategory,
    from: &str,
    to: &str,
    value: f64,
) -> Result<Conversion, ConvertError> {
    let from = UNITS
        .get(category, from)
        .ok_or_else(|| ConvertError::UnknownUnit {
            category,
            unit: from.to_string(),
        })?;
    let to = UNITS
        .get(category, to)
        .ok_or_else(|| ConvertError::UnknownUnit {
            category,
            unit: to.to_string(),
        })?;

    // Factors are positive registry constants, so the division is safe.
    let base_value = value / from.factor;
    let result = base_value * to.factor;

    Ok(Conversion {
        value: result,
        display: format_converted(result),
    })
}

/// Render a converted value: at most 8 fractional digits, trailing zeros
/// trimmed.
pub fn format_converted(value: f64) -> String {
    format_trimmed(value, DISPLAY_FRACTION_DIGITS)
}
