//! CalcPro Units - Category-scoped unit conversion
//!
//! Three categories of everyday units, each with a fixed base unit:
//! - Length (base: meters)
//! - Weight (base: kilograms)
//! - Area (base: square meters)
//!
//! Every unit carries one factor relative to its category base, so a
//! conversion is a normalize/denormalize pair through the base unit and
//! adding a unit costs one table entry, never a pairwise row.

mod convert;
mod registry;

pub use convert::{convert, format_converted, ConvertError, Conversion, DISPLAY_FRACTION_DIGITS};
pub use registry::{UnitCategory, UnitDef, UnitRegistry, UNITS};
