//! CalcPro DateTime - Elapsed-time calculations
//!
//! All date engines work on elapsed absolute time: the span between two
//! dates is never negative, whichever way round the bounds arrive. The
//! years/months/days breakdown comes in two modes (see [`DecomposeMode`]):
//! the fixed 365/30 approximation the product has always shipped, and a
//! calendar-aware alternative. The approximation is the default and is
//! never silently replaced.

mod breakdown;
mod clock;

pub use breakdown::{age, date_diff, days_between, AgeBreakdown, DecomposeMode};
pub use clock::{time_diff, TimeDiff};
