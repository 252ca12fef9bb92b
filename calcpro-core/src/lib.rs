//! CalcPro Core - Fundamental types
//!
//! This crate provides the types shared by every calculation engine:
//! - `CalcError`: the failure values engines return instead of NaN/Infinity
//! - display rounding helpers (`round2`, `round1`, `format_trimmed`)

mod error;
mod round;

pub use error::CalcError;
pub use round::{format_trimmed, round1, round2};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{format_trimmed, round1, round2, CalcError};
}
