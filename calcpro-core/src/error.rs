//! Engine failure values
//!
//! Errors never crash the process. Every engine returns them as values and
//! the presentation layer decides how to render them.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure of a calculation engine.
///
/// Division by zero is an explicit variant rather than a propagated
/// `NaN`/`Infinity`: the display layer must never receive a non-finite
/// number from an engine that can fail.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum CalcError {
    #[error("invalid number: {0}")]
    Parse(String),

    #[error("division by zero")]
    DivisionByZero,

    #[error("domain error: {0}")]
    Domain(String),
}

impl CalcError {
    pub fn domain(details: impl Into<String>) -> Self {
        CalcError::Domain(details.into())
    }
}
