//! CalcPro Expr - Scientific expression evaluation
//!
//! User-entered expressions are tokenized and parsed into a typed AST,
//! then evaluated numerically. Input text is data, never code: there is no
//! dynamic evaluation anywhere in this crate.
//!
//! Supported: `+ - * / ^` (with `^` meaning power, right-associative),
//! parentheses, `sin`/`cos`/`tan` in radians, and the constant `π` (also
//! spelled `pi`).
//!
//! Any malformed input comes back as an [`ExprError`]; the presentation
//! layer renders that as a literal "Error".

mod ast;
mod eval;
mod parser;
mod token;

pub use ast::{BinOp, Expr, Func};
pub use eval::eval;
pub use parser::{parse, ExprError};

/// Parse and evaluate in one step.
pub fn evaluate(input: &str) -> Result<f64, ExprError> {
    parse(input).map(|expr| eval(&expr))
}
