//! AST evaluation

use crate::ast::{BinOp, Expr, Func};

/// Evaluate an expression tree.
///
/// Arithmetic follows IEEE 754 semantics: `1/0` is infinity, not an error.
/// Failures (malformed input) are caught at parse time, before a tree
/// exists.
pub fn eval(expr: &Expr) -> f64 {
    match expr {
        Expr::Number(value) => *value,
        Expr::Neg(inner) => -eval(inner),
        Expr::UnaryFunc(func, argument) => {
            let x = eval(argument);
            match func {
                Func::Sin => x.sin(),
                Func::Cos => x.cos(),
                Func::Tan => x.tan(),
            }
        }
        Expr::BinaryOp(left, op, right) => {
            let l = eval(left);
            let r = eval(right);
            match op {
                BinOp::Add => l + r,
                BinOp::Sub => l - r,
                BinOp::Mul => l * r,
                BinOp::Div => l / r,
                BinOp::Pow => l.powf(r),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse;

    #[test]
    fn test_arithmetic() {
        assert_eq!(eval(&parse("6*7").unwrap()), 42.0);
        assert_eq!(eval(&parse("1/4").unwrap()), 0.25);
    }

    #[test]
    fn test_division_by_zero_is_ieee() {
        assert!(eval(&parse("1/0").unwrap()).is_infinite());
    }

    #[test]
    fn test_functions_in_radians() {
        let v = eval(&parse("sin(0)").unwrap());
        assert_eq!(v, 0.0);
    }
}
