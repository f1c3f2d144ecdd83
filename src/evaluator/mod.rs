//! Tree-walk evaluator for parsed expressions
//!
//! A pure, side-effect-free recursive walk: `Variable` nodes substitute the
//! supplied x, operators and function calls evaluate their operands first and
//! check domain preconditions before computing. Each sample of a batch is
//! evaluated independently, so a domain error at one x never poisons the
//! others; whether a failed sample aborts the whole plot is decided by the
//! facade, not here.

use crate::ast::{BinaryOp, Expr, ExprKind, UnaryOp};
use crate::error::{EvalError, EvalErrorKind, Span};
use crate::functions::Registry;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Evaluate an expression at a single x value
///
/// # Example
/// ```
/// use fnplot::{evaluate, parse};
///
/// let expr = parse("x^2 + 1").unwrap();
/// assert_eq!(evaluate(&expr, 3.0).unwrap(), 10.0);
/// ```
///
/// # Errors
/// Returns [`EvalError`] on division by exactly zero, a negative `sqrt`
/// argument, a non-positive `log` argument, or a non-finite result.
pub fn evaluate(expr: &Expr, x: f64) -> Result<f64, EvalError> {
    match &expr.kind {
        ExprKind::Number(n) => Ok(*n),

        ExprKind::Variable => Ok(x),

        ExprKind::Unary {
            op: UnaryOp::Neg,
            operand,
        } => Ok(-evaluate(operand, x)?),

        ExprKind::Binary { op, left, right } => {
            let lhs = evaluate(left, x)?;
            let rhs = evaluate(right, x)?;
            let value = match op {
                BinaryOp::Add => lhs + rhs,
                BinaryOp::Sub => lhs - rhs,
                BinaryOp::Mul => lhs * rhs,
                BinaryOp::Div => {
                    if rhs == 0.0 {
                        return Err(EvalError::new(EvalErrorKind::DivisionByZero, expr.span));
                    }
                    lhs / rhs
                }
                BinaryOp::Pow => lhs.powf(rhs),
            };
            finite(value, expr.span)
        }

        ExprKind::Call { function, argument } => {
            let arg = evaluate(argument, x)?;
            let def = Registry::definition(*function);
            let value = (def.eval)(arg).map_err(|kind| EvalError::new(kind, expr.span))?;
            finite(value, expr.span)
        }
    }
}

/// Evaluate an expression at every sample, independently and in order
///
/// One result per input x; failed samples carry their own [`EvalError`]
/// instead of aborting the rest of the batch.
pub fn evaluate_all(expr: &Expr, xs: &[f64]) -> Vec<Result<f64, EvalError>> {
    xs.iter().map(|&x| evaluate(expr, x)).collect()
}

/// Parallel form of [`evaluate_all`]; results stay in input order
#[cfg(feature = "parallel")]
pub fn evaluate_all_par(expr: &Expr, xs: &[f64]) -> Vec<Result<f64, EvalError>> {
    xs.par_iter().map(|&x| evaluate(expr, x)).collect()
}

/// Overflow check applied to every computed value
///
/// Non-finite intermediate results (including NaN from fractional powers of
/// negative bases) are reported as `NumericOverflow` rather than propagated
/// into the plot data.
fn finite(value: f64, span: Span) -> Result<f64, EvalError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(EvalError::new(EvalErrorKind::NumericOverflow, span))
    }
}
