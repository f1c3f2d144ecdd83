//! Function definitions for the registry
//!
//! Each definition binds a formula-level name to its numeric transform.
//! Domain preconditions are checked here, before the transform runs: `sqrt`
//! refuses negative arguments and `log` refuses non-positive arguments
//! rather than yielding NaN.

use super::MathFunction;
use crate::error::EvalErrorKind;

/// Definition of a whitelisted function: name, tag, and numeric transform
#[derive(Clone, Copy)]
pub(crate) struct FunctionDefinition {
    /// Canonical lowercase name, as recognized in formulas (e.g. "sqrt")
    pub name: &'static str,

    /// Enum tag the evaluator dispatches on
    pub function: MathFunction,

    /// Numeric evaluation with domain precondition check
    pub eval: fn(f64) -> Result<f64, EvalErrorKind>,
}

/// All function definitions, in registry order
pub(crate) const ALL_DEFINITIONS: &[FunctionDefinition] = &[
    FunctionDefinition {
        name: "sqrt",
        function: MathFunction::Sqrt,
        eval: |arg| {
            if arg < 0.0 {
                Err(EvalErrorKind::NegativeSqrtArgument)
            } else {
                Ok(arg.sqrt())
            }
        },
    },
    FunctionDefinition {
        name: "exp",
        function: MathFunction::Exp,
        eval: |arg| Ok(arg.exp()),
    },
    FunctionDefinition {
        name: "log",
        function: MathFunction::Log10,
        eval: |arg| {
            if arg <= 0.0 {
                Err(EvalErrorKind::NonPositiveLogArgument)
            } else {
                Ok(arg.log10())
            }
        },
    },
    FunctionDefinition {
        name: "sin",
        function: MathFunction::Sin,
        eval: |arg| Ok(arg.sin()),
    },
    FunctionDefinition {
        name: "cos",
        function: MathFunction::Cos,
        eval: |arg| Ok(arg.cos()),
    },
    FunctionDefinition {
        name: "tan",
        function: MathFunction::Tan,
        eval: |arg| Ok(arg.tan()),
    },
];
