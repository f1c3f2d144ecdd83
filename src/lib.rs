//! Expression Engine for Function Plotting
//!
//! A small, safe Rust library that turns a human-written formula string and a
//! pair of x limits into the sampled `(x, f(x))` sequence a plot is drawn
//! from. Formulas are lexed, parsed into an AST over a fixed vocabulary, and
//! evaluated by a side-effect-free tree walk; untrusted text is never
//! executed as code.
//!
//! # Features
//! - Recursive-descent (Pratt) parsing with explicit precedence and spans
//! - Whitelisted function registry (`sqrt, exp, log, sin, cos, tan`) with
//!   domain preconditions checked before computing
//! - Per-sample evaluation with isolated domain errors
//! - Builder-style facade mirroring the plotter's validation order
//!
//! # Usage Examples
//!
//! ## One-call facade
//! ```
//! use fnplot::compute_plot;
//!
//! let data = compute_plot("sin(x)", "0", "6.28").unwrap();
//! assert_eq!(data.points.len(), fnplot::DEFAULT_SAMPLE_COUNT);
//! assert_eq!(data.formula, "sin(x)");
//! ```
//!
//! ## Parse and evaluate directly
//! ```
//! use fnplot::{evaluate, parse};
//!
//! let expr = parse("x^2 + 1").unwrap();
//! assert_eq!(evaluate(&expr, 3.0).unwrap(), 10.0);
//! ```

mod ast;
mod display;
mod domain;
mod error;
pub mod functions;
mod parser;
mod plot;

pub mod evaluator;

#[cfg(test)]
mod tests;

// Re-export key types for easier usage
pub use ast::{BinaryOp, Expr, ExprKind, UnaryOp};
pub use domain::{DEFAULT_SAMPLE_COUNT, Domain};
pub use error::{DomainError, EvalError, EvalErrorKind, ParseError, Span, UserError};
pub use evaluator::{evaluate, evaluate_all};
pub use functions::MathFunction;
pub use parser::parse;
pub use plot::{DomainErrorPolicy, Plot, PlotData};

#[cfg(feature = "parallel")]
pub use evaluator::evaluate_all_par;

/// Main API function for computing a plot from raw input strings
///
/// # Arguments
/// * `formula_text` - The function of x to plot, exactly as typed (e.g. "x^2 + sin(x)")
/// * `min_text` - Minimum x value, as typed (e.g. "-5")
/// * `max_text` - Maximum x value, as typed (e.g. "5")
///
/// # Returns
/// Plot-ready `(x, y)` samples plus the normalized formula, or the first
/// [`UserError`] encountered in validation order.
///
/// # Example
/// ```
/// use fnplot::compute_plot;
///
/// let data = compute_plot("1/x", "1", "2").unwrap();
/// assert_eq!(data.points[0], (1.0, 1.0));
/// ```
///
/// # Note
/// For control over sample count and domain-error policy, use the [`Plot`]
/// builder:
/// ```
/// use fnplot::{DomainErrorPolicy, Plot};
///
/// let data = Plot::new()
///     .samples(200)
///     .on_domain_error(DomainErrorPolicy::OmitFailures)
///     .compute("1/x", "-1", "1");
/// assert!(data.is_ok());
/// ```
pub fn compute_plot(
    formula_text: &str,
    min_text: &str,
    max_text: &str,
) -> Result<PlotData, UserError> {
    Plot::new().compute(formula_text, min_text, max_text)
}
