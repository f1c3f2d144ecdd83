//! Centralized mathematical function registry
//!
//! Single source of truth for the whitelisted functions a formula may call:
//! their recognized names, their numeric transforms, and their domain
//! preconditions. The parser consults the registry to validate identifiers;
//! the evaluator consults it to dispatch.

pub(crate) mod definitions;
pub(crate) mod registry;

pub(crate) use registry::Registry;

/// The whitelisted unary functions
///
/// `Log10` is spelled `log` in formulas and means the base-10 logarithm,
/// matching the plotter this engine replaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathFunction {
    Sqrt,
    Exp,
    Log10,
    Sin,
    Cos,
    Tan,
}

impl MathFunction {
    /// The display spelling, as typed in formulas
    pub fn name(&self) -> &'static str {
        Registry::definition(*self).name
    }
}
