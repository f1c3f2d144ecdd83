//! Orchestration facade: raw input strings in, plot-ready data out
//!
//! The single entry point the presentation layer calls. Validation runs in
//! the order the user sees errors: blank fields, non-numeric limits,
//! inverted limits, then the formula itself. Every stage returns a value;
//! nothing typed by the user is ever executed as code.

use crate::domain::{DEFAULT_SAMPLE_COUNT, Domain};
use crate::error::UserError;
use crate::evaluator;
use crate::parser;
use tracing::debug;

/// What to do when some samples hit a domain error (e.g. `1/x` crossing 0)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DomainErrorPolicy {
    /// Fail the whole plot on the first failed sample (the historical
    /// behavior of the plotter this engine replaced)
    #[default]
    Abort,
    /// Drop failed samples and plot the rest
    OmitFailures,
}

/// A computed plot: sampled points plus the normalized formula text
#[derive(Debug, Clone, PartialEq)]
pub struct PlotData {
    /// (x, f(x)) pairs in ascending x order
    pub points: Vec<(f64, f64)>,
    /// Normalized display form of the parsed formula
    pub formula: String,
}

/// Builder for plot computations
///
/// # Example
/// ```
/// use fnplot::Plot;
///
/// let data = Plot::new()
///     .samples(100)
///     .compute("x^2", "-1", "1")
///     .unwrap();
/// assert_eq!(data.points.len(), 100);
/// ```
#[derive(Debug, Clone)]
pub struct Plot {
    samples: usize,
    policy: DomainErrorPolicy,
}

impl Default for Plot {
    fn default() -> Self {
        Plot {
            samples: DEFAULT_SAMPLE_COUNT,
            policy: DomainErrorPolicy::default(),
        }
    }
}

impl Plot {
    /// Create a plot builder with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of samples across the domain
    pub fn samples(mut self, count: usize) -> Self {
        self.samples = count;
        self
    }

    /// Set the policy for samples that fail with a domain error
    pub fn on_domain_error(mut self, policy: DomainErrorPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Validate the three raw input strings and compute the plot
    ///
    /// # Errors
    /// Returns the first [`UserError`] encountered, in the order the
    /// original application reported them: empty fields, non-numeric
    /// limits, inverted limits, then formula lex/parse/evaluation failures.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn compute(
        &self,
        formula_text: &str,
        min_text: &str,
        max_text: &str,
    ) -> Result<PlotData, UserError> {
        let formula_text = formula_text.trim();
        let min_text = min_text.trim();
        let max_text = max_text.trim();

        if formula_text.is_empty() || min_text.is_empty() || max_text.is_empty() {
            return Err(UserError::EmptyFields);
        }

        let min = parse_limit(min_text)?;
        let max = parse_limit(max_text)?;
        let domain = Domain::new(min, max).map_err(|_| UserError::InvalidLimits)?;

        let expr = parser::parse(formula_text)?;
        debug!(formula = %expr, min, max, "parsed plot request");

        let xs = domain.sample(self.samples);
        let results = evaluator::evaluate_all(&expr, &xs);

        let mut points = Vec::with_capacity(results.len());
        for (&x, result) in xs.iter().zip(&results) {
            match (result, self.policy) {
                (Ok(y), _) => points.push((x, *y)),
                (Err(err), DomainErrorPolicy::Abort) => {
                    debug!(%err, x, "sample failed, aborting plot");
                    return Err(UserError::from(*err));
                }
                (Err(err), DomainErrorPolicy::OmitFailures) => {
                    debug!(%err, x, "sample failed, omitted");
                }
            }
        }

        debug!(points = points.len(), "plot computed");
        Ok(PlotData {
            points,
            formula: expr.to_string(),
        })
    }
}

/// Parse a limit field as a finite number
fn parse_limit(text: &str) -> Result<f64, UserError> {
    text.parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or(UserError::LimitsNotNumeric)
}
