//! Parser module - converts formula strings to AST
mod lexer;
mod pratt;
mod tokens;

use crate::ast::Expr;
use crate::error::ParseError;

/// Parse a formula string into an expression AST
///
/// Converts a human-written expression over `x` into a structured [`Expr`]
/// that can be evaluated over a sampled domain. Only the whitelisted
/// vocabulary is accepted: decimal literals, `x`, `e`, `pi`, the operators
/// `+ - * / ^`, parentheses, and the registered functions
/// (`sqrt, exp, log, sin, cos, tan`). Nothing in the input is ever executed.
///
/// # Example
/// ```
/// use fnplot::parse;
///
/// let expr = parse("x^2 + sin(x)").unwrap();
/// println!("Parsed: {}", expr);
/// ```
///
/// # Errors
/// Returns [`ParseError`] if:
/// - The input is empty
/// - The input contains characters or names outside the vocabulary
/// - The expression is malformed (unbalanced parentheses, trailing input,
///   a function name without its argument list)
pub fn parse(input: &str) -> Result<Expr, ParseError> {
    // Pipeline: validate -> lex -> parse

    if input.trim().is_empty() {
        return Err(ParseError::EmptyFormula);
    }

    let tokens = lexer::tokenize(input)?;

    pratt::parse_expression(&tokens)
}
