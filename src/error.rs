use std::fmt;

/// Source location span for error reporting
/// Represents a range of characters in the input string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    /// Start position (0-indexed byte offset)
    pub start: usize,
    /// End position (exclusive, 0-indexed byte offset)
    pub end: usize,
}

impl Span {
    /// Create a new span
    pub fn new(start: usize, end: usize) -> Self {
        Span { start, end }
    }

    /// Create a span for a single position
    pub fn at(pos: usize) -> Self {
        Span {
            start: pos,
            end: pos + 1,
        }
    }

    /// Span covering two spans and everything between them
    pub fn merge(start: Span, end: Span) -> Self {
        Span {
            start: start.start,
            end: end.end,
        }
    }

    /// Check if this span has valid location info
    pub fn is_valid(&self) -> bool {
        self.end > self.start
    }

    /// Format the span for display (1-indexed for users)
    pub fn display(&self) -> String {
        if !self.is_valid() {
            String::new()
        } else if self.end - self.start == 1 {
            format!(" at position {}", self.start + 1)
        } else {
            format!(" at positions {}-{}", self.start + 1, self.end)
        }
    }
}

/// Errors that can occur while lexing or parsing a formula string
#[derive(Debug, Clone, PartialEq)]
pub enum ParseError {
    /// The formula text is blank
    EmptyFormula,
    /// A character outside the supported vocabulary
    UnexpectedCharacter { ch: char, span: Span },
    /// A numeric literal that does not parse as a finite number
    InvalidNumber { text: String, span: Span },
    /// An identifier matching neither the function registry nor `x`/`e`/`pi`
    UnknownIdentifier { name: String, span: Span },
    /// A token that does not fit the grammar at its position
    UnexpectedToken {
        expected: String,
        found: String,
        span: Span,
    },
    /// Input continues after a complete expression
    TrailingTokens { span: Span },
    /// An opening or closing parenthesis without its partner
    UnmatchedParenthesis { span: Span },
    /// The token stream ended mid-expression
    UnexpectedEndOfInput,
}

impl ParseError {
    /// Create UnexpectedToken from display strings
    pub(crate) fn unexpected(
        expected: impl Into<String>,
        found: impl Into<String>,
        span: Span,
    ) -> Self {
        ParseError::UnexpectedToken {
            expected: expected.into(),
            found: found.into(),
            span,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::EmptyFormula => write!(f, "Formula cannot be empty"),
            ParseError::UnexpectedCharacter { ch, span } => {
                write!(f, "Unexpected character '{}'{}", ch, span.display())
            }
            ParseError::InvalidNumber { text, span } => {
                write!(f, "Invalid number format: '{}'{}", text, span.display())
            }
            ParseError::UnknownIdentifier { name, span } => {
                write!(
                    f,
                    "Unknown function or constant: '{}'{}",
                    name,
                    span.display()
                )
            }
            ParseError::UnexpectedToken {
                expected,
                found,
                span,
            } => {
                write!(
                    f,
                    "Expected {}, but got '{}'{}",
                    expected,
                    found,
                    span.display()
                )
            }
            ParseError::TrailingTokens { span } => {
                write!(
                    f,
                    "Unexpected input after the end of the expression{}",
                    span.display()
                )
            }
            ParseError::UnmatchedParenthesis { span } => {
                write!(f, "Unmatched parenthesis{}", span.display())
            }
            ParseError::UnexpectedEndOfInput => write!(f, "Unexpected end of input"),
        }
    }
}

impl std::error::Error for ParseError {}

/// What went wrong while evaluating an AST node at a concrete x
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvalErrorKind {
    DivisionByZero,
    NegativeSqrtArgument,
    NonPositiveLogArgument,
    NumericOverflow,
}

/// Evaluation failure, pointing at the AST node that produced it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EvalError {
    pub kind: EvalErrorKind,
    pub span: Span,
}

impl EvalError {
    pub(crate) fn new(kind: EvalErrorKind, span: Span) -> Self {
        EvalError { kind, span }
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self.kind {
            EvalErrorKind::DivisionByZero => "division by zero",
            EvalErrorKind::NegativeSqrtArgument => "square root of a negative value",
            EvalErrorKind::NonPositiveLogArgument => "logarithm of a non-positive value",
            EvalErrorKind::NumericOverflow => "numeric overflow",
        };
        write!(f, "{}{}", msg, self.span.display())
    }
}

impl std::error::Error for EvalError {}

/// Errors from building a sampling domain
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DomainError {
    /// Limits are not finite, or min is not strictly below max
    InvalidRange { min: f64, max: f64 },
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomainError::InvalidRange { min, max } => {
                write!(f, "Invalid plot range: [{}, {}]", min, max)
            }
        }
    }
}

impl std::error::Error for DomainError {}

/// User-facing errors returned by the plot facade
///
/// The `Display` strings are the messages the presentation layer shows
/// verbatim, so they are written for end users rather than developers.
#[derive(Debug, Clone, PartialEq)]
pub enum UserError {
    /// One or more of the three input fields is blank
    EmptyFields,
    /// Min/max text does not parse as a finite number
    LimitsNotNumeric,
    /// min >= max
    InvalidLimits,
    /// The formula failed to lex, parse, or evaluate
    InvalidFunction { detail: String },
}

impl fmt::Display for UserError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserError::EmptyFields => write!(f, "Please, complete all the input fields"),
            UserError::LimitsNotNumeric => write!(f, "Limits must be numbers only"),
            UserError::InvalidLimits => {
                write!(f, "The maximum value must be greater than the minimum value")
            }
            UserError::InvalidFunction { detail } => write!(f, "Invalid function, {}", detail),
        }
    }
}

impl std::error::Error for UserError {}

impl From<ParseError> for UserError {
    fn from(err: ParseError) -> Self {
        UserError::InvalidFunction {
            detail: err.to_string(),
        }
    }
}

impl From<EvalError> for UserError {
    fn from(err: EvalError) -> Self {
        UserError::InvalidFunction {
            detail: err.to_string(),
        }
    }
}
