use super::tokens::{Operator, Token, TokenKind, UNARY_PRECEDENCE};
use crate::ast::{BinaryOp, Expr, UnaryOp};
use crate::error::{ParseError, Span};
use crate::functions::MathFunction;

/// Parse tokens into an AST using Pratt parsing
pub(crate) fn parse_expression(tokens: &[Token]) -> Result<Expr, ParseError> {
    if tokens.is_empty() {
        return Err(ParseError::EmptyFormula);
    }

    let mut parser = Parser { tokens, pos: 0 };
    let expr = parser.parse_expr(0)?;

    // A complete expression must consume every token
    if let Some(token) = parser.current() {
        return Err(match token.kind {
            TokenKind::RightParen => ParseError::UnmatchedParenthesis { span: token.span },
            _ => ParseError::TrailingTokens { span: token.span },
        });
    }

    Ok(expr)
}

struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Parser<'a> {
    fn current(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    fn advance(&mut self) {
        self.pos += 1;
    }

    fn parse_expr(&mut self, min_precedence: u8) -> Result<Expr, ParseError> {
        // Parse left side (prefix)
        let mut left = self.parse_prefix()?;

        // Parse operators and right side (infix)
        while let Some(token) = self.current() {
            let precedence = match token.kind {
                TokenKind::Operator(op) => op.precedence(),
                _ => break,
            };

            if precedence < min_precedence {
                break;
            }

            left = self.parse_infix(left)?;
        }

        Ok(left)
    }

    fn parse_prefix(&mut self) -> Result<Expr, ParseError> {
        let token = self.current().ok_or(ParseError::UnexpectedEndOfInput)?;

        match &token.kind {
            TokenKind::Number(n) => {
                self.advance();
                Ok(Expr::number(*n, token.span))
            }

            TokenKind::Variable => {
                self.advance();
                Ok(Expr::variable(token.span))
            }

            TokenKind::Pi => {
                self.advance();
                Ok(Expr::number(std::f64::consts::PI, token.span))
            }

            TokenKind::Euler => {
                self.advance();
                // `e^<expr>` is the exponential function, not a generic power
                if let Some(next) = self.current() {
                    if next.kind == TokenKind::Operator(Operator::Pow) {
                        self.advance(); // consume ^
                        let exponent = self.parse_expr(Operator::Pow.precedence())?;
                        let span = Span::merge(token.span, exponent.span);
                        return Ok(Expr::call(MathFunction::Exp, exponent, span));
                    }
                }
                Ok(Expr::number(std::f64::consts::E, token.span))
            }

            TokenKind::Function(function) => {
                let function = *function;
                let name_span = token.span;
                self.advance();

                // A function name must be followed by a parenthesized argument
                match self.current() {
                    Some(next) if next.kind == TokenKind::LeftParen => self.advance(),
                    Some(next) => {
                        return Err(ParseError::unexpected("'('", next.describe(), next.span));
                    }
                    None => return Err(ParseError::UnexpectedEndOfInput),
                }

                let argument = self.parse_expr(0)?;

                match self.current() {
                    Some(next) if next.kind == TokenKind::RightParen => {
                        let span = Span::merge(name_span, next.span);
                        self.advance();
                        Ok(Expr::call(function, argument, span))
                    }
                    _ => Err(ParseError::UnmatchedParenthesis { span: name_span }),
                }
            }

            TokenKind::Identifier(name) => Err(ParseError::UnknownIdentifier {
                name: name.clone(),
                span: token.span,
            }),

            // Unary minus: precedence between Mul (20) and Pow (30),
            // so -x^2 parses as -(x^2), not (-x)^2
            TokenKind::Operator(Operator::Sub) => {
                let op_span = token.span;
                self.advance();
                let operand = self.parse_expr(UNARY_PRECEDENCE)?;
                let span = Span::merge(op_span, operand.span);
                Ok(Expr::unary(UnaryOp::Neg, operand, span))
            }

            // Unary plus: accepted and ignored
            TokenKind::Operator(Operator::Add) => {
                self.advance();
                self.parse_expr(UNARY_PRECEDENCE)
            }

            TokenKind::LeftParen => {
                let open_span = token.span;
                self.advance();
                let expr = self.parse_expr(0)?;

                match self.current() {
                    Some(next) if next.kind == TokenKind::RightParen => {
                        self.advance();
                        Ok(expr)
                    }
                    _ => Err(ParseError::UnmatchedParenthesis { span: open_span }),
                }
            }

            _ => Err(ParseError::unexpected(
                "a number, 'x', a constant, or '('",
                token.describe(),
                token.span,
            )),
        }
    }

    fn parse_infix(&mut self, left: Expr) -> Result<Expr, ParseError> {
        let token = self.current().ok_or(ParseError::UnexpectedEndOfInput)?;

        let op = match token.kind {
            TokenKind::Operator(op) => op,
            _ => {
                return Err(ParseError::unexpected(
                    "an operator",
                    token.describe(),
                    token.span,
                ));
            }
        };
        self.advance();

        // Right associative operators re-enter at their own precedence,
        // left associative ones one level above
        let next_precedence = if op.is_right_associative() {
            op.precedence()
        } else {
            op.precedence() + 1
        };

        let right = self.parse_expr(next_precedence)?;

        let binary_op = match op {
            Operator::Add => BinaryOp::Add,
            Operator::Sub => BinaryOp::Sub,
            Operator::Mul => BinaryOp::Mul,
            Operator::Div => BinaryOp::Div,
            Operator::Pow => BinaryOp::Pow,
        };

        Ok(Expr::binary(binary_op, left, right))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::ExprKind;

    fn parse_str(input: &str) -> Result<Expr, ParseError> {
        parse_expression(&super::super::lexer::tokenize(input)?)
    }

    #[test]
    fn test_parse_number() {
        let ast = parse_str("3.14").unwrap();
        assert_eq!(ast.as_number(), Some(3.14));
    }

    #[test]
    fn test_parse_variable() {
        let ast = parse_str("x").unwrap();
        assert!(matches!(ast.kind, ExprKind::Variable));
    }

    #[test]
    fn test_parse_addition() {
        let ast = parse_str("1 + 2").unwrap();
        assert!(matches!(
            ast.kind,
            ExprKind::Binary {
                op: BinaryOp::Add,
                ..
            }
        ));
    }

    #[test]
    fn test_precedence() {
        // x + 2 * 3 should be x + (2 * 3)
        let ast = parse_str("x + 2 * 3").unwrap();
        match ast.kind {
            ExprKind::Binary {
                op: BinaryOp::Add,
                left,
                right,
            } => {
                assert!(matches!(left.kind, ExprKind::Variable));
                assert!(matches!(
                    right.kind,
                    ExprKind::Binary {
                        op: BinaryOp::Mul,
                        ..
                    }
                ));
            }
            _ => panic!("Expected Add at top level"),
        }
    }

    #[test]
    fn test_power_is_right_associative() {
        // 2^3^2 should be 2^(3^2)
        let ast = parse_str("2^3^2").unwrap();
        match ast.kind {
            ExprKind::Binary {
                op: BinaryOp::Pow,
                left,
                right,
            } => {
                assert_eq!(left.as_number(), Some(2.0));
                assert!(matches!(
                    right.kind,
                    ExprKind::Binary {
                        op: BinaryOp::Pow,
                        ..
                    }
                ));
            }
            _ => panic!("Expected Pow at top level"),
        }
    }

    #[test]
    fn test_parentheses_override_precedence() {
        // (x + 1) * 2
        let ast = parse_str("(x + 1) * 2").unwrap();
        match ast.kind {
            ExprKind::Binary {
                op: BinaryOp::Mul,
                left,
                right,
            } => {
                assert!(matches!(
                    left.kind,
                    ExprKind::Binary {
                        op: BinaryOp::Add,
                        ..
                    }
                ));
                assert_eq!(right.as_number(), Some(2.0));
            }
            _ => panic!("Expected Mul at top level"),
        }
    }

    #[test]
    fn test_unary_minus_binds_below_pow() {
        // -x^2 should be -(x^2)
        let ast = parse_str("-x^2").unwrap();
        match ast.kind {
            ExprKind::Unary {
                op: UnaryOp::Neg,
                operand,
            } => {
                assert!(matches!(
                    operand.kind,
                    ExprKind::Binary {
                        op: BinaryOp::Pow,
                        ..
                    }
                ));
            }
            _ => panic!("Expected Neg at top level"),
        }
    }

    #[test]
    fn test_function_call() {
        let ast = parse_str("sin(x)").unwrap();
        match ast.kind {
            ExprKind::Call { function, argument } => {
                assert_eq!(function, MathFunction::Sin);
                assert!(matches!(argument.kind, ExprKind::Variable));
            }
            _ => panic!("Expected Call at top level"),
        }
    }

    #[test]
    fn test_function_without_parens_fails() {
        let err = parse_str("sin x").unwrap_err();
        assert!(matches!(err, ParseError::UnexpectedToken { .. }));

        let err = parse_str("sqrt").unwrap_err();
        assert_eq!(err, ParseError::UnexpectedEndOfInput);
    }

    #[test]
    fn test_euler_power_becomes_exp() {
        let ast = parse_str("e^x").unwrap();
        match ast.kind {
            ExprKind::Call { function, argument } => {
                assert_eq!(function, MathFunction::Exp);
                assert!(matches!(argument.kind, ExprKind::Variable));
            }
            _ => panic!("Expected exp call, got {:?}", ast.kind),
        }

        // e^x^2 keeps the right-associative exponent: exp(x^2)
        let ast = parse_str("e^x^2").unwrap();
        match ast.kind {
            ExprKind::Call { function, argument } => {
                assert_eq!(function, MathFunction::Exp);
                assert!(matches!(
                    argument.kind,
                    ExprKind::Binary {
                        op: BinaryOp::Pow,
                        ..
                    }
                ));
            }
            _ => panic!("Expected exp call, got {:?}", ast.kind),
        }
    }

    #[test]
    fn test_standalone_euler_is_number() {
        let ast = parse_str("e").unwrap();
        assert_eq!(ast.as_number(), Some(std::f64::consts::E));

        let ast = parse_str("2 * e").unwrap();
        assert!(matches!(
            ast.kind,
            ExprKind::Binary {
                op: BinaryOp::Mul,
                ..
            }
        ));
    }

    #[test]
    fn test_unknown_identifier_rejected() {
        let err = parse_str("foo(x)").unwrap_err();
        assert!(matches!(err, ParseError::UnknownIdentifier { ref name, .. } if name == "foo"));
    }

    #[test]
    fn test_trailing_tokens() {
        let err = parse_str("2 + 3 5").unwrap_err();
        assert!(matches!(err, ParseError::TrailingTokens { .. }));

        // Implicit multiplication is not supported
        let err = parse_str("2x").unwrap_err();
        assert!(matches!(err, ParseError::TrailingTokens { .. }));
    }

    #[test]
    fn test_unmatched_parentheses() {
        assert!(matches!(
            parse_str("(x + 1").unwrap_err(),
            ParseError::UnmatchedParenthesis { .. }
        ));
        assert!(matches!(
            parse_str("x + 1)").unwrap_err(),
            ParseError::UnmatchedParenthesis { .. }
        ));
        assert!(matches!(
            parse_str("sin(x").unwrap_err(),
            ParseError::UnmatchedParenthesis { .. }
        ));
    }

    #[test]
    fn test_empty_parentheses_fail() {
        let err = parse_str("()").unwrap_err();
        assert!(matches!(err, ParseError::UnexpectedToken { .. }));
    }

    #[test]
    fn test_incomplete_expression() {
        assert_eq!(parse_str("2 +").unwrap_err(), ParseError::UnexpectedEndOfInput);
    }
}
