//! Lexer for formula strings
//!
//! Splits the raw input into typed, span-carrying tokens. Identifier runs are
//! matched case-insensitively and greedily against the function registry plus
//! the reserved words `x`, `e` and `pi`, always preferring the longest match;
//! this is what makes `sin` unambiguous inside `sinx` and keeps `e` usable
//! both standalone and as the base of `e^x`.

use super::tokens::{Operator, Token, TokenKind};
use crate::error::{ParseError, Span};
use crate::functions::Registry;

type CharIter<'a> = std::iter::Peekable<std::str::CharIndices<'a>>;

/// Convert a raw formula string into a token sequence
pub(crate) fn tokenize(input: &str) -> Result<Vec<Token>, ParseError> {
    let mut tokens = Vec::with_capacity(input.len() / 2);
    let mut chars = input.char_indices().peekable();

    while let Some(&(start, ch)) = chars.peek() {
        match ch {
            c if c.is_whitespace() => {
                chars.next();
            }
            '(' => {
                chars.next();
                tokens.push(Token::new(TokenKind::LeftParen, Span::at(start)));
            }
            ')' => {
                chars.next();
                tokens.push(Token::new(TokenKind::RightParen, Span::at(start)));
            }
            '+' | '-' | '*' | '/' | '^' => {
                chars.next();
                let op = match ch {
                    '+' => Operator::Add,
                    '-' => Operator::Sub,
                    '*' => Operator::Mul,
                    '/' => Operator::Div,
                    _ => Operator::Pow,
                };
                tokens.push(Token::new(TokenKind::Operator(op), Span::at(start)));
            }
            '0'..='9' | '.' => {
                tokens.push(lex_number(input, &mut chars)?);
            }
            'a'..='z' | 'A'..='Z' => {
                lex_identifier_run(input, &mut chars, &mut tokens);
            }
            other => {
                return Err(ParseError::UnexpectedCharacter {
                    ch: other,
                    span: Span::at(start),
                });
            }
        }
    }

    Ok(tokens)
}

/// Lex a decimal literal: digit run with at most one '.'
///
/// No exponent notation; `e` is always the Euler constant in formulas.
fn lex_number(input: &str, chars: &mut CharIter) -> Result<Token, ParseError> {
    let (start, first) = chars.next().expect("caller peeked a digit or dot");
    let mut end = start + first.len_utf8();
    let mut has_dot = first == '.';

    while let Some(&(idx, ch)) = chars.peek() {
        match ch {
            '0'..='9' => {
                chars.next();
                end = idx + ch.len_utf8();
            }
            '.' if !has_dot => {
                has_dot = true;
                chars.next();
                end = idx + ch.len_utf8();
            }
            _ => break,
        }
    }

    let span = Span::new(start, end);
    let text = &input[start..end];
    let value: f64 = text.parse().map_err(|_| ParseError::InvalidNumber {
        text: text.to_string(),
        span,
    })?;
    if !value.is_finite() {
        return Err(ParseError::InvalidNumber {
            text: text.to_string(),
            span,
        });
    }
    Ok(Token::new(TokenKind::Number(value), span))
}

/// Lex a maximal ASCII-letter run, splitting it by longest vocabulary match
///
/// A suffix that matches nothing is emitted as a single `Identifier` token;
/// the parser rejects it with `UnknownIdentifier`, so misspelled names fail
/// with the full offending name in the message rather than a stray character.
fn lex_identifier_run(input: &str, chars: &mut CharIter, tokens: &mut Vec<Token>) {
    let (start, first) = chars.next().expect("caller peeked a letter");
    let mut end = start + first.len_utf8();

    while let Some(&(idx, ch)) = chars.peek() {
        if ch.is_ascii_alphabetic() {
            chars.next();
            end = idx + ch.len_utf8();
        } else {
            break;
        }
    }

    let run = input[start..end].to_ascii_lowercase();
    let mut pos = 0;
    while pos < run.len() {
        match longest_known_match(&run[pos..]) {
            Some((kind, len)) => {
                let span = Span::new(start + pos, start + pos + len);
                tokens.push(Token::new(kind, span));
                pos += len;
            }
            None => {
                // Nothing in the vocabulary starts the remainder
                let span = Span::new(start + pos, end);
                tokens.push(Token::new(TokenKind::Identifier(run[pos..].to_string()), span));
                break;
            }
        }
    }
}

/// Longest prefix of `text` naming a registered function or reserved word
fn longest_known_match(text: &str) -> Option<(TokenKind, usize)> {
    let max_len = Registry::max_name_len().max(2).min(text.len());
    for len in (1..=max_len).rev() {
        let candidate = &text[..len];
        if let Some(def) = Registry::get(candidate) {
            return Some((TokenKind::Function(def.function), len));
        }
        let kind = match candidate {
            "x" => Some(TokenKind::Variable),
            "e" => Some(TokenKind::Euler),
            "pi" => Some(TokenKind::Pi),
            _ => None,
        };
        if let Some(kind) = kind {
            return Some((kind, len));
        }
    }
    None
}
