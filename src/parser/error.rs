//! Diagnostic message formatting for the parser.
//!
//! The parser does not abort on error: every failed
//! expectation appends a plain diagnostic string to a growable list and
//! parsing continues by letting the statement loop advance. This module
//! centralizes that message formatting so it reads consistently regardless
//! of which parse function triggered it.

use crate::token::TokenKind;

/// Message for a failed `expect_peek`: the next token wasn't the one a
/// production required.
pub fn expected_next(expected: &str, actual: &TokenKind) -> String {
    format!("expected next token to be {expected}, got {} instead", actual.describe())
}

/// Message for a token kind with no registered prefix parser.
pub fn no_prefix_parser(actual: &TokenKind) -> String {
    format!("no prefix parse function for {} found", actual.describe())
}

/// Message for an integer literal lexeme that doesn't fit in `i64`.
pub fn bad_integer_literal(lexeme: &str) -> String {
    format!("could not parse {lexeme:?} as integer")
}
