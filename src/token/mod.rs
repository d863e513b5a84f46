//! Token definitions for the Quill lexer.
//!
//! This module provides [`Span`] for source location tracking, [`TokenKind`]
//! for the fixed token enumeration, and [`Token`] which pairs the two.
//!
//! # See Also
//!
//! * [`crate::lexer`] - produces the token stream
//! * [`crate::parser`] - consumes the token stream

mod kind;
mod span;

pub use kind::TokenKind;
pub use span::Span;

/// A single lexical token together with its source location.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// The kind of token, including its literal payload where relevant.
    pub kind: TokenKind,
    /// Where this token appears in the source.
    pub span: Span,
}

impl Token {
    /// Creates a new token.
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Token { kind, span }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_new_holds_kind_and_span() {
        let span = Span::new(0, 3, 1, 1);
        let tok = Token::new(TokenKind::Let, span);
        assert_eq!(tok.kind, TokenKind::Let);
        assert_eq!(tok.span.start, 0);
    }
}
