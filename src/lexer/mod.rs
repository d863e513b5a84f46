//! Lexical analyzer for the Quill scripting language.
//!
//! This module provides [`Lexer`], a stateful cursor over a source string
//! exposing a single core operation, [`Lexer::next_token`], which returns
//! the next [`Token`] and is sticky at end-of-input.
//!
//! # Recognized tokens
//!
//! - Identifiers and the keywords `let`, `fn`, `if`, `else`, `return`,
//!   `true`, `false`
//! - Decimal integer literals
//! - Double-quoted string literals (no escape processing beyond the
//!   terminating quote)
//! - Operators `= + - ! * / < > == !=` and delimiters `( ) { } [ ] , ;`
//! - Anything else becomes [`TokenKind::Illegal`] carrying the offending
//!   character
//!
//! # Module Structure
//!
//! - [`cursor`] - byte-level navigation and whitespace skipping
//! - `tests` - unit tests (test-only)

mod cursor;


use crate::token::{Span, Token, TokenKind};
use cursor::{is_ident_continue, is_ident_start};

/// A lexical analyzer over a single source string.
///
/// `Lexer` is a one-shot stateful cursor: construct it with [`Lexer::new`]
/// and repeatedly call [`Lexer::next_token`] until it returns
/// [`TokenKind::Eof`], which it will then keep returning forever.
pub struct Lexer<'a> {
    input: &'a str,
    pos: usize,
    line: usize,
    column: usize,
}

impl<'a> Lexer<'a> {
    /// Creates a lexer over `input`, positioned at its start.
    pub fn new(input: &'a str) -> Self {
        Lexer {
            input,
            pos: 0,
            line: 1,
            column: 1,
        }
    }

    /// Returns the next token, skipping ASCII whitespace first.
    ///
    /// Returns [`TokenKind::Eof`] forever once the input is exhausted.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        if self.is_eof() {
            return Token::new(TokenKind::Eof, self.point_span());
        }

        let start = self.pos;
        let (line, column) = (self.line, self.column);
        let byte = self.current_byte().expect("checked not eof");

        let kind = match byte {
            b'=' => self.two_char_or(b'=', TokenKind::Eq, TokenKind::Assign),
            b'!' => self.two_char_or(b'=', TokenKind::NotEq, TokenKind::Bang),
            b'+' => self.single(TokenKind::Plus),
            b'-' => self.single(TokenKind::Minus),
            b'*' => self.single(TokenKind::Asterisk),
            b'/' => self.single(TokenKind::Slash),
            b'<' => self.single(TokenKind::Lt),
            b'>' => self.single(TokenKind::Gt),
            b',' => self.single(TokenKind::Comma),
            b';' => self.single(TokenKind::Semicolon),
            b'(' => self.single(TokenKind::LParen),
            b')' => self.single(TokenKind::RParen),
            b'{' => self.single(TokenKind::LBrace),
            b'}' => self.single(TokenKind::RBrace),
            b'[' => self.single(TokenKind::LBracket),
            b']' => self.single(TokenKind::RBracket),
            b'"' => self.read_string(),
            b if is_ident_start(b) => self.read_identifier(),
            b if b.is_ascii_digit() => self.read_integer(),
            other => {
                self.advance();
                TokenKind::Illegal((other as char).to_string())
            }
        };

        let span = Span::new(start, self.pos, line, column);
        Token::new(kind, span)
    }

    fn point_span(&self) -> Span {
        Span::new(self.pos, self.pos, self.line, self.column)
    }

    fn single(&mut self, kind: TokenKind) -> TokenKind {
        self.advance();
        kind
    }

    /// Consumes the current byte; if `next` follows, consumes it too and
    /// returns `two`, otherwise returns `one`.
    fn two_char_or(&mut self, next: u8, two: TokenKind, one: TokenKind) -> TokenKind {
        self.advance();
        if self.current_byte() == Some(next) {
            self.advance();
            two
        } else {
            one
        }
    }

    fn read_identifier(&mut self) -> TokenKind {
        let start = self.pos;
        while let Some(b) = self.current_byte() {
            if is_ident_continue(b) {
                self.advance();
            } else {
                break;
            }
        }
        let lexeme = &self.input[start..self.pos];
        TokenKind::keyword(lexeme).unwrap_or_else(|| TokenKind::Identifier(lexeme.to_string()))
    }

    fn read_integer(&mut self) -> TokenKind {
        let start = self.pos;
        while let Some(b) = self.current_byte() {
            if b.is_ascii_digit() {
                self.advance();
            } else {
                break;
            }
        }
        TokenKind::Int(self.input[start..self.pos].to_string())
    }

    /// Reads a double-quoted string literal.
    ///
    /// No escape processing is performed: the closing quote is the first
    /// unescaped `"` encountered. An unterminated string runs to
    /// end-of-input and is returned as-is; this lexer has no error channel
    /// of its own (the grammar has no way to express "unterminated string"
    /// except by producing a literal whose content runs past where the
    /// author intended, which the parser and evaluator are agnostic to).
    fn read_string(&mut self) -> TokenKind {
        self.advance(); // opening quote
        let start = self.pos;
        while let Some(b) = self.current_byte() {
            if b == b'"' {
                break;
            }
            self.advance();
        }
        let content = self.input[start..self.pos].to_string();
        if self.current_byte() == Some(b'"') {
            self.advance();
        }
        TokenKind::StringLiteral(content)
    }
}
