//! Statement and block parsing.

use super::expr::Precedence;
use super::Parser;
use crate::ast::{Block, Stmt};
use crate::token::TokenKind;

impl<'a> Parser<'a> {
    /// Dispatches on the current token to parse one top-level or
    /// block-level statement.
    ///
    /// Returns `None` when the statement failed its expectations; the
    /// caller's statement loop has already recorded a diagnostic and moves
    /// on without this statement.
    pub(super) fn parse_statement(&mut self) -> Option<Stmt> {
        match self.cur_token.kind {
            TokenKind::Let => self.parse_let_statement(),
            TokenKind::Return => self.parse_return_statement(),
            _ => self.parse_expression_statement(),
        }
    }

    fn parse_let_statement(&mut self) -> Option<Stmt> {
        let name = match &self.peek_token.kind {
            TokenKind::Identifier(name) => name.clone(),
            _ => {
                let message = super::error::expected_next("an identifier", &self.peek_token.kind);
                self.errors.push(message);
                return None;
            }
        };
        self.next_token(); // onto the identifier

        if !self.expect_peek(TokenKind::Assign, "`=`") {
            return None;
        }
        self.next_token(); // onto the first token of the expression

        let value = self.parse_expression(Precedence::Lowest)?;
        self.skip_optional_semicolon();

        Some(Stmt::Let { name, value })
    }

    fn parse_return_statement(&mut self) -> Option<Stmt> {
        self.next_token(); // onto the first token of the expression
        let value = self.parse_expression(Precedence::Lowest)?;
        self.skip_optional_semicolon();
        Some(Stmt::Return { value })
    }

    fn parse_expression_statement(&mut self) -> Option<Stmt> {
        let expr = self.parse_expression(Precedence::Lowest)?;
        self.skip_optional_semicolon();
        Some(Stmt::Expression(expr))
    }

    /// Parses statements until a matching `}` or end-of-input.
    pub(super) fn parse_block_statement(&mut self) -> Block {
        let mut statements = Vec::new();
        self.next_token(); // past the opening `{`

        while !self.cur_is(&TokenKind::RBrace) && !self.cur_is(&TokenKind::Eof) {
            if let Some(stmt) = self.parse_statement() {
                statements.push(stmt);
            }
            self.next_token();
        }

        Block::new(statements)
    }
}
