//! Pratt (precedence-climbing) expression parsing.

use super::Parser;
use crate::ast::{Expr, InfixOp, PrefixOp};
use crate::token::TokenKind;

/// Precedence levels, lowest to highest.
///
/// All binary operators are left-associative: the recursive call in
/// [`Parser::parse_infix`] uses *the operator's own* precedence, not one
/// less, so `a - b - c` parses as `(a - b) - c`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Eq, Ord)]
pub(crate) enum Precedence {
    Lowest,
    Equals,
    LessGreater,
    Sum,
    Product,
    Prefix,
    Call,
    Index,
}

fn precedence_of(kind: &TokenKind) -> Precedence {
    match kind {
        TokenKind::Eq | TokenKind::NotEq => Precedence::Equals,
        TokenKind::Lt | TokenKind::Gt => Precedence::LessGreater,
        TokenKind::Plus | TokenKind::Minus => Precedence::Sum,
        TokenKind::Asterisk | TokenKind::Slash => Precedence::Product,
        TokenKind::LParen => Precedence::Call,
        TokenKind::LBracket => Precedence::Index,
        _ => Precedence::Lowest,
    }
}

impl<'a> Parser<'a> {
    /// Parses an expression, folding in infix operators whose precedence
    /// exceeds `min_precedence`.
    pub(super) fn parse_expression(&mut self, min_precedence: Precedence) -> Option<Expr> {
        let mut left = self.parse_prefix()?;

        while !self.peek_is(&TokenKind::Semicolon) && min_precedence < precedence_of(&self.peek_token.kind) {
            left = match self.peek_token.kind {
                TokenKind::Plus
                | TokenKind::Minus
                | TokenKind::Asterisk
                | TokenKind::Slash
                | TokenKind::Eq
                | TokenKind::NotEq
                | TokenKind::Lt
                | TokenKind::Gt => {
                    self.next_token();
                    self.parse_infix(left)?
                }
                TokenKind::LParen => {
                    self.next_token();
                    self.parse_call_expression(left)?
                }
                TokenKind::LBracket => {
                    self.next_token();
                    self.parse_index_expression(left)?
                }
                _ => return Some(left),
            };
        }

        Some(left)
    }

    fn parse_prefix(&mut self) -> Option<Expr> {
        match &self.cur_token.kind {
            TokenKind::Identifier(name) => Some(Expr::Identifier(name.clone())),
            TokenKind::Int(lexeme) => self.parse_int_literal(lexeme.clone()),
            TokenKind::True => Some(Expr::BoolLiteral(true)),
            TokenKind::False => Some(Expr::BoolLiteral(false)),
            TokenKind::StringLiteral(value) => Some(Expr::StringLiteral(value.clone())),
            TokenKind::Bang => self.parse_prefix_expression(PrefixOp::Bang),
            TokenKind::Minus => self.parse_prefix_expression(PrefixOp::Minus),
            TokenKind::LParen => self.parse_grouped_expression(),
            TokenKind::If => self.parse_if_expression(),
            TokenKind::Function => self.parse_function_literal(),
            TokenKind::LBracket => self.parse_array_literal(),
            other => {
                let message = super::error::no_prefix_parser(other);
                self.errors.push(message);
                None
            }
        }
    }

    fn parse_int_literal(&mut self, lexeme: String) -> Option<Expr> {
        match lexeme.parse::<i64>() {
            Ok(value) => Some(Expr::IntLiteral(value)),
            Err(_) => {
                self.errors.push(super::error::bad_integer_literal(&lexeme));
                None
            }
        }
    }

    fn parse_prefix_expression(&mut self, op: PrefixOp) -> Option<Expr> {
        self.next_token();
        let right = self.parse_expression(Precedence::Prefix)?;
        Some(Expr::Prefix {
            op,
            right: Box::new(right),
        })
    }

    fn parse_infix(&mut self, left: Expr) -> Option<Expr> {
        let op = match self.cur_token.kind {
            TokenKind::Plus => InfixOp::Plus,
            TokenKind::Minus => InfixOp::Minus,
            TokenKind::Asterisk => InfixOp::Asterisk,
            TokenKind::Slash => InfixOp::Slash,
            TokenKind::Eq => InfixOp::Eq,
            TokenKind::NotEq => InfixOp::NotEq,
            TokenKind::Lt => InfixOp::Lt,
            TokenKind::Gt => InfixOp::Gt,
            _ => unreachable!("parse_infix only called for infix operator tokens"),
        };
        let precedence = precedence_of(&self.cur_token.kind);
        self.next_token();
        let right = self.parse_expression(precedence)?;
        Some(Expr::Infix {
            left: Box::new(left),
            op,
            right: Box::new(right),
        })
    }

    fn parse_grouped_expression(&mut self) -> Option<Expr> {
        self.next_token(); // past `(`
        let expr = self.parse_expression(Precedence::Lowest)?;
        if !self.expect_peek(TokenKind::RParen, "`)`") {
            return None;
        }
        Some(expr)
    }

    fn parse_if_expression(&mut self) -> Option<Expr> {
        if !self.expect_peek(TokenKind::LParen, "`(`") {
            return None;
        }
        self.next_token(); // past `(`
        let condition = self.parse_expression(Precedence::Lowest)?;

        if !self.expect_peek(TokenKind::RParen, "`)`") {
            return None;
        }
        if !self.expect_peek(TokenKind::LBrace, "`{`") {
            return None;
        }
        let consequence = self.parse_block_statement();

        let alternative = if self.peek_is(&TokenKind::Else) {
            self.next_token();
            if !self.expect_peek(TokenKind::LBrace, "`{`") {
                return None;
            }
            Some(self.parse_block_statement())
        } else {
            None
        };

        Some(Expr::If {
            condition: Box::new(condition),
            consequence,
            alternative,
        })
    }

    fn parse_function_literal(&mut self) -> Option<Expr> {
        if !self.expect_peek(TokenKind::LParen, "`(`") {
            return None;
        }
        let parameters = self.parse_function_parameters()?;

        if !self.expect_peek(TokenKind::LBrace, "`{`") {
            return None;
        }
        let body = self.parse_block_statement();

        Some(Expr::FunctionLiteral { parameters, body })
    }

    fn parse_function_parameters(&mut self) -> Option<Vec<String>> {
        let mut parameters = Vec::new();

        if self.peek_is(&TokenKind::RParen) {
            self.next_token();
            return Some(parameters);
        }

        self.next_token();
        match &self.cur_token.kind {
            TokenKind::Identifier(name) => parameters.push(name.clone()),
            other => {
                let message = super::error::expected_next("an identifier", other);
                self.errors.push(message);
                return None;
            }
        }

        while self.peek_is(&TokenKind::Comma) {
            self.next_token();
            self.next_token();
            match &self.cur_token.kind {
                TokenKind::Identifier(name) => parameters.push(name.clone()),
                other => {
                    let message = super::error::expected_next("an identifier", other);
                    self.errors.push(message);
                    return None;
                }
            }
        }

        if !self.expect_peek(TokenKind::RParen, "`)`") {
            return None;
        }

        Some(parameters)
    }

    fn parse_call_expression(&mut self, function: Expr) -> Option<Expr> {
        let arguments = self.parse_expression_list(TokenKind::RParen)?;
        Some(Expr::Call {
            function: Box::new(function),
            arguments,
        })
    }

    fn parse_array_literal(&mut self) -> Option<Expr> {
        let elements = self.parse_expression_list(TokenKind::RBracket)?;
        Some(Expr::ArrayLiteral { elements })
    }

    fn parse_index_expression(&mut self, left: Expr) -> Option<Expr> {
        self.next_token(); // past `[`
        let index = self.parse_expression(Precedence::Lowest)?;
        if !self.expect_peek(TokenKind::RBracket, "`]`") {
            return None;
        }
        Some(Expr::Index {
            left: Box::new(left),
            index: Box::new(index),
        })
    }

    /// Parses a comma-separated expression list closed by `end`, used by
    /// both call arguments and array literals.
    fn parse_expression_list(&mut self, end: TokenKind) -> Option<Vec<Expr>> {
        let mut list = Vec::new();

        if self.peek_is(&end) {
            self.next_token();
            return Some(list);
        }

        self.next_token();
        list.push(self.parse_expression(Precedence::Lowest)?);

        while self.peek_is(&TokenKind::Comma) {
            self.next_token();
            self.next_token();
            list.push(self.parse_expression(Precedence::Lowest)?);
        }

        let description = match &end {
            TokenKind::RParen => "`)`",
            TokenKind::RBracket => "`]`",
            _ => "the closing delimiter",
        };
        if !self.expect_peek(end, description) {
            return None;
        }

        Some(list)
    }
}
