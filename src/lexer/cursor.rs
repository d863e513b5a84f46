//! Character navigation and position tracking for the lexer.

use super::Lexer;

impl<'a> Lexer<'a> {
    /// Returns the byte at the current position, or `None` past the end.
    pub(super) fn current_byte(&self) -> Option<u8> {
        self.input.as_bytes().get(self.pos).copied()
    }

    /// Advances one byte, updating line/column tracking.
    ///
    /// The language's literals (identifiers, integers, string bodies, and
    /// punctuation) are ASCII, so byte-indexing never splits a UTF-8
    /// character boundary along any path the lexer actually advances
    /// through.
    pub(super) fn advance(&mut self) {
        if self.current_byte() == Some(b'\n') {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        self.pos += 1;
    }

    pub(super) fn is_eof(&self) -> bool {
        self.pos >= self.input.len()
    }

    pub(super) fn skip_whitespace(&mut self) {
        while let Some(b) = self.current_byte() {
            if b == b' ' || b == b'\t' || b == b'\n' || b == b'\r' {
                self.advance();
            } else {
                break;
            }
        }
    }
}

fn is_letter(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_'
}

pub(super) fn is_ident_start(b: u8) -> bool {
    is_letter(b)
}

pub(super) fn is_ident_continue(b: u8) -> bool {
    is_letter(b) || b.is_ascii_digit()
}
