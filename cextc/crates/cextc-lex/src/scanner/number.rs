//! Number literal scanning.
//!
//! Numbers are decimal only: a run of digits with at most one `.` in it.

use super::Scanner;
use crate::error::{LexError, LexResult};
use crate::token::{Token, TokenKind};

impl<'a> Scanner<'a> {
    /// Scans an integer or float literal.
    ///
    /// Consumes a maximal run of digits and `.` bytes. A run without a dot is
    /// an [`TokenKind::IntegerLiteral`], a run with one dot a
    /// [`TokenKind::FloatLiteral`]. The lexeme is the exact source text,
    /// so `1.` and `007` are kept as written.
    ///
    /// # Errors
    ///
    /// [`LexError::MalformedNumber`] at the second `.` of the run.
    pub(crate) fn scan_number(&mut self) -> LexResult<Token> {
        let start = self.token_start.position;
        let mut seen_dot = false;

        while let Some(byte) = self.cursor.current() {
            match byte {
                b'0'..=b'9' => {},
                b'.' if seen_dot => {
                    return Err(LexError::MalformedNumber {
                        line: self.cursor.line(),
                        column: self.cursor.column(),
                    });
                },
                b'.' => seen_dot = true,
                _ => break,
            }
            self.cursor.advance();
        }

        let kind = if seen_dot {
            TokenKind::FloatLiteral
        } else {
            TokenKind::IntegerLiteral
        };
        let text = self.text(start);
        Ok(self.make_token(kind, Some(text)))
    }
}
