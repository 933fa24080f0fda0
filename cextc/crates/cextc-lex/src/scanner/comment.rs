//! Comment scanning.
//!
//! Comments are tokens here, not trivia: both forms are emitted with their
//! inner text as the lexeme.

use super::Scanner;
use crate::error::{LexError, LexResult};
use crate::token::{Token, TokenKind};

impl<'a> Scanner<'a> {
    /// Scans a `//` comment up to, but not including, the end of the line.
    pub(crate) fn scan_line_comment(&mut self) -> Token {
        self.cursor.advance_n(2);
        let content_start = self.cursor.position();
        self.cursor.eat_while(|b| b != b'\n');

        let text = self.text(content_start);
        self.make_token(TokenKind::Comment, Some(text))
    }

    /// Scans a `/* */` comment through the first `*/`.
    ///
    /// Block comments do not nest.
    ///
    /// # Errors
    ///
    /// [`LexError::UnclosedComment`] at the opening `/*` when input ends
    /// before `*/`.
    pub(crate) fn scan_block_comment(&mut self) -> LexResult<Token> {
        self.cursor.advance_n(2);
        let content_start = self.cursor.position();

        while !self.cursor.starts_with(b"*/") {
            if self.cursor.is_at_end() {
                let (line, column) = self.start_position();
                return Err(LexError::UnclosedComment { line, column });
            }
            self.cursor.advance();
        }

        let text = self.text(content_start);
        self.cursor.advance_n(2);
        Ok(self.make_token(TokenKind::MultilineComment, Some(text)))
    }
}
