//! String and character literal scanning.
//!
//! Character literals decode the standard escapes and recognize the raw
//! `\U` form. String literals are kept as written.

use super::Scanner;
use crate::error::{LexError, LexResult};
use crate::token::{Token, TokenKind};

/// Escape letters accepted in character literals and what they decode to.
static ESCAPES: &[(u8, u8)] = &[
    (b'n', b'\n'),
    (b't', b'\t'),
    (b'r', b'\r'),
    (b'b', 0x08),
    (b'\\', b'\\'),
    (b'\'', b'\''),
];

fn decode_escape(letter: u8) -> Option<u8> {
    ESCAPES
        .iter()
        .find(|(candidate, _)| *candidate == letter)
        .map(|&(_, decoded)| decoded)
}

impl<'a> Scanner<'a> {
    /// Scans a character literal.
    ///
    /// Three forms are accepted:
    ///
    /// - `'a'`: one plain byte, kept as the lexeme. Characters are single
    ///   bytes, so a multi-byte UTF-8 sequence leaves the literal unclosed.
    /// - `'\n'`: a standard escape, decoded into the lexeme.
    /// - `'\U1F600'`: everything up to the next `'` is kept raw, starting at
    ///   the backslash, and the token is a [`TokenKind::UnicodeLiteral`].
    ///
    /// The closing quote is consumed in every form.
    ///
    /// # Errors
    ///
    /// - [`LexError::EmptyCharacterLiteral`] for `''`.
    /// - [`LexError::UnsupportedEscape`] for an escape letter not in the table.
    /// - [`LexError::UnclosedCharacterLiteral`] when input ends first or a
    ///   second character follows the first.
    pub(crate) fn scan_char(&mut self) -> LexResult<Token> {
        self.cursor.advance();

        match self.cursor.current() {
            None => Err(self.unclosed_char()),
            Some(b'\'') => {
                let (line, column) = self.start_position();
                Err(LexError::EmptyCharacterLiteral { line, column })
            },
            Some(b'\\') => self.scan_char_escape(),
            Some(_) => {
                let start = self.cursor.position();
                self.cursor.advance();
                let text = self.text(start);
                self.expect_char_close()?;
                Ok(self.make_token(TokenKind::CharacterLiteral, Some(text)))
            },
        }
    }

    /// Scans the escape part of a character literal, cursor on the backslash.
    fn scan_char_escape(&mut self) -> LexResult<Token> {
        let backslash = self.cursor.snapshot();
        self.cursor.advance();

        match self.cursor.current() {
            None => Err(self.unclosed_char()),
            Some(b'U') => {
                self.cursor.eat_while(|b| b != b'\'');
                let text = self.text(backslash.position);
                self.expect_char_close()?;
                Ok(self.make_token(TokenKind::UnicodeLiteral, Some(text)))
            },
            Some(letter) => match decode_escape(letter) {
                Some(decoded) => {
                    self.cursor.advance();
                    self.expect_char_close()?;
                    Ok(self.make_token(TokenKind::CharacterLiteral, Some(vec![decoded])))
                },
                None => Err(LexError::UnsupportedEscape {
                    escape: letter,
                    line: backslash.line,
                    column: backslash.column,
                }),
            },
        }
    }

    fn expect_char_close(&mut self) -> LexResult<()> {
        if self.cursor.match_byte(b'\'') {
            Ok(())
        } else {
            Err(self.unclosed_char())
        }
    }

    fn unclosed_char(&self) -> LexError {
        let (line, column) = self.start_position();
        LexError::UnclosedCharacterLiteral { line, column }
    }

    /// Scans a string literal.
    ///
    /// The lexeme is the raw text between the quotes. A backslash makes the
    /// byte after it part of the content, so `\"` does not end the literal,
    /// but nothing is decoded. Newlines are allowed inside.
    ///
    /// # Errors
    ///
    /// [`LexError::UnclosedStringLiteral`] at the opening quote when input
    /// ends before the closing one.
    pub(crate) fn scan_string(&mut self) -> LexResult<Token> {
        self.cursor.advance();
        let content_start = self.cursor.position();

        loop {
            match self.cursor.current() {
                None => {
                    let (line, column) = self.start_position();
                    return Err(LexError::UnclosedStringLiteral { line, column });
                },
                Some(b'"') => break,
                Some(b'\\') => self.cursor.advance_n(2),
                Some(_) => self.cursor.advance(),
            }
        }

        let text = self.text(content_start);
        self.cursor.advance();
        Ok(self.make_token(TokenKind::StringLiteral, Some(text)))
    }
}
