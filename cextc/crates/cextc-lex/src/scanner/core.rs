//! Core scanner implementation.
//!
//! This module contains the Scanner struct, the scan loop and the dispatch
//! on the byte that starts each token.

use cextc_util::Span;
use tracing::{debug, trace};

use crate::ascii::{is_ident_start, is_whitespace};
use crate::cursor::{Cursor, CursorSnapshot};
use crate::error::{LexError, LexResult};
use crate::token::{Token, TokenKind};

/// Scanner for cext source code.
///
/// The scanner turns a source buffer into a complete token sequence in one
/// call to [`Scanner::scan`], which consumes it. Whitespace is skipped;
/// everything else, comments included, becomes a token. The last token is
/// always [`TokenKind::End`].
///
/// # Example
///
/// ```
/// use cextc_lex::{Scanner, TokenKind};
///
/// let tokens = Scanner::new(b"x += 1").scan().unwrap();
/// let kinds: Vec<_> = tokens.iter().map(|t| t.kind()).collect();
/// assert_eq!(
///     kinds,
///     [TokenKind::Identifier, TokenKind::AssignAdd, TokenKind::IntegerLiteral, TokenKind::End]
/// );
/// ```
pub struct Scanner<'a> {
    /// Byte cursor for source traversal.
    pub(crate) cursor: Cursor<'a>,

    /// Cursor state where the current token started.
    pub(crate) token_start: CursorSnapshot,
}

impl<'a> Scanner<'a> {
    /// Creates a new scanner for the given source buffer.
    pub fn new(source: &'a [u8]) -> Self {
        let cursor = Cursor::new(source);
        let token_start = cursor.snapshot();
        Self {
            cursor,
            token_start,
        }
    }

    /// Scans the whole source buffer.
    ///
    /// # Errors
    ///
    /// Returns the first [`LexError`] encountered. No tokens are returned
    /// for a source that fails to scan.
    pub fn scan(mut self) -> LexResult<Vec<Token>> {
        debug!(bytes = self.cursor.source().len(), "scanning source");
        let mut tokens = Vec::new();

        while let Some(byte) = self.cursor.current() {
            self.token_start = self.cursor.snapshot();
            match self.next_token(byte) {
                Ok(Some(token)) => {
                    trace!(%token, "token");
                    tokens.push(token);
                },
                Ok(None) => {},
                Err(err) => {
                    debug!(%err, "scan failed");
                    return Err(err);
                },
            }
        }

        let end = Span::point(
            self.cursor.position(),
            self.cursor.line(),
            self.cursor.column(),
        );
        tokens.push(Token::new(TokenKind::End, end, None));

        debug!(count = tokens.len(), "scan finished");
        Ok(tokens)
    }

    /// Dispatches on the byte at the cursor.
    ///
    /// Returns `Ok(None)` when only whitespace was consumed.
    fn next_token(&mut self, byte: u8) -> LexResult<Option<Token>> {
        let token = match byte {
            b if is_whitespace(b) => {
                self.cursor.eat_while(is_whitespace);
                return Ok(None);
            },
            b if is_ident_start(b) => self.scan_word(),
            b if b.is_ascii_digit() => self.scan_number()?,
            b'\'' => self.scan_char()?,
            b'"' => self.scan_string()?,
            b'/' if self.cursor.peek(1) == Some(b'/') => self.scan_line_comment(),
            b'/' if self.cursor.peek(1) == Some(b'*') => self.scan_block_comment()?,
            b => match self.scan_punctuation() {
                Some(token) => token,
                None => {
                    return Err(LexError::UndefinedToken {
                        found: b,
                        line: self.cursor.line(),
                        column: self.cursor.column(),
                    })
                },
            },
        };
        Ok(Some(token))
    }

    /// Builds a token spanning from the token start to the cursor.
    pub(crate) fn make_token(&self, kind: TokenKind, lexeme: Option<Vec<u8>>) -> Token {
        Token::new(kind, self.cursor.span_from(self.token_start), lexeme)
    }

    /// Source bytes from `start` up to the cursor, as an owned lexeme.
    pub(crate) fn text(&self, start: usize) -> Vec<u8> {
        self.cursor.slice_from(start).to_vec()
    }

    /// Line and column where the current token started.
    pub(crate) fn start_position(&self) -> (u32, u32) {
        (self.token_start.line, self.token_start.column)
    }
}

/// Scans `source` into tokens.
///
/// Shorthand for `Scanner::new(source).scan()`.
pub fn tokenize(source: &[u8]) -> LexResult<Vec<Token>> {
    Scanner::new(source).scan()
}
