//! Byte cursor for traversing source code.
//!
//! This module provides the `Cursor` struct which maintains position state
//! while walking a source buffer one byte at a time. It tracks the absolute
//! byte offset, the line number and the column within the current line.

use cextc_util::Span;

/// A cursor for traversing source code byte by byte.
///
/// Every byte consumed advances the column by one. A `\n` increments the
/// line and resets the column to 0, so the byte offset, line and column can
/// never disagree about how much input has been consumed.
///
/// # Example
///
/// ```
/// use cextc_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new(b"for x");
///
/// assert_eq!(cursor.current(), Some(b'f'));
/// cursor.advance();
/// assert_eq!(cursor.current(), Some(b'o'));
/// assert_eq!(cursor.column(), 1);
/// ```
pub struct Cursor<'a> {
    /// The source buffer being traversed.
    source: &'a [u8],

    /// Current byte position in the source.
    position: usize,

    /// Current line number (1-based).
    line: u32,

    /// Current column number (0-based, in bytes).
    column: u32,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `source`.
    pub fn new(source: &'a [u8]) -> Self {
        Self {
            source,
            position: 0,
            line: 1,
            column: 0,
        }
    }

    /// Returns the byte at the cursor, or `None` at end of input.
    #[inline]
    pub fn current(&self) -> Option<u8> {
        self.peek(0)
    }

    /// Returns the byte `offset` positions ahead of the cursor.
    ///
    /// ```
    /// use cextc_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new(b"/*");
    /// assert_eq!(cursor.peek(1), Some(b'*'));
    /// assert_eq!(cursor.peek(2), None);
    /// ```
    #[inline]
    pub fn peek(&self, offset: usize) -> Option<u8> {
        self.source.get(self.position + offset).copied()
    }

    /// Advances the cursor by one byte.
    ///
    /// Does nothing at end of input.
    #[inline]
    pub fn advance(&mut self) {
        let Some(b) = self.current() else {
            return;
        };

        self.position += 1;
        if b == b'\n' {
            self.line += 1;
            self.column = 0;
        } else {
            self.column += 1;
        }
    }

    /// Advances the cursor by `count` bytes, stopping at end of input.
    pub fn advance_n(&mut self, count: usize) {
        for _ in 0..count {
            if self.is_at_end() {
                break;
            }
            self.advance();
        }
    }

    /// Advances while `predicate` holds for the current byte.
    pub fn eat_while(&mut self, mut predicate: impl FnMut(u8) -> bool) {
        while self.current().is_some_and(&mut predicate) {
            self.advance();
        }
    }

    /// Returns true if the cursor has consumed the whole buffer.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Consumes `expected` if it is the current byte.
    ///
    /// ```
    /// use cextc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new(b"'a");
    /// assert!(cursor.match_byte(b'\''));
    /// assert!(!cursor.match_byte(b'\''));
    /// assert_eq!(cursor.current(), Some(b'a'));
    /// ```
    pub fn match_byte(&mut self, expected: u8) -> bool {
        if self.current() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Returns true if the unconsumed input starts with `prefix`.
    #[inline]
    pub fn starts_with(&self, prefix: &[u8]) -> bool {
        self.remaining().starts_with(prefix)
    }

    /// Returns the current line number (1-based).
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Returns the current column number (0-based).
    #[inline]
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Returns the current byte position in the source.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the source bytes from `start` up to the cursor.
    ///
    /// ```
    /// use cextc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new(b"int32 x");
    /// cursor.advance_n(5);
    /// assert_eq!(cursor.slice_from(0), b"int32");
    /// ```
    #[inline]
    pub fn slice_from(&self, start: usize) -> &'a [u8] {
        &self.source[start..self.position]
    }

    /// Returns the unconsumed part of the source.
    #[inline]
    pub fn remaining(&self) -> &'a [u8] {
        &self.source[self.position..]
    }

    /// Returns the full source buffer.
    #[inline]
    pub fn source(&self) -> &'a [u8] {
        self.source
    }

    /// Creates a snapshot of the current cursor state.
    pub fn snapshot(&self) -> CursorSnapshot {
        CursorSnapshot {
            position: self.position,
            line: self.line,
            column: self.column,
        }
    }

    /// Span from a snapshot up to the current position.
    ///
    /// The span starts at the snapshot's line and column.
    pub fn span_from(&self, start: CursorSnapshot) -> Span {
        Span::new(start.position, self.position, start.line, start.column)
    }
}

/// A saved cursor position, used to mark where a token starts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CursorSnapshot {
    /// Byte position in source.
    pub position: usize,
    /// Line number (1-based).
    pub line: u32,
    /// Column number (0-based).
    pub column: u32,
}
