//! Span module - Source location tracking.
//!
//! This module provides the [`Span`] type used to describe where a token
//! lives in its source buffer: a half-open byte range plus the line and
//! column at which the range starts.
//!
//! # Examples
//!
//! ```
//! use cextc_util::span::Span;
//!
//! // `for` at the very beginning of a file
//! let span = Span::new(0, 3, 1, 0);
//! assert_eq!(span.len(), 3);
//! ```

use std::fmt;

/// Source location span
///
/// A `Span` represents a range in source code, identified by:
/// - Byte offsets (start inclusive, end exclusive)
/// - Line and column numbers of the start position (for human-readable output)
///
/// Lines are 1-based. Columns are 0-based byte offsets from the start of
/// the line, so the first character of every line sits at column 0.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Span {
    /// Start byte offset in source
    pub start: usize,
    /// End byte offset in source
    pub end: usize,
    /// Line number (1-based)
    pub line: u32,
    /// Column number (0-based)
    pub column: u32,
}

impl Span {
    /// Create a new span
    ///
    /// # Arguments
    ///
    /// * `start` - Start byte offset
    /// * `end` - End byte offset
    /// * `line` - Line number (1-based)
    /// * `column` - Column number (0-based)
    #[inline]
    pub fn new(start: usize, end: usize, line: u32, column: u32) -> Self {
        Self {
            start,
            end,
            line,
            column,
        }
    }

    /// Create an empty span at a byte offset.
    ///
    /// Used for the end-of-input marker, which covers no source text.
    ///
    /// ```
    /// use cextc_util::span::Span;
    ///
    /// let span = Span::point(12, 3, 4);
    /// assert!(span.is_empty());
    /// assert_eq!(span.start, 12);
    /// ```
    #[inline]
    pub fn point(offset: usize, line: u32, column: u32) -> Self {
        Self {
            start: offset,
            end: offset,
            line,
            column,
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Number of bytes covered by the span.
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
