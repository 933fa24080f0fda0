//! Lexical error types.
//!
//! Every error is fatal to the scan that produced it and records the line and
//! column it refers to. Unclosed literals and comments point at their opening
//! delimiter; the other variants point at the offending byte.

use thiserror::Error;

/// Error produced by [`Scanner::scan`](crate::Scanner::scan).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    #[error("unclosed character literal at line {line}, column {column}")]
    UnclosedCharacterLiteral { line: u32, column: u32 },

    #[error("empty character literal at line {line}, column {column}")]
    EmptyCharacterLiteral { line: u32, column: u32 },

    #[error("unclosed string literal at line {line}, column {column}")]
    UnclosedStringLiteral { line: u32, column: u32 },

    #[error("unclosed multi-line comment at line {line}, column {column}")]
    UnclosedComment { line: u32, column: u32 },

    #[error("unsupported escape sequence '\\{}' at line {line}, column {column}", .escape.escape_ascii())]
    UnsupportedEscape { escape: u8, line: u32, column: u32 },

    #[error("malformed decimal number at line {line}, column {column}")]
    MalformedNumber { line: u32, column: u32 },

    #[error("undefined token '{}' at line {line}, column {column}", .found.escape_ascii())]
    UndefinedToken { found: u8, line: u32, column: u32 },
}

impl LexError {
    /// Line (1-based) the error refers to.
    pub fn line(&self) -> u32 {
        self.position().0
    }

    /// Column (0-based) the error refers to.
    pub fn column(&self) -> u32 {
        self.position().1
    }

    fn position(&self) -> (u32, u32) {
        match *self {
            LexError::UnclosedCharacterLiteral { line, column }
            | LexError::EmptyCharacterLiteral { line, column }
            | LexError::UnclosedStringLiteral { line, column }
            | LexError::UnclosedComment { line, column }
            | LexError::UnsupportedEscape { line, column, .. }
            | LexError::MalformedNumber { line, column }
            | LexError::UndefinedToken { line, column, .. } => (line, column),
        }
    }
}

/// Result type alias for scanning
pub type LexResult<T> = std::result::Result<T, LexError>;
