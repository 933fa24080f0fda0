//! cextc-lex - Lexical Analyzer for the Cext Language
//!
//! This crate turns a Cext source buffer into a flat sequence of tokens. It
//! is the first stage of `cextc` and the only one with real work in it: the
//! parser stage consumes the tokens through `cextc_par::TokenCursor`.
//!
//! # Example Usage
//!
//! ```
//! use cextc_lex::{tokenize, TokenKind};
//!
//! let tokens = tokenize(b"for x = 1").unwrap();
//!
//! assert_eq!(tokens[0].kind(), TokenKind::Keyword);
//! assert_eq!(tokens[0].lexeme(), Some("for"));
//! assert_eq!(tokens.last().unwrap().kind(), TokenKind::End);
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token kinds, tokens and the fixed lookup tables
//! - [`cursor`] - Byte cursor for source traversal
//! - [`ascii`] - Byte classification helpers
//! - [`error`] - Lexical errors
//!
//! # Scanning Rules
//!
//! Each token is chosen by the byte that starts it, in this order:
//!
//! 1. Whitespace (space, tab, `\r`, `\n`) is skipped.
//! 2. A letter or `_` starts a word: identifier, keyword or builtin type.
//! 3. A digit starts a number: integer, or float with exactly one `.`.
//! 4. `'` starts a character literal, `"` a string literal.
//! 5. `//` and `/*` start comments, which are emitted as tokens.
//! 6. Anything else is looked up in the operator table, longest first.
//!
//! The scan stops at the first error. A successful scan always ends with
//! exactly one [`TokenKind::End`].

#![warn(rustdoc::missing_crate_level_docs)]

pub mod ascii;
pub mod cursor;
pub mod error;
mod scanner;
pub mod token;

mod edge_cases;

// Re-export main types for convenience
pub use cursor::{Cursor, CursorSnapshot};
pub use error::{LexError, LexResult};
pub use scanner::{tokenize, Scanner};
pub use token::{
    classify_word, match_punctuation, Token, TokenKind, BUILTIN_TYPES, KEYWORDS, PUNCTUATION,
};
