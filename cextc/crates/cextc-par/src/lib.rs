//! cextc-par - Token Stream Access for the Cext Parser
//!
//! There is no grammar yet. This crate holds the one piece the parsing stage
//! needs before it can have one: [`TokenCursor`], a forward-only walk over
//! the tokens produced by `cextc_lex`.
//!
//! # Example Usage
//!
//! ```
//! use cextc_lex::{tokenize, TokenKind};
//! use cextc_par::TokenCursor;
//!
//! let tokens = tokenize(b"return x;").unwrap();
//! let mut cursor = TokenCursor::new(&tokens);
//!
//! assert!(cursor.match_kind(TokenKind::Keyword));
//! assert_eq!(cursor.peek().map(|t| t.kind()), Some(TokenKind::Identifier));
//!
//! cursor.advance();
//! assert_eq!(cursor.current().lexeme(), Some("x"));
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod edge_cases;

use cextc_lex::{Token, TokenKind};
use tracing::trace;

/// Read-only cursor over a scanned token sequence.
///
/// The cursor never looks back and never moves past the last token. A
/// sequence from the scanner always ends in [`TokenKind::End`], so the cursor
/// comes to rest on it.
#[derive(Debug, Clone)]
pub struct TokenCursor<'a> {
    /// Tokens being walked
    tokens: &'a [Token],

    /// Index of the current token
    position: usize,
}

impl<'a> TokenCursor<'a> {
    /// Creates a cursor positioned on the first token.
    pub fn new(tokens: &'a [Token]) -> Self {
        Self {
            tokens,
            position: 0,
        }
    }

    /// Token at the cursor.
    ///
    /// # Panics
    ///
    /// Panics if the sequence is empty. [`cextc_lex::tokenize`] never returns
    /// an empty sequence.
    pub fn current(&self) -> &'a Token {
        &self.tokens[self.position]
    }

    /// Token one past the cursor, or `None` when the cursor is on the last one.
    pub fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.position + 1)
    }

    /// Returns the current token and moves forward by one.
    ///
    /// Returns `None`, leaving the cursor where it is, when it already sits
    /// on the last token.
    pub fn advance(&mut self) -> Option<&'a Token> {
        if self.is_at_end() {
            return None;
        }

        let token = &self.tokens[self.position];
        self.position += 1;
        trace!(position = self.position, kind = %token.kind(), "advance");
        Some(token)
    }

    /// True if the current token has the given kind. Does not advance.
    pub fn match_kind(&self, kind: TokenKind) -> bool {
        self.tokens
            .get(self.position)
            .is_some_and(|token| token.kind() == kind)
    }

    /// Index of the current token.
    pub fn position(&self) -> usize {
        self.position
    }

    /// True when the cursor sits on the last token, or the sequence is empty.
    pub fn is_at_end(&self) -> bool {
        self.position + 1 >= self.tokens.len()
    }

    /// The whole token sequence.
    pub fn tokens(&self) -> &'a [Token] {
        self.tokens
    }
}
