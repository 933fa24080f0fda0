//! Identifier and keyword scanning.
//!
//! This module handles scanning of identifiers, keywords and builtin type
//! names, which share one lexical shape.

use super::Scanner;
use crate::ascii::is_ident_continue;
use crate::token::{classify_word, Token, TokenKind};

impl<'a> Scanner<'a> {
    /// Scans an identifier, keyword or builtin type name.
    ///
    /// Words start with a letter or underscore, followed by letters, digits
    /// or underscores. The finished text is looked up in the keyword and
    /// builtin type tables; anything else is an identifier. The lexeme is
    /// kept for all three kinds.
    pub(crate) fn scan_word(&mut self) -> Token {
        let start = self.token_start.position;
        self.cursor.advance();
        self.cursor.eat_while(is_ident_continue);

        // Word bytes are ASCII, so the conversion cannot fail.
        let kind = std::str::from_utf8(self.cursor.slice_from(start))
            .map_or(TokenKind::Identifier, classify_word);
        self.make_token(kind, Some(self.text(start)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::TokenKind;

    fn lex_word(source: &str) -> Token {
        let mut scanner = Scanner::new(source.as_bytes());
        scanner.scan_word()
    }

    #[test]
    fn test_simple_identifier() {
        let token = lex_word("foo");
        assert_eq!(token.kind(), TokenKind::Identifier);
        assert_eq!(token.lexeme(), Some("foo"));
    }

    #[test]
    fn test_identifier_with_underscore_and_digits() {
        let token = lex_word("foo_bar_123");
        assert_eq!(token.kind(), TokenKind::Identifier);
        assert_eq!(token.lexeme(), Some("foo_bar_123"));
    }

    #[test]
    fn test_leading_underscore() {
        let token = lex_word("_tmp");
        assert_eq!(token.kind(), TokenKind::Identifier);
        assert_eq!(token.lexeme(), Some("_tmp"));
    }

    #[test]
    fn test_keywords() {
        for keyword in ["for", "while", "if", "else", "return", "import", "struct", "enum"] {
            let token = lex_word(keyword);
            assert_eq!(token.kind(), TokenKind::Keyword, "{}", keyword);
            assert_eq!(token.lexeme(), Some(keyword));
        }
    }

    #[test]
    fn test_builtin_types() {
        for ty in ["void", "uint8", "uint64", "int16", "int32", "int64"] {
            let token = lex_word(ty);
            assert_eq!(token.kind(), TokenKind::BuiltinType, "{}", ty);
            assert_eq!(token.lexeme(), Some(ty));
        }
    }

    #[test]
    fn test_keyword_prefix_is_identifier() {
        assert_eq!(lex_word("format").kind(), TokenKind::Identifier);
        assert_eq!(lex_word("iffy").kind(), TokenKind::Identifier);
        assert_eq!(lex_word("uint8_t").kind(), TokenKind::Identifier);
    }

    #[test]
    fn test_keywords_are_case_sensitive() {
        assert_eq!(lex_word("While").kind(), TokenKind::Identifier);
        assert_eq!(lex_word("VOID").kind(), TokenKind::Identifier);
    }

    #[test]
    fn test_stops_at_non_word_byte() {
        let token = lex_word("abc+def");
        assert_eq!(token.lexeme(), Some("abc"));
        assert_eq!(token.len(), 3);
    }

    #[test]
    fn test_word_span() {
        let token = lex_word("while");
        assert_eq!(token.offset(), 0);
        assert_eq!(token.len(), 5);
        assert_eq!(token.line(), 1);
        assert_eq!(token.column(), 0);
    }
}
