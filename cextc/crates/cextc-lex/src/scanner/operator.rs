//! Operator and punctuation scanning.

use super::Scanner;
use crate::token::{match_punctuation, Token};

impl<'a> Scanner<'a> {
    /// Scans the longest operator or punctuation at the cursor.
    ///
    /// Returns `None`, consuming nothing, when no table entry matches.
    pub(crate) fn scan_punctuation(&mut self) -> Option<Token> {
        let (spelling, kind) = match_punctuation(self.cursor.remaining())?;
        self.cursor.advance_n(spelling.len());
        Some(self.make_token(kind, None))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::TokenKind;

    fn lex_op(source: &str) -> Option<Token> {
        let mut scanner = Scanner::new(source.as_bytes());
        scanner.scan_punctuation()
    }

    #[test]
    fn test_single_char_operators() {
        let cases = [
            ("+", TokenKind::Add),
            ("-", TokenKind::Sub),
            ("*", TokenKind::Mul),
            ("/", TokenKind::Div),
            ("%", TokenKind::Mod),
            ("~", TokenKind::BitNot),
            ("!", TokenKind::Not),
            ("?", TokenKind::QuestionMark),
            (";", TokenKind::Semicolon),
            ("{", TokenKind::OpenBrace),
        ];
        for (source, kind) in cases {
            let token = lex_op(source).unwrap();
            assert_eq!(token.kind(), kind, "{}", source);
            assert_eq!(token.lexeme(), None);
            assert_eq!(token.len(), 1);
        }
    }

    #[test]
    fn test_two_char_operators() {
        let cases = [
            ("==", TokenKind::Equal),
            ("!=", TokenKind::NotEqual),
            ("->", TokenKind::Arrow),
            ("<<", TokenKind::LeftShift),
            ("&&", TokenKind::LogicalAnd),
            ("|=", TokenKind::AssignBitOr),
        ];
        for (source, kind) in cases {
            let token = lex_op(source).unwrap();
            assert_eq!(token.kind(), kind, "{}", source);
            assert_eq!(token.len(), 2);
        }
    }

    #[test]
    fn test_longest_match() {
        let token = lex_op(">>=").unwrap();
        assert_eq!(token.kind(), TokenKind::AssignRightShift);
        assert_eq!(token.len(), 3);

        let token = lex_op("<<=1").unwrap();
        assert_eq!(token.kind(), TokenKind::AssignLeftShift);
    }

    #[test]
    fn test_prefix_falls_back_to_shorter() {
        let token = lex_op(">>x").unwrap();
        assert_eq!(token.kind(), TokenKind::RightShift);

        let token = lex_op("-x").unwrap();
        assert_eq!(token.kind(), TokenKind::Sub);
    }

    #[test]
    fn test_no_match_consumes_nothing() {
        let mut scanner = Scanner::new(b"@");
        assert!(scanner.scan_punctuation().is_none());
        assert_eq!(scanner.cursor.position(), 0);
    }
}
