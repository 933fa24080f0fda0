//! Token definitions and the fixed lookup tables.
//!
//! A [`Token`] pairs a [`TokenKind`] with the [`Span`] it was scanned from
//! and, for words, literals and comments, the captured lexeme. Operators and
//! punctuation carry no lexeme: their text is fixed by [`PUNCTUATION`].

use std::fmt;

use cextc_util::Span;

/// Every token kind the scanner can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // === Words ===
    Identifier,
    Keyword,
    BuiltinType,

    // === Literals ===
    IntegerLiteral,
    FloatLiteral,
    StringLiteral,
    CharacterLiteral,
    UnicodeLiteral,

    // === Arithmetic ===
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    LeftShift,
    RightShift,

    // === Bitwise / logical ===
    BitAnd,
    BitOr,
    BitXor,
    BitNot,
    Not,
    LogicalAnd,
    LogicalOr,

    // === Assignment ===
    AssignEqual,
    AssignAdd,
    AssignSub,
    AssignMul,
    AssignDiv,
    AssignMod,
    AssignLeftShift,
    AssignRightShift,
    AssignBitAnd,
    AssignBitOr,
    AssignBitXor,

    // === Relational ===
    Equal,
    NotEqual,
    GreaterThan,
    LessThan,
    GreaterThanEqual,
    LessThanEqual,

    // === Punctuation ===
    Arrow,
    OpenParen,
    CloseParen,
    OpenBracket,
    CloseBracket,
    OpenBrace,
    CloseBrace,
    Dot,
    Comma,
    Colon,
    Semicolon,
    QuestionMark,

    // === Comments ===
    Comment,
    MultilineComment,

    /// End of input. Always the last token of a scan.
    End,
}

impl TokenKind {
    /// Display name used by the token dump.
    pub fn as_str(self) -> &'static str {
        match self {
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Keyword => "KEYWORD",
            TokenKind::BuiltinType => "BUILTIN_TYPE",
            TokenKind::IntegerLiteral => "INTEGER_LITERAL",
            TokenKind::FloatLiteral => "FLOAT_LITERAL",
            TokenKind::StringLiteral => "STRING_LITERAL",
            TokenKind::CharacterLiteral => "CHARACTER_LITERAL",
            TokenKind::UnicodeLiteral => "UNICODE_LITERAL",
            TokenKind::Add => "OP_ADD",
            TokenKind::Sub => "OP_SUB",
            TokenKind::Mul => "OP_MUL",
            TokenKind::Div => "OP_DIV",
            TokenKind::Mod => "OP_MOD",
            TokenKind::LeftShift => "OP_LEFT_SHIFT",
            TokenKind::RightShift => "OP_RIGHT_SHIFT",
            TokenKind::BitAnd => "BINOP_AND",
            TokenKind::BitOr => "BINOP_OR",
            TokenKind::BitXor => "BINOP_XOR",
            TokenKind::BitNot => "BINOP_NOT",
            TokenKind::Not => "LOGICAL_NOT",
            TokenKind::LogicalAnd => "LOGICAL_AND",
            TokenKind::LogicalOr => "LOGICAL_OR",
            TokenKind::AssignEqual => "ASSIGN",
            TokenKind::AssignAdd => "ASSIGN_OP_ADD",
            TokenKind::AssignSub => "ASSIGN_OP_SUB",
            TokenKind::AssignMul => "ASSIGN_OP_MUL",
            TokenKind::AssignDiv => "ASSIGN_OP_DIV",
            TokenKind::AssignMod => "ASSIGN_OP_MOD",
            TokenKind::AssignLeftShift => "ASSIGN_LEFT_SHIFT",
            TokenKind::AssignRightShift => "ASSIGN_RIGHT_SHIFT",
            TokenKind::AssignBitAnd => "ASSIGN_BINOP_AND",
            TokenKind::AssignBitOr => "ASSIGN_BINOP_OR",
            TokenKind::AssignBitXor => "ASSIGN_BINOP_XOR",
            TokenKind::Equal => "REL_OP_EQUAL",
            TokenKind::NotEqual => "REL_OP_NOT_EQUAL",
            TokenKind::GreaterThan => "REL_OP_GREATER_THAN",
            TokenKind::LessThan => "REL_OP_LESS_THAN",
            TokenKind::GreaterThanEqual => "REL_OP_GREATER_THAN_EQUAL",
            TokenKind::LessThanEqual => "REL_OP_LESS_THAN_EQUAL",
            TokenKind::Arrow => "ARROW",
            TokenKind::OpenParen => "OPEN_PAREN",
            TokenKind::CloseParen => "CLOSE_PAREN",
            TokenKind::OpenBracket => "OPEN_BRACKET",
            TokenKind::CloseBracket => "CLOSE_BRACKET",
            TokenKind::OpenBrace => "OPEN_BRACE",
            TokenKind::CloseBrace => "CLOSE_BRACE",
            TokenKind::Dot => "DOT",
            TokenKind::Comma => "COMMA",
            TokenKind::Colon => "COLON",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::QuestionMark => "QUESTION_MARK",
            TokenKind::Comment => "COMMENT",
            TokenKind::MultilineComment => "MULTILINE_COMMENT",
            TokenKind::End => "END",
        }
    }

    pub fn is_comment(self) -> bool {
        matches!(self, TokenKind::Comment | TokenKind::MultilineComment)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A classified unit of lexical input.
///
/// Tokens are built once by the scanner and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    kind: TokenKind,
    span: Span,
    lexeme: Option<Vec<u8>>,
}

impl Token {
    pub fn new(kind: TokenKind, span: Span, lexeme: Option<Vec<u8>>) -> Self {
        Self { kind, span, lexeme }
    }

    #[inline]
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// Source range of the token, delimiters included.
    #[inline]
    pub fn span(&self) -> Span {
        self.span
    }

    /// Captured source bytes for words, literals and comments.
    ///
    /// For character literals this is the decoded byte; for string literals
    /// and comments it is the raw text between the delimiters, byte for byte.
    #[inline]
    pub fn lexeme_bytes(&self) -> Option<&[u8]> {
        self.lexeme.as_deref()
    }

    /// The lexeme as text.
    ///
    /// `None` when there is no lexeme or when its bytes are not valid UTF-8;
    /// use [`lexeme_bytes`](Self::lexeme_bytes) for the exact bytes.
    pub fn lexeme(&self) -> Option<&str> {
        self.lexeme_bytes()
            .and_then(|bytes| std::str::from_utf8(bytes).ok())
    }

    #[inline]
    pub fn offset(&self) -> usize {
        self.span.start
    }

    #[inline]
    pub fn line(&self) -> u32 {
        self.span.line
    }

    #[inline]
    pub fn column(&self) -> u32 {
        self.span.column
    }

    /// Number of source bytes covered by the token.
    #[inline]
    pub fn len(&self) -> usize {
        self.span.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.span.is_empty()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.span, self.kind)?;
        match (self.lexeme(), self.lexeme_bytes()) {
            (Some(text), _) => write!(f, " {:?}", text)?,
            (None, Some(bytes)) => write!(f, " \"{}\"", bytes.escape_ascii())?,
            (None, None) => {},
        }
        Ok(())
    }
}

/// Reserved words.
pub static KEYWORDS: &[&str] = &[
    "for", "while", "if", "else", "return", "break", "continue", "switch", "case", "default",
    "import", "struct", "enum",
];

/// Reserved type names.
pub static BUILTIN_TYPES: &[&str] = &[
    "void", "bool", "char", "int8", "int16", "int32", "int64", "uint8", "uint16", "uint32",
    "uint64", "float32", "float64",
];

/// Operator and punctuation spellings.
///
/// Ordered longest-first: no entry is a prefix of an entry after it, so the
/// first match is always the maximal munch.
pub static PUNCTUATION: &[(&str, TokenKind)] = &[
    (">>=", TokenKind::AssignRightShift),
    ("<<=", TokenKind::AssignLeftShift),
    ("==", TokenKind::Equal),
    (">=", TokenKind::GreaterThanEqual),
    ("<=", TokenKind::LessThanEqual),
    ("!=", TokenKind::NotEqual),
    ("+=", TokenKind::AssignAdd),
    ("-=", TokenKind::AssignSub),
    ("/=", TokenKind::AssignDiv),
    ("*=", TokenKind::AssignMul),
    ("%=", TokenKind::AssignMod),
    ("^=", TokenKind::AssignBitXor),
    ("&=", TokenKind::AssignBitAnd),
    ("|=", TokenKind::AssignBitOr),
    ("&&", TokenKind::LogicalAnd),
    ("||", TokenKind::LogicalOr),
    (">>", TokenKind::RightShift),
    ("<<", TokenKind::LeftShift),
    ("->", TokenKind::Arrow),
    ("+", TokenKind::Add),
    ("-", TokenKind::Sub),
    ("/", TokenKind::Div),
    ("*", TokenKind::Mul),
    ("%", TokenKind::Mod),
    ("^", TokenKind::BitXor),
    ("&", TokenKind::BitAnd),
    ("|", TokenKind::BitOr),
    ("~", TokenKind::BitNot),
    ("!", TokenKind::Not),
    ("=", TokenKind::AssignEqual),
    (">", TokenKind::GreaterThan),
    ("<", TokenKind::LessThan),
    (".", TokenKind::Dot),
    (",", TokenKind::Comma),
    (":", TokenKind::Colon),
    (";", TokenKind::Semicolon),
    ("?", TokenKind::QuestionMark),
    ("(", TokenKind::OpenParen),
    (")", TokenKind::CloseParen),
    ("[", TokenKind::OpenBracket),
    ("]", TokenKind::CloseBracket),
    ("{", TokenKind::OpenBrace),
    ("}", TokenKind::CloseBrace),
];

/// Classify scanned word text as a keyword, builtin type or identifier.
///
/// ```
/// use cextc_lex::{classify_word, TokenKind};
///
/// assert_eq!(classify_word("while"), TokenKind::Keyword);
/// assert_eq!(classify_word("uint8"), TokenKind::BuiltinType);
/// assert_eq!(classify_word("whilst"), TokenKind::Identifier);
/// ```
pub fn classify_word(text: &str) -> TokenKind {
    if KEYWORDS.contains(&text) {
        TokenKind::Keyword
    } else if BUILTIN_TYPES.contains(&text) {
        TokenKind::BuiltinType
    } else {
        TokenKind::Identifier
    }
}

/// Find the operator or punctuation at the start of `input`.
pub fn match_punctuation(input: &[u8]) -> Option<(&'static str, TokenKind)> {
    PUNCTUATION
        .iter()
        .copied()
        .find(|(spelling, _)| input.starts_with(spelling.as_bytes()))
}
