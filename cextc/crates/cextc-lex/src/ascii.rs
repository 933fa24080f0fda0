//! Byte classification for the scanner.
//!
//! The language is defined over single-byte characters, so every check here
//! works on raw `u8` values. Bytes outside ASCII never start a token.

/// Checks if a byte can start an identifier.
///
/// Valid identifier start bytes are ASCII letters and underscore.
///
/// # Example
///
/// ```
/// use cextc_lex::ascii::is_ident_start;
///
/// assert!(is_ident_start(b'a'));
/// assert!(is_ident_start(b'_'));
/// assert!(!is_ident_start(b'1'));
/// assert!(!is_ident_start(b'+'));
/// ```
#[inline]
pub fn is_ident_start(b: u8) -> bool {
    b == b'_' || b.is_ascii_alphabetic()
}

/// Checks if a byte can continue an identifier.
///
/// # Example
///
/// ```
/// use cextc_lex::ascii::is_ident_continue;
///
/// assert!(is_ident_continue(b'a'));
/// assert!(is_ident_continue(b'_'));
/// assert!(is_ident_continue(b'1'));
/// assert!(!is_ident_continue(b'+'));
/// assert!(!is_ident_continue(b' '));
/// ```
#[inline]
pub fn is_ident_continue(b: u8) -> bool {
    b == b'_' || b.is_ascii_alphanumeric()
}

/// Checks if a byte is skipped between tokens.
///
/// Space, horizontal tab, carriage return and newline. Newlines are still
/// seen by the cursor so line numbers stay correct.
#[inline]
pub fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\r' | b'\n')
}
