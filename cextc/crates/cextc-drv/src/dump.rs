//! Token listing output.

use std::io::{self, Write};

use cextc_lex::Token;
use cextc_par::TokenCursor;

use crate::config::OutputFormat;

/// Writes one line per token to `out`.
///
/// The `End` token is listed like any other. With `skip_comments`, comment
/// tokens are left out.
pub fn write_tokens(
    out: &mut impl Write,
    tokens: &[Token],
    format: OutputFormat,
    skip_comments: bool,
) -> io::Result<()> {
    if tokens.is_empty() {
        return Ok(());
    }

    let mut cursor = TokenCursor::new(tokens);
    loop {
        let token = cursor.current();
        if !(skip_comments && token.kind().is_comment()) {
            match format {
                OutputFormat::Kinds => writeln!(out, "{}", token.kind())?,
                OutputFormat::Verbose => writeln!(out, "{}", token)?,
            }
        }
        if cursor.advance().is_none() {
            break;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use cextc_lex::tokenize;

    fn render(source: &str, format: OutputFormat, skip_comments: bool) -> String {
        let tokens = tokenize(source.as_bytes()).unwrap();
        let mut out = Vec::new();
        write_tokens(&mut out, &tokens, format, skip_comments).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_kinds_format() {
        let out = render("for x = 1", OutputFormat::Kinds, false);
        assert_eq!(out, "KEYWORD\nIDENTIFIER\nASSIGN\nINTEGER_LITERAL\nEND\n");
    }

    #[test]
    fn test_verbose_format() {
        let out = render("x >>= 2", OutputFormat::Verbose, false);
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines[0], "1:0 IDENTIFIER \"x\"");
        assert_eq!(lines[1], "1:2 ASSIGN_RIGHT_SHIFT");
        assert_eq!(lines[3], "1:7 END");
    }

    #[test]
    fn test_skip_comments() {
        let source = "// lead\nx /* mid */ ;";
        assert_eq!(
            render(source, OutputFormat::Kinds, true),
            "IDENTIFIER\nSEMICOLON\nEND\n"
        );
        assert!(render(source, OutputFormat::Kinds, false).starts_with("COMMENT\n"));
    }

    #[test]
    fn test_empty_slice_writes_nothing() {
        let mut out = Vec::new();
        write_tokens(&mut out, &[], OutputFormat::Kinds, false).unwrap();
        assert!(out.is_empty());
    }
}
