//! Source loading and line lookup.
//!
//! [`read_source`] is the only way source text enters the compiler: the whole
//! file is read into memory in one call and the handle is released before
//! scanning starts. [`SourceFile`] keeps the buffer together with a line
//! table so diagnostics can quote the offending line.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use tracing::debug;

use crate::error::{SourceError, SourceResult};

/// Read a source file fully into memory.
///
/// # Errors
///
/// Returns [`SourceError::FileOpen`] if the path cannot be opened or read.
pub fn read_source(path: impl AsRef<Path>) -> SourceResult<Vec<u8>> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|source| SourceError::FileOpen {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = bytes.len(), "read source file");
    Ok(bytes)
}

/// A loaded source file with precomputed line starts.
#[derive(Clone)]
pub struct SourceFile {
    name: String,
    content: Arc<[u8]>,
    line_starts: Arc<[usize]>,
}

impl SourceFile {
    /// Create a source file from an in-memory buffer.
    pub fn new(name: impl Into<String>, content: impl Into<Arc<[u8]>>) -> Self {
        let content = content.into();
        let line_starts = Self::line_starts(&content);
        Self {
            name: name.into(),
            content,
            line_starts,
        }
    }

    /// Load a source file from disk.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::FileOpen`] if the path cannot be read.
    pub fn load(path: impl AsRef<Path>) -> SourceResult<Self> {
        let path = path.as_ref();
        let content = read_source(path)?;
        Ok(Self::new(path.display().to_string(), content))
    }

    fn line_starts(content: &[u8]) -> Arc<[usize]> {
        let mut line_starts = vec![0];
        line_starts.extend(
            content
                .iter()
                .enumerate()
                .filter(|(_, &b)| b == b'\n')
                .map(|(i, _)| i + 1),
        );
        line_starts.into()
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn content(&self) -> &[u8] {
        &self.content
    }

    #[inline]
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Get the text of a 1-based line, without its line terminator.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::InvalidLineNumber`] for line 0 or a line past
    /// the end of the file.
    pub fn line_at(&self, line: usize) -> SourceResult<&[u8]> {
        let invalid = || SourceError::InvalidLineNumber {
            line,
            max_lines: self.line_count(),
        };
        if line == 0 {
            return Err(invalid());
        }
        let start = *self.line_starts.get(line - 1).ok_or_else(invalid)?;
        let end = self
            .line_starts
            .get(line)
            .map_or(self.content.len(), |next| next - 1);

        let text = &self.content[start..end];
        Ok(text.strip_suffix(b"\r").unwrap_or(text))
    }

    /// Render a location as a snippet for error output.
    ///
    /// ```text
    /// --> main.cext:2:4
    ///   |
    /// 2 | x = "abc
    ///   |     ^
    /// ```
    ///
    /// The caret is `len` bytes wide, at least one and never past the end of
    /// the line. Returns `None` when `line` is not inside the file.
    pub fn format_location(&self, line: u32, column: u32, len: usize) -> Option<String> {
        let line_text = self.line_at(line as usize).ok()?;
        let line_text = String::from_utf8_lossy(line_text);
        let width = line.to_string().len();
        let room = line_text.len().saturating_sub(column as usize).max(1);
        let caret_len = len.clamp(1, room);

        let mut out = String::new();
        out.push_str(&format!("{:>width$}--> {}:{}:{}\n", "", self.name, line, column));
        out.push_str(&format!("{:>width$} |\n", ""));
        out.push_str(&format!("{} | {}\n", line, line_text));
        out.push_str(&format!(
            "{:>width$} | {}{}",
            "",
            " ".repeat(column as usize),
            "^".repeat(caret_len)
        ));
        Some(out)
    }
}

impl std::fmt::Debug for SourceFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceFile")
            .field("name", &self.name)
            .field("bytes", &self.content.len())
            .field("line_count", &self.line_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_read_source() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "for x = 1").unwrap();
        let bytes = read_source(file.path()).unwrap();
        assert_eq!(bytes, b"for x = 1");
    }

    #[test]
    fn test_read_source_missing_file() {
        let err = read_source("/nonexistent/path/input.cext").unwrap_err();
        assert!(matches!(err, SourceError::FileOpen { .. }));
    }

    #[test]
    fn test_load_keeps_name() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "a\nb").unwrap();
        let source = SourceFile::load(file.path()).unwrap();
        assert_eq!(source.name(), file.path().display().to_string());
        assert_eq!(source.line_count(), 2);
    }

    #[test]
    fn test_line_at() {
        let source = SourceFile::new("test.cext", b"first\nsecond\r\nthird".to_vec());
        assert_eq!(source.line_count(), 3);
        assert_eq!(source.line_at(1).unwrap(), b"first");
        assert_eq!(source.line_at(2).unwrap(), b"second");
        assert_eq!(source.line_at(3).unwrap(), b"third");
    }

    #[test]
    fn test_line_at_out_of_range() {
        let source = SourceFile::new("test.cext", b"only".to_vec());
        assert!(matches!(
            source.line_at(0),
            Err(SourceError::InvalidLineNumber { line: 0, .. })
        ));
        assert!(matches!(
            source.line_at(2),
            Err(SourceError::InvalidLineNumber { line: 2, max_lines: 1 })
        ));
    }

    #[test]
    fn test_trailing_newline_adds_empty_line() {
        let source = SourceFile::new("test.cext", b"x\n".to_vec());
        assert_eq!(source.line_count(), 2);
        assert_eq!(source.line_at(2).unwrap(), b"");
    }

    #[test]
    fn test_format_location() {
        let source = SourceFile::new("main.cext", b"int32 x\nx = \"abc".to_vec());
        let rendered = source.format_location(2, 4, 1).unwrap();
        assert!(rendered.contains("--> main.cext:2:4"));
        assert!(rendered.contains("2 | x = \"abc"));
        assert!(rendered.ends_with("|     ^"));
    }

    #[test]
    fn test_format_location_caret_width() {
        let source = SourceFile::new("main.cext", b"a >>= @".to_vec());
        let rendered = source.format_location(1, 2, 3).unwrap();
        assert!(rendered.ends_with("|   ^^^"));

        let clamped = source.format_location(1, 6, 10).unwrap();
        assert!(clamped.ends_with("|       ^"));
    }

    #[test]
    fn test_format_location_outside_file() {
        let source = SourceFile::new("main.cext", b"x".to_vec());
        assert!(source.format_location(5, 0, 1).is_none());
    }
}
