//! Core error types for cextc-util crate
//!
//! This module defines error types used throughout the util crate.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for source loading operations
#[derive(Debug, Error)]
pub enum SourceError {
    /// The source path could not be opened or read
    #[error("cannot open source file '{}': {source}", .path.display())]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A line number outside the file was requested
    #[error("invalid line number: {line} (file has {max_lines} lines)")]
    InvalidLineNumber { line: usize, max_lines: usize },
}

/// Result type alias for source operations
pub type SourceResult<T> = std::result::Result<T, SourceError>;
