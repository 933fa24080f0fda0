//! Error handling for the cextc driver.

use cextc_lex::LexError;
use cextc_util::SourceError;
use thiserror::Error;

/// Everything that can stop a `cextc` run.
#[derive(Error, Debug)]
pub enum DriverError {
    /// Configuration file could not be found, read or parsed.
    #[error("configuration error: {0}")]
    Config(String),

    /// The tracing subscriber could not be installed.
    #[error("failed to initialize logging: {0}")]
    Logging(String),

    /// The source file could not be read.
    #[error(transparent)]
    Source(#[from] SourceError),

    /// The source file failed to scan.
    ///
    /// `snippet` quotes the offending line when it could be located.
    #[error("{error}")]
    Lex {
        /// The scanner's error.
        #[source]
        error: LexError,
        /// Rendered source excerpt pointing at the error.
        snippet: Option<String>,
    },

    /// Writing the token listing failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl DriverError {
    /// Source excerpt to print under the message, if any.
    pub fn snippet(&self) -> Option<&str> {
        match self {
            DriverError::Lex { snippet, .. } => snippet.as_deref(),
            _ => None,
        }
    }
}

/// Result type alias using DriverError.
pub type Result<T> = std::result::Result<T, DriverError>;
