//! cextc-drv - Driver for the Cext Front-End
//!
//! Loads a source file, scans it and prints the token listing. The `cextc`
//! binary is a thin clap wrapper around [`run`].

pub mod config;
pub mod dump;
pub mod error;

use std::io::Write;
use std::path::PathBuf;

use cextc_lex::{tokenize, Token};
use cextc_util::SourceFile;
use tracing::debug;

pub use config::{Config, OutputConfig, OutputFormat};
pub use dump::write_tokens;
pub use error::{DriverError, Result};

/// What a single run does, after config file and flags are merged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Source file to scan.
    pub input: PathBuf,
    /// Listing format.
    pub format: OutputFormat,
    /// Leave comment tokens out of the listing.
    pub skip_comments: bool,
}

impl Options {
    /// Options for `input` taken from a loaded configuration.
    pub fn from_config(input: PathBuf, config: &Config) -> Self {
        Self {
            input,
            format: config.output.format,
            skip_comments: config.output.skip_comments,
        }
    }
}

/// Scans the file named by `options` and writes its token listing to `out`.
///
/// Nothing is written when the file fails to scan.
pub fn run(options: &Options, out: &mut impl Write) -> Result<()> {
    let file = SourceFile::load(&options.input)?;
    debug!(file = file.name(), bytes = file.content().len(), "scanning");

    let tokens = scan_file(&file)?;
    write_tokens(out, &tokens, options.format, options.skip_comments)?;
    out.flush()?;
    Ok(())
}

/// Scans a loaded file, attaching a source excerpt to any error.
pub fn scan_file(file: &SourceFile) -> Result<Vec<Token>> {
    match tokenize(file.content()) {
        Ok(tokens) => {
            debug!(count = tokens.len(), "scanned tokens");
            Ok(tokens)
        },
        Err(error) => {
            let snippet = file.format_location(error.line(), error.column(), 1);
            Err(DriverError::Lex { error, snippet })
        },
    }
}
