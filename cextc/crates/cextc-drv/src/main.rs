//! cextc - token dump for Cext source files.
//!
//! Parses arguments with clap, sets up logging, merges the configuration
//! file with the flags and hands off to [`cextc_drv::run`].

use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cextc_drv::{run, Config, DriverError, Options, OutputFormat, Result};

/// Print the tokens of a Cext source file
#[derive(Parser, Debug)]
#[command(name = "cextc")]
#[command(author = "Cext Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Print the tokens of a Cext source file", long_about = None)]
struct Cli {
    /// Source file to scan
    file: PathBuf,

    /// Output format (default: from config, else kinds)
    #[arg(short = 'F', long, value_enum)]
    format: Option<OutputFormat>,

    /// Leave comments out of the listing
    #[arg(long)]
    skip_comments: bool,

    /// Enable verbose output
    #[arg(short, long, env = "CEXTC_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, env = "CEXTC_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, env = "CEXTC_NO_COLOR")]
    no_color: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err);
            if let Some(snippet) = err.snippet() {
                eprintln!("{}", snippet);
            }
            ExitCode::FAILURE
        },
    }
}

fn execute(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;
    init_logging(cli.verbose || config.verbose, cli.no_color)?;

    // Flags override the file
    let mut options = Options::from_config(cli.file, &config);
    if let Some(format) = cli.format {
        options.format = format;
    }
    options.skip_comments |= cli.skip_comments;

    let stdout = io::stdout();
    run(&options, &mut stdout.lock())
}

/// Initialize the logging system.
///
/// Logs go to stderr so the token listing on stdout stays clean.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = log_filter(verbose);

    let subscriber = fmt::layer()
        .with_writer(io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| DriverError::Logging(e.to_string()))?;

    Ok(())
}

/// `--verbose` forces debug; otherwise `RUST_LOG` applies, defaulting to info.
fn log_filter(verbose: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    }
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_file() {
        let cli = Cli::parse_from(["cextc", "main.cext"]);
        assert_eq!(cli.file, PathBuf::from("main.cext"));
        assert_eq!(cli.format, None);
        assert!(!cli.skip_comments);
    }

    #[test]
    fn test_cli_parse_format() {
        let cli = Cli::parse_from(["cextc", "--format", "verbose", "main.cext"]);
        assert_eq!(cli.format, Some(OutputFormat::Verbose));

        let cli = Cli::parse_from(["cextc", "-F", "kinds", "main.cext"]);
        assert_eq!(cli.format, Some(OutputFormat::Kinds));
    }

    #[test]
    fn test_cli_parse_flags() {
        let cli = Cli::parse_from([
            "cextc",
            "--skip-comments",
            "--no-color",
            "-v",
            "-c",
            "custom.toml",
            "main.cext",
        ]);
        assert!(cli.skip_comments);
        assert!(cli.no_color);
        assert!(cli.verbose);
        assert_eq!(cli.config, Some(PathBuf::from("custom.toml")));
    }

    #[test]
    fn test_verbose_filter_is_debug() {
        assert_eq!(log_filter(true).to_string(), "debug");
    }

    #[test]
    fn test_cli_requires_file() {
        assert!(Cli::try_parse_from(["cextc"]).is_err());
    }

    #[test]
    fn test_cli_rejects_unknown_format() {
        assert!(Cli::try_parse_from(["cextc", "--format", "json", "main.cext"]).is_err());
    }
}
