//! Configuration for the cextc driver.
//!
//! Settings come from an optional `cextc.toml`. Command-line flags are
//! applied on top by the binary.

use std::path::{Path, PathBuf};

use dirs::{config_dir, home_dir};
use serde::Deserialize;
use tracing::debug;

use crate::error::{DriverError, Result};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "cextc.toml";

/// How each token is printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One kind name per line, e.g. `KEYWORD`.
    #[default]
    Kinds,
    /// `line:column KIND "lexeme"` per line.
    Verbose,
}

/// Driver configuration.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Config {
    /// Enable debug logging.
    #[serde(default)]
    pub verbose: bool,

    /// Token listing options.
    #[serde(default)]
    pub output: OutputConfig,
}

/// Token listing options.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct OutputConfig {
    /// Listing format.
    #[serde(default)]
    pub format: OutputFormat,

    /// Leave comment tokens out of the listing.
    #[serde(default)]
    pub skip_comments: bool,
}

impl Config {
    /// Load configuration from the default locations.
    ///
    /// Searches in order:
    /// 1. Current directory
    /// 2. `~/.config/cextc/`
    /// 3. The platform configuration directory
    ///
    /// Returns the default configuration if no file is found.
    pub fn load() -> Result<Self> {
        match Self::find_config_file() {
            Some(path) => Self::load_from_path(&path),
            None => {
                debug!("no configuration file found, using defaults");
                Ok(Self::default())
            },
        }
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(DriverError::Config(format!(
                "configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| DriverError::Config(format!("failed to parse {}: {}", path.display(), e)))?;

        debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    fn check_current_dir_config() -> Option<PathBuf> {
        let path = PathBuf::from(CONFIG_FILE_NAME);
        path.exists().then_some(path)
    }

    fn check_home_config() -> Option<PathBuf> {
        home_dir()
            .map(|dir| dir.join(".config").join("cextc").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    fn check_system_config() -> Option<PathBuf> {
        config_dir()
            .map(|dir| dir.join("cextc").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    fn find_config_file() -> Option<PathBuf> {
        Self::check_current_dir_config()
            .or_else(Self::check_home_config)
            .or_else(Self::check_system_config)
    }
}
