//! Configuration for the foodco2 command-line tool.
//!
//! Config is read from a TOML file (`foodco2.toml` in the working directory
//! unless `--config` points elsewhere). Every field is optional.
//!
//! ```toml
//! data_dir = "data"
//! output_format = "json"
//!
//! [[donation_mix]]
//! dish_name = "Naudanliha"
//! share = 0.3
//! ```

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::models::DonationMixShare;

/// File looked up in the working directory when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "foodco2.toml";

/// Output format for results
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Directory with replacement factor tables (embedded tables if unset)
    #[serde(default)]
    pub data_dir: Option<PathBuf>,

    /// Default output format (table, json)
    #[serde(default)]
    pub output_format: OutputFormat,

    /// Representative dishes used to split a donated-mass total
    #[serde(default = "DonationMixShare::dashboard_default")]
    pub donation_mix: Vec<DonationMixShare>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: None,
            output_format: OutputFormat::default(),
            donation_mix: DonationMixShare::dashboard_default(),
        }
    }
}

impl Config {
    /// Parses and validates a TOML document.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => ConfigError::NotFound(path.to_path_buf()),
            _ => ConfigError::Io(e),
        })?;
        Self::from_toml_str(&content)
    }

    /// Loads `path` if given; otherwise the default file if it exists, else defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(p) => Self::load(p),
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    Self::load(default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for entry in &self.donation_mix {
            if !entry.share.is_finite() || entry.share < 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "donation_mix share for '{}' must be >= 0, got {}",
                    entry.dish_name, entry.share
                )));
            }
        }
        Ok(())
    }
}
