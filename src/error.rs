//! Error types for foodco2.
//!
//! The calculation core never fails; only loading tables and configuration
//! from disk can.

use std::path::PathBuf;

use thiserror::Error;

use crate::models::DishType;

/// Errors raised while loading or validating factor tables.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("IO error reading {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid emission factor for '{key}': {value} (must be >= 0)")]
    InvalidEmissionFactor { key: String, value: f64 },

    #[error("Invalid conversion factor for '{key}': {value} (must be > 0)")]
    InvalidConversionFactor { key: String, value: f64 },

    #[error("Invalid mass share for '{key}' in {dish_type}: {value} (must be >= 0)")]
    InvalidMassShare {
        dish_type: DishType,
        key: String,
        value: f64,
    },

    #[error("No template rows for dish type {0}")]
    MissingTemplate(DishType),
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}
