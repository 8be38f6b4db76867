//! Core error types for studytrack-core.
//!
//! Domain operations (timer commands, status updates, rate calculations) are
//! total and never fail. Errors only come from the edges: reading the
//! configuration file and interpreting user-supplied names and indices.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for studytrack-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

/// Validation errors.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    /// Unknown item type name
    #[error("Unknown item type: '{0}'")]
    UnknownItemType(String),

    /// Unknown status name
    #[error("Unknown status: '{0}'")]
    UnknownStatus(String),

    /// Unknown navigation route
    #[error("Unknown route: '{0}'")]
    UnknownRoute(String),

    /// An item was picked while no group dialog was open
    #[error("No item group is open")]
    NoGroupOpen,

    /// Out of bounds
    #[error("Index {index} out of bounds for {collection} (length: {len})")]
    OutOfBounds {
        collection: String,
        index: usize,
        len: usize,
    },
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::ParseFailed(err.to_string())
    }
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
