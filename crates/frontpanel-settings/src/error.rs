//! Error types for the settings crate.
//!
//! Covers reading and writing job configuration files and validating the
//! values they carry.

use frontpanel_core::{FeatureError, PanelError};
use std::io;
use thiserror::Error;

/// Errors that can occur while loading, saving or validating a job config.
#[derive(Error, Debug)]
pub enum SettingsError {
    /// A configuration value is invalid.
    #[error("Invalid setting '{key}': {reason}")]
    InvalidSetting { key: String, reason: String },

    /// The file extension is neither `.json` nor `.toml`.
    #[error("Unsupported config format: {0} (config file must be .json or .toml)")]
    UnsupportedFormat(String),

    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// TOML deserialization error.
    #[error("TOML error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// TOML serialization error.
    #[error("TOML error: {0}")]
    TomlSerializeError(#[from] toml::ser::Error),

    /// The panel section describes no valid panel.
    #[error("Panel error: {0}")]
    Panel(#[from] PanelError),

    /// The fill section carries unusable parameters.
    #[error("Fill error: {0}")]
    Feature(#[from] FeatureError),
}

impl SettingsError {
    pub fn invalid(key: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidSetting {
            key: key.into(),
            reason: reason.into(),
        }
    }
}

/// Result type alias for settings operations.
pub type SettingsResult<T> = Result<T, SettingsError>;
