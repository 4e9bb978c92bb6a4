//! Frontpanel Settings Crate
//!
//! Loads, validates and saves job configuration files.

pub mod config;
pub mod error;

pub use config::{
    ConfigFormat, FillSettings, JobConfig, PanelSettings, DEFAULT_NAME, DEFAULT_WIDTH,
    MAX_SEED,
};
pub use error::{SettingsError, SettingsResult};
