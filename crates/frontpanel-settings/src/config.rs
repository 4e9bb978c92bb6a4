//! Job configuration for a panel run
//!
//! A job describes one panel: which standard, how wide, the legends to put
//! on it, and the decorative fill. Files are JSON or TOML, chosen by
//! extension, and every section falls back to its defaults when omitted.

use crate::error::{SettingsError, SettingsResult};
use frontpanel_features::{FillOptions, LayoutRequest, DEFAULT_FILL_COUNT};
use frontpanel_formats::{FormatKind, PanelFormat};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_WIDTH: i64 = 8;
pub const DEFAULT_NAME: &str = "panel";

/// Largest seed a TOML integer can hold
pub const MAX_SEED: u64 = i64::MAX as u64;

/// On-disk encoding of a config file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Toml,
}

impl ConfigFormat {
    pub fn from_path(path: &Path) -> SettingsResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            Some(other) => Err(SettingsError::UnsupportedFormat(other.to_string())),
            None => Err(SettingsError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Panel selection and legends
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelSettings {
    /// Panel standard
    #[serde(default)]
    pub format: FormatKind,
    /// Width in format units (HP)
    #[serde(default = "default_width")]
    pub width: i64,
    /// Basename for exported files
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default)]
    pub header: String,
    #[serde(default)]
    pub footer: String,
}

fn default_width() -> i64 {
    DEFAULT_WIDTH
}

fn default_name() -> String {
    DEFAULT_NAME.to_string()
}

impl Default for PanelSettings {
    fn default() -> Self {
        Self {
            format: FormatKind::default(),
            width: DEFAULT_WIDTH,
            name: default_name(),
            header: String::new(),
            footer: String::new(),
        }
    }
}

/// Decorative fill between the rails
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FillSettings {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default = "default_count")]
    pub count: usize,
    #[serde(default = "default_thicknesses")]
    pub thicknesses: Vec<f64>,
    /// Fixed seed for a reproducible fill; OS entropy otherwise
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

fn default_enabled() -> bool {
    true
}

fn default_count() -> usize {
    DEFAULT_FILL_COUNT
}

fn default_thicknesses() -> Vec<f64> {
    FillOptions::default().thicknesses
}

impl Default for FillSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            count: DEFAULT_FILL_COUNT,
            thicknesses: default_thicknesses(),
            seed: None,
        }
    }
}

impl FillSettings {
    pub fn options(&self) -> FillOptions {
        FillOptions {
            count: self.count,
            thicknesses: self.thicknesses.clone(),
        }
    }
}

/// Complete job configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct JobConfig {
    #[serde(default)]
    pub panel: PanelSettings,
    #[serde(default)]
    pub fill: FillSettings,
}

impl JobConfig {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = ConfigFormat::from_path(path)?;
        let content = std::fs::read_to_string(path)?;

        let config: Self = match format {
            ConfigFormat::Json => serde_json::from_str(&content)?,
            ConfigFormat::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        tracing::info!("Loaded job config from {}", path.display());
        Ok(config)
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match ConfigFormat::from_path(path)? {
            ConfigFormat::Json => serde_json::to_string_pretty(self)?,
            ConfigFormat::Toml => toml::to_string_pretty(self)?,
        };

        std::fs::write(path, content)?;
        tracing::debug!("Saved job config to {}", path.display());
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        self.panel_format()?;

        if self.panel.name.trim().is_empty() {
            return Err(SettingsError::invalid("panel.name", "must not be empty"));
        }

        if self.panel.name.contains(['/', '\\']) {
            return Err(SettingsError::invalid(
                "panel.name",
                "must be a basename, not a path",
            ));
        }

        if self.fill.enabled {
            self.fill.options().validate()?;
        }

        if self.fill.seed.is_some_and(|seed| seed > MAX_SEED) {
            return Err(SettingsError::invalid(
                "fill.seed",
                format!("must be at most {}", MAX_SEED),
            ));
        }

        Ok(())
    }

    /// The panel this job describes
    pub fn panel_format(&self) -> SettingsResult<PanelFormat> {
        Ok(PanelFormat::new(self.panel.format, self.panel.width)?)
    }

    /// Everything besides the outline
    pub fn layout_request(&self) -> LayoutRequest {
        LayoutRequest {
            header: self.panel.header.clone(),
            footer: self.panel.footer.clone(),
            fill: self.fill.enabled.then(|| self.fill.options()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use frontpanel_core::{FeatureError, PanelError};

    #[test]
    fn test_defaults() {
        let config = JobConfig::new();
        assert_eq!(config.panel.format, FormatKind::Eurorack);
        assert_eq!(config.panel.width, 8);
        assert_eq!(config.panel.name, "panel");
        assert!(config.fill.enabled);
        assert_eq!(config.fill.count, 100);
        assert_eq!(config.fill.thicknesses, vec![0.0, 0.1, 0.2]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_width() {
        let mut config = JobConfig::new();
        config.panel.width = 0;
        assert!(matches!(
            config.validate(),
            Err(SettingsError::Panel(PanelError::InvalidWidth { width: 0 }))
        ));
    }

    #[test]
    fn test_validate_thicknesses() {
        let mut config = JobConfig::new();
        config.fill.thicknesses.clear();
        assert!(matches!(
            config.validate(),
            Err(SettingsError::Feature(FeatureError::EmptyThicknessSet))
        ));

        // Unused when the fill is off
        config.fill.enabled = false;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_name() {
        let mut config = JobConfig::new();
        config.panel.name = "  ".to_string();
        assert!(matches!(
            config.validate(),
            Err(SettingsError::InvalidSetting { .. })
        ));

        config.panel.name = "out/panel".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_seed_range() {
        let mut config = JobConfig::new();
        config.fill.seed = Some(MAX_SEED);
        assert!(config.validate().is_ok());

        config.fill.seed = Some(MAX_SEED + 1);
        assert!(matches!(
            config.validate(),
            Err(SettingsError::InvalidSetting { key, .. }) if key == "fill.seed"
        ));
    }

    #[test]
    fn test_config_format_from_path() {
        assert_eq!(
            ConfigFormat::from_path(Path::new("job.toml")).unwrap(),
            ConfigFormat::Toml
        );
        assert_eq!(
            ConfigFormat::from_path(Path::new("job.json")).unwrap(),
            ConfigFormat::Json
        );
        assert!(matches!(
            ConfigFormat::from_path(Path::new("job.yaml")),
            Err(SettingsError::UnsupportedFormat(ext)) if ext == "yaml"
        ));
        assert!(ConfigFormat::from_path(Path::new("job")).is_err());
    }

    #[test]
    fn test_layout_request() {
        let mut config = JobConfig::new();
        config.panel.header = "VCA".to_string();
        let request = config.layout_request();
        assert_eq!(request.header, "VCA");
        assert_eq!(request.fill, Some(FillOptions::default()));

        config.fill.enabled = false;
        assert_eq!(config.layout_request().fill, None);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: JobConfig = toml::from_str(
            r#"
            [panel]
            format = "pulplogic"
            width = 12
            "#,
        )
        .unwrap();
        assert_eq!(config.panel.format, FormatKind::Pulplogic);
        assert_eq!(config.panel.width, 12);
        assert_eq!(config.panel.name, "panel");
        assert_eq!(config.fill, FillSettings::default());
    }
}
