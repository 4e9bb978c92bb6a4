//! # frontpanel
//!
//! Computes front panel layouts for modular synthesizers and hands them to a
//! renderer as purpose-tagged features.
//!
//! Supported panel standards:
//! - Eurorack 3U (Doepfer A-100)
//! - Intellijel 1U
//! - Pulplogic 1U tiles
//!
//! ## Architecture
//!
//! The workspace is organized into several crates:
//!
//! 1. **frontpanel-core** - Geometry primitives, units, error types
//! 2. **frontpanel-formats** - Per-standard constant tables and derived panel geometry
//! 3. **frontpanel-features** - Feature model, layout generator, layer classifier
//! 4. **frontpanel-settings** - TOML/JSON job configuration
//! 5. **frontpanel** - CLI binary plus the JSON and SVG export

pub mod export;
pub mod job;

pub use frontpanel_core::{
    format_length, get_unit_label, FeatureError, MeasurementSystem, PanelError, Point, Rect,
};
pub use frontpanel_features::{
    classify, Classification, Diagnostic, Feature, FillOptions, Layer, LayoutRequest,
    PanelLayout, Purpose,
};
pub use frontpanel_formats::{FormatKind, PanelFormat};
pub use frontpanel_settings::{JobConfig, SettingsError, MAX_SEED};

pub use export::{render_svg, write_layers_json, write_svg, LayersDocument};
pub use job::{run_job, JobOutput};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Log output style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Initialize logging
///
/// Sets up structured logging with:
/// - Output on stderr, leaving stdout for the run summary
/// - RUST_LOG environment variable support, falling back to `default_level`
/// - Pretty or JSON formatting
pub fn init_logging(default_level: tracing::Level, format: LogFormat) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy();

    let registry = tracing_subscriber::registry().with(env_filter);
    let result = match format {
        LogFormat::Pretty => registry
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_level(true)
                    .with_line_number(true)
                    .pretty(),
            )
            .try_init(),
        LogFormat::Json => registry
            .with(fmt::layer().with_writer(std::io::stderr).json())
            .try_init(),
    };

    result.map_err(|e| anyhow::anyhow!("Failed to initialise logging: {}", e))
}
