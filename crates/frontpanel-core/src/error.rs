//! Error handling for frontpanel
//!
//! Provides the error types for invalid caller input:
//! - Panel errors (width, format selection)
//! - Feature errors (negative sizes, non-finite coordinates)
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Panel error type
///
/// Raised while selecting or constructing a panel format, before any
/// layout computation takes place.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PanelError {
    /// Width below the one-unit minimum
    #[error("Width must be greater than 0, got {width}")]
    InvalidWidth {
        /// The rejected width, in format units.
        width: i64,
    },

    /// Width too large to describe a physical panel
    #[error("Width {width} is out of range (maximum {max})")]
    WidthOutOfRange {
        /// The rejected width, in format units.
        width: i64,
        /// Largest accepted width.
        max: u32,
    },

    /// Format name not in the supported set
    #[error("Invalid format '{name}' (valid values: {valid})")]
    UnknownFormat {
        /// The name that failed to decode.
        name: String,
        /// Space separated list of accepted names.
        valid: String,
    },
}

/// Feature error type
///
/// Raised when a feature is constructed with out-of-range geometry.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FeatureError {
    /// Line thickness below zero
    #[error("Line thickness must not be negative, got {thickness}")]
    NegativeThickness {
        /// The rejected thickness in millimetres.
        thickness: f64,
    },

    /// Circle radius below zero
    #[error("Circle radius must not be negative, got {radius}")]
    NegativeRadius {
        /// The rejected radius in millimetres.
        radius: f64,
    },

    /// NaN or infinite value in a coordinate or size
    #[error("Non-finite value for {field}")]
    NonFinite {
        /// Which field carried the value.
        field: &'static str,
    },

    /// Decorative fill asked to pick from an empty thickness set
    #[error("Decorative fill needs at least one line thickness")]
    EmptyThicknessSet,
}
