//! # Frontpanel Core
//!
//! Core types and utilities shared by the frontpanel crates.
//! Provides the 2D geometry primitives every panel coordinate is expressed
//! in, imperial/metric unit helpers, and the error taxonomy for invalid
//! panel and feature input.

pub mod error;
pub mod geometry;
pub mod units;

pub use error::{FeatureError, PanelError};
pub use geometry::{Point, Rect};
pub use units::{format_length, get_unit_label, inches, MeasurementSystem, MM_PER_INCH};
