//! # Frontpanel Formats
//!
//! Physical characteristics of the supported modular-synthesizer panel
//! standards:
//!
//! - **Eurorack 3U**: Doepfer A-100 dimensions, 128.5mm tall
//! - **Intellijel 1U**: Eurorack pitch, 39.65mm tall
//! - **Pulplogic 1U**: "tile" format specified in inches, 1.70" tall
//!
//! Each standard is a constant table ([`FormatSpec`]); a single
//! [`PanelFormat`] implementation applies the table to a requested width and
//! derives dimensions, tolerances and mounting-hole positions from it.
//!
//! All coordinates, distances and sizes are in millimetres.

pub mod eurorack;
pub mod format;
pub mod intellijel;
pub mod pulplogic;
pub mod table;

pub use format::{FormatKind, PanelFormat};
pub use table::{FormatSpec, RightHoleRule, NARROW_PANEL_WIDTH};
