//! # frontpanel-features
//!
//! The feature model (lines, circles, text tagged with a fabrication
//! purpose), the layout generator that turns a [`PanelFormat`] into
//! features, and the classifier that buckets them per fabrication layer.
//!
//! [`PanelFormat`]: frontpanel_formats::PanelFormat

pub mod classify;
pub mod feature;
pub mod layout;

pub use classify::{classify, route, Classification, Diagnostic, Layer};
pub use feature::{
    Alignment, Circle, Feature, HorizontalAlign, Line, Purpose, Text, TextOptions, VerticalAlign,
    DEFAULT_TEXT_SIZE,
};
pub use layout::{
    copper_pour, decorative_fill, header_footer, outline, safe_interior, FillOptions,
    LayoutRequest, PanelLayout, DEFAULT_FILL_COUNT, HEADER_FOOTER_TEXT_SIZE, OUTLINE_THICKNESS,
};
