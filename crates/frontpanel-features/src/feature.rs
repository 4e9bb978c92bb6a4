//! Panel features: drill holes (circles), outline and decoration (lines),
//! and legend text.
//!
//! Features are immutable once built. The purpose is chosen at construction
//! (default [`Purpose::Marking`]) via the consuming `with_purpose` builder,
//! before the feature is placed into a list.

use frontpanel_core::{FeatureError, Point};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Default text size, in points (about 4.93mm)
pub const DEFAULT_TEXT_SIZE: f64 = 14.0;

/// Intended fabrication use of a feature. A circle may be a silkscreen
/// marking or a drill hole; this decides which layer it lands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Purpose {
    /// Aesthetic or legend feature
    #[default]
    Marking,
    /// Creates a hole or void in the panel
    Cutout,
}

impl fmt::Display for Purpose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Marking => write!(f, "marking"),
            Self::Cutout => write!(f, "cutout"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HorizontalAlign {
    Left,
    Centre,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerticalAlign {
    Top,
    Centre,
    Bottom,
}

/// How a feature is positioned relative to its origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Alignment {
    #[default]
    TopLeft,
    TopCentre,
    TopRight,
    CentreLeft,
    Centre,
    CentreRight,
    BottomLeft,
    BottomCentre,
    BottomRight,
}

impl Alignment {
    pub const ALL: [Alignment; 9] = [
        Alignment::TopLeft,
        Alignment::TopCentre,
        Alignment::TopRight,
        Alignment::CentreLeft,
        Alignment::Centre,
        Alignment::CentreRight,
        Alignment::BottomLeft,
        Alignment::BottomCentre,
        Alignment::BottomRight,
    ];

    pub fn from_parts(vertical: VerticalAlign, horizontal: HorizontalAlign) -> Self {
        use HorizontalAlign as H;
        use VerticalAlign as V;
        match (vertical, horizontal) {
            (V::Top, H::Left) => Self::TopLeft,
            (V::Top, H::Centre) => Self::TopCentre,
            (V::Top, H::Right) => Self::TopRight,
            (V::Centre, H::Left) => Self::CentreLeft,
            (V::Centre, H::Centre) => Self::Centre,
            (V::Centre, H::Right) => Self::CentreRight,
            (V::Bottom, H::Left) => Self::BottomLeft,
            (V::Bottom, H::Centre) => Self::BottomCentre,
            (V::Bottom, H::Right) => Self::BottomRight,
        }
    }

    pub fn horizontal(self) -> HorizontalAlign {
        match self {
            Self::TopLeft | Self::CentreLeft | Self::BottomLeft => HorizontalAlign::Left,
            Self::TopCentre | Self::Centre | Self::BottomCentre => HorizontalAlign::Centre,
            Self::TopRight | Self::CentreRight | Self::BottomRight => HorizontalAlign::Right,
        }
    }

    pub fn vertical(self) -> VerticalAlign {
        match self {
            Self::TopLeft | Self::TopCentre | Self::TopRight => VerticalAlign::Top,
            Self::CentreLeft | Self::Centre | Self::CentreRight => VerticalAlign::Centre,
            Self::BottomLeft | Self::BottomCentre | Self::BottomRight => VerticalAlign::Bottom,
        }
    }
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::TopLeft => "top-left",
            Self::TopCentre => "top-centre",
            Self::TopRight => "top-right",
            Self::CentreLeft => "centre-left",
            Self::Centre => "centre",
            Self::CentreRight => "centre-right",
            Self::BottomLeft => "bottom-left",
            Self::BottomCentre => "bottom-centre",
            Self::BottomRight => "bottom-right",
        };
        write!(f, "{}", name)
    }
}

fn check_point(p: Point, field: &'static str) -> Result<(), FeatureError> {
    if p.is_finite() {
        Ok(())
    } else {
        Err(FeatureError::NonFinite { field })
    }
}

fn check_value(v: f64, field: &'static str) -> Result<(), FeatureError> {
    if v.is_finite() {
        Ok(())
    } else {
        Err(FeatureError::NonFinite { field })
    }
}

/// A straight line segment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "LineFields")]
pub struct Line {
    start: Point,
    end: Point,
    thickness: f64,
    #[serde(default)]
    purpose: Purpose,
}

impl Line {
    pub fn new(start: Point, end: Point, thickness: f64) -> Result<Self, FeatureError> {
        check_point(start, "start")?;
        check_point(end, "end")?;
        check_value(thickness, "thickness")?;
        if thickness < 0.0 {
            return Err(FeatureError::NegativeThickness { thickness });
        }
        Ok(Self::from_valid(start, end, thickness))
    }

    /// Inputs already known to be finite and non-negative.
    pub(crate) fn from_valid(start: Point, end: Point, thickness: f64) -> Self {
        debug_assert!(thickness >= 0.0);
        Self {
            start,
            end,
            thickness,
            purpose: Purpose::default(),
        }
    }

    pub fn with_purpose(mut self, purpose: Purpose) -> Self {
        self.purpose = purpose;
        self
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn end(&self) -> Point {
        self.end
    }

    pub fn thickness(&self) -> f64 {
        self.thickness
    }

    pub fn purpose(&self) -> Purpose {
        self.purpose
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Line(x1={:.2}, y1={:.2}, x2={:.2}, y2={:.2}, thickness={:.2}, purpose={})",
            self.start.x, self.start.y, self.end.x, self.end.y, self.thickness, self.purpose
        )
    }
}

/// A circle, typically a drill hole
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CircleFields")]
pub struct Circle {
    origin: Point,
    radius: f64,
    #[serde(default)]
    purpose: Purpose,
}

impl Circle {
    pub fn new(origin: Point, radius: f64) -> Result<Self, FeatureError> {
        check_point(origin, "origin")?;
        check_value(radius, "radius")?;
        if radius < 0.0 {
            return Err(FeatureError::NegativeRadius { radius });
        }
        Ok(Self::from_valid(origin, radius))
    }

    pub(crate) fn from_valid(origin: Point, radius: f64) -> Self {
        debug_assert!(radius >= 0.0);
        Self {
            origin,
            radius,
            purpose: Purpose::default(),
        }
    }

    pub fn with_purpose(mut self, purpose: Purpose) -> Self {
        self.purpose = purpose;
        self
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn purpose(&self) -> Purpose {
        self.purpose
    }
}

impl fmt::Display for Circle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Circle(x={:.2}, y={:.2}, r={:.2}, purpose={})",
            self.origin.x, self.origin.y, self.radius, self.purpose
        )
    }
}

/// Recognised text options
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextOptions {
    pub alignment: Alignment,
    /// Size in points
    pub size: f64,
    /// Radians, 0 for normal orientation
    pub rotation: f64,
}

impl Default for TextOptions {
    fn default() -> Self {
        Self {
            alignment: Alignment::default(),
            size: DEFAULT_TEXT_SIZE,
            rotation: 0.0,
        }
    }
}

/// Legend text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "TextFields")]
pub struct Text {
    origin: Point,
    text: String,
    alignment: Alignment,
    size: f64,
    rotation: f64,
    #[serde(default)]
    purpose: Purpose,
}

impl Text {
    pub fn new(
        origin: Point,
        text: impl Into<String>,
        options: TextOptions,
    ) -> Result<Self, FeatureError> {
        check_point(origin, "origin")?;
        check_value(options.size, "size")?;
        check_value(options.rotation, "rotation")?;
        Ok(Self::from_valid(origin, text.into(), options))
    }

    pub(crate) fn from_valid(origin: Point, text: String, options: TextOptions) -> Self {
        Self {
            origin,
            text,
            alignment: options.alignment,
            size: options.size,
            rotation: options.rotation,
            purpose: Purpose::default(),
        }
    }

    /// Cutout text is accepted but almost certainly a mistake; the
    /// classifier reports it.
    pub fn with_purpose(mut self, purpose: Purpose) -> Self {
        self.purpose = purpose;
        self
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn alignment(&self) -> Alignment {
        self.alignment
    }

    pub fn size(&self) -> f64 {
        self.size
    }

    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    pub fn purpose(&self) -> Purpose {
        self.purpose
    }
}

impl fmt::Display for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Text(x={:.2}, y={:.2}, size={:.2}, align={}, purpose={}, text={:?})",
            self.origin.x, self.origin.y, self.size, self.alignment, self.purpose, self.text
        )
    }
}

// Deserialized input goes through the validating constructors.

#[derive(Deserialize)]
struct LineFields {
    start: Point,
    end: Point,
    thickness: f64,
    #[serde(default)]
    purpose: Purpose,
}

impl TryFrom<LineFields> for Line {
    type Error = FeatureError;

    fn try_from(fields: LineFields) -> Result<Self, Self::Error> {
        Ok(Line::new(fields.start, fields.end, fields.thickness)?.with_purpose(fields.purpose))
    }
}

#[derive(Deserialize)]
struct CircleFields {
    origin: Point,
    radius: f64,
    #[serde(default)]
    purpose: Purpose,
}

impl TryFrom<CircleFields> for Circle {
    type Error = FeatureError;

    fn try_from(fields: CircleFields) -> Result<Self, Self::Error> {
        Ok(Circle::new(fields.origin, fields.radius)?.with_purpose(fields.purpose))
    }
}

#[derive(Deserialize)]
struct TextFields {
    origin: Point,
    text: String,
    #[serde(default)]
    alignment: Alignment,
    #[serde(default = "default_text_size")]
    size: f64,
    #[serde(default)]
    rotation: f64,
    #[serde(default)]
    purpose: Purpose,
}

fn default_text_size() -> f64 {
    DEFAULT_TEXT_SIZE
}

impl TryFrom<TextFields> for Text {
    type Error = FeatureError;

    fn try_from(fields: TextFields) -> Result<Self, Self::Error> {
        let options = TextOptions {
            alignment: fields.alignment,
            size: fields.size,
            rotation: fields.rotation,
        };
        Ok(Text::new(fields.origin, fields.text, options)?.with_purpose(fields.purpose))
    }
}

/// Any drawable element of a panel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Feature {
    Line(Line),
    Circle(Circle),
    Text(Text),
}

impl Feature {
    pub fn purpose(&self) -> Purpose {
        match self {
            Feature::Line(l) => l.purpose(),
            Feature::Circle(c) => c.purpose(),
            Feature::Text(t) => t.purpose(),
        }
    }

    pub fn with_purpose(self, purpose: Purpose) -> Self {
        match self {
            Feature::Line(l) => Feature::Line(l.with_purpose(purpose)),
            Feature::Circle(c) => Feature::Circle(c.with_purpose(purpose)),
            Feature::Text(t) => Feature::Text(t.with_purpose(purpose)),
        }
    }
}

impl From<Line> for Feature {
    fn from(value: Line) -> Self {
        Feature::Line(value)
    }
}

impl From<Circle> for Feature {
    fn from(value: Circle) -> Self {
        Feature::Circle(value)
    }
}

impl From<Text> for Feature {
    fn from(value: Text) -> Self {
        Feature::Text(value)
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Feature::Line(l) => l.fmt(f),
            Feature::Circle(c) => c.fmt(f),
            Feature::Text(t) => t.fmt(f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let line = Line::new(Point::new(0.0, 0.0), Point::new(1.0, 0.0), 0.1).unwrap();
        assert_eq!(line.purpose(), Purpose::Marking);

        let text = Text::new(Point::new(0.0, 0.0), "VCO", TextOptions::default()).unwrap();
        assert_eq!(text.size(), DEFAULT_TEXT_SIZE);
        assert_eq!(text.rotation(), 0.0);
        assert_eq!(text.alignment(), Alignment::TopLeft);
        assert_eq!(text.purpose(), Purpose::Marking);
    }

    #[test]
    fn test_negative_sizes_rejected() {
        let err = Line::new(Point::new(0.0, 0.0), Point::new(1.0, 1.0), -0.1).unwrap_err();
        assert_eq!(err, FeatureError::NegativeThickness { thickness: -0.1 });

        let err = Circle::new(Point::new(0.0, 0.0), -1.0).unwrap_err();
        assert_eq!(err, FeatureError::NegativeRadius { radius: -1.0 });
    }

    #[test]
    fn test_zero_sizes_allowed() {
        assert!(Line::new(Point::new(0.0, 0.0), Point::new(1.0, 1.0), 0.0).is_ok());
        assert!(Circle::new(Point::new(0.0, 0.0), 0.0).is_ok());
    }

    #[test]
    fn test_non_finite_rejected() {
        let err = Circle::new(Point::new(f64::NAN, 0.0), 1.0).unwrap_err();
        assert_eq!(err, FeatureError::NonFinite { field: "origin" });

        let opts = TextOptions {
            size: f64::INFINITY,
            ..TextOptions::default()
        };
        let err = Text::new(Point::new(0.0, 0.0), "x", opts).unwrap_err();
        assert_eq!(err, FeatureError::NonFinite { field: "size" });
    }

    #[test]
    fn test_alignment_parts_round_trip() {
        for a in Alignment::ALL {
            assert_eq!(Alignment::from_parts(a.vertical(), a.horizontal()), a);
        }
        assert_eq!(Alignment::BottomRight.horizontal(), HorizontalAlign::Right);
        assert_eq!(Alignment::CentreLeft.vertical(), VerticalAlign::Centre);
    }

    #[test]
    fn test_display() {
        let c = Circle::new(Point::new(7.5, 3.0), 1.6)
            .unwrap()
            .with_purpose(Purpose::Cutout);
        assert_eq!(c.to_string(), "Circle(x=7.50, y=3.00, r=1.60, purpose=cutout)");

        let t = Text::new(
            Point::new(20.32, 125.5),
            "FILTER",
            TextOptions {
                alignment: Alignment::Centre,
                size: 16.0,
                ..TextOptions::default()
            },
        )
        .unwrap();
        assert_eq!(
            Feature::from(t).to_string(),
            "Text(x=20.32, y=125.50, size=16.00, align=centre, purpose=marking, text=\"FILTER\")"
        );
    }

    #[test]
    fn test_feature_with_purpose() {
        let f: Feature = Circle::new(Point::new(1.0, 1.0), 1.0).unwrap().into();
        assert_eq!(f.purpose(), Purpose::Marking);
        let f = f.with_purpose(Purpose::Cutout);
        assert_eq!(f.purpose(), Purpose::Cutout);
        assert!(matches!(f, Feature::Circle(_)));
    }

    #[test]
    fn test_deserialize_rejects_invalid_geometry() {
        let err = serde_json::from_str::<Feature>(
            r#"{"kind":"line","start":{"x":0.0,"y":0.0},"end":{"x":1.0,"y":1.0},"thickness":-5.0}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("Line thickness must not be negative"));

        let err = serde_json::from_str::<Feature>(
            r#"{"kind":"circle","origin":{"x":2.0,"y":2.0},"radius":-3.0,"purpose":"cutout"}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("Circle radius must not be negative"));

        // JSON cannot spell infinity, so go through the field struct directly
        let fields = TextFields {
            origin: Point::new(1.0, 1.0),
            text: "X".to_string(),
            alignment: Alignment::Centre,
            size: f64::INFINITY,
            rotation: 0.0,
            purpose: Purpose::Marking,
        };
        assert_eq!(
            Text::try_from(fields),
            Err(FeatureError::NonFinite { field: "size" })
        );
    }

    #[test]
    fn test_deserialize_valid_text_uses_defaults() {
        let feature: Feature = serde_json::from_str(
            r#"{"kind":"text","origin":{"x":1.0,"y":2.0},"text":"CV"}"#,
        )
        .unwrap();
        let Feature::Text(text) = feature else {
            panic!("expected text");
        };
        assert_eq!(text.size(), DEFAULT_TEXT_SIZE);
        assert_eq!(text.alignment(), Alignment::TopLeft);
        assert_eq!(text.purpose(), Purpose::Marking);
    }
}
