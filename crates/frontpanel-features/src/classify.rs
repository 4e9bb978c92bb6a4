//! Routing of features onto fabrication layers.

use crate::feature::{Feature, Purpose};
use frontpanel_core::Point;
use serde::Serialize;
use std::fmt;

/// Fabrication layer a feature is rendered onto
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Layer {
    /// Board edge / profile
    Outline,
    /// Drilled holes
    Drill,
    /// Top silkscreen
    Decoration,
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Outline => write!(f, "Outline"),
            Self::Drill => write!(f, "Drill"),
            Self::Decoration => write!(f, "Decoration"),
        }
    }
}

/// Layer for a single feature. Cutout circles drill, other cutouts go on
/// the outline, markings go on the decoration layer.
pub fn route(feature: &Feature) -> Layer {
    match (feature, feature.purpose()) {
        (_, Purpose::Marking) => Layer::Decoration,
        (Feature::Circle(_), Purpose::Cutout) => Layer::Drill,
        (Feature::Line(_) | Feature::Text(_), Purpose::Cutout) => Layer::Outline,
    }
}

/// Non-fatal anomaly found while classifying
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Diagnostic {
    /// Text on the outline layer is almost always a mistake
    CutoutText { text: String, origin: Point },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CutoutText { text, origin } => write!(
                f,
                "text feature {:?} at {} is in the outline layer; this is probably an error",
                text, origin
            ),
        }
    }
}

/// Features bucketed by layer, in input order within each bucket
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Classification {
    pub outline: Vec<Feature>,
    pub drill: Vec<Feature>,
    pub decoration: Vec<Feature>,
    pub diagnostics: Vec<Diagnostic>,
}

impl Classification {
    pub fn total(&self) -> usize {
        self.outline.len() + self.drill.len() + self.decoration.len()
    }

    fn push(&mut self, feature: Feature) {
        if let Feature::Text(text) = &feature {
            if text.purpose() == Purpose::Cutout {
                let diagnostic = Diagnostic::CutoutText {
                    text: text.text().to_string(),
                    origin: text.origin(),
                };
                tracing::warn!("{}", diagnostic);
                self.diagnostics.push(diagnostic);
            }
        }

        match route(&feature) {
            Layer::Outline => self.outline.push(feature),
            Layer::Drill => self.drill.push(feature),
            Layer::Decoration => self.decoration.push(feature),
        }
    }
}

pub fn classify(features: impl IntoIterator<Item = Feature>) -> Classification {
    let mut result = Classification::default();
    for feature in features {
        result.push(feature);
    }
    tracing::debug!(
        outline = result.outline.len(),
        drill = result.drill.len(),
        decoration = result.decoration.len(),
        "classified features"
    );
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feature::{Circle, Line, Text, TextOptions};

    fn line(purpose: Purpose) -> Feature {
        Line::new(Point::new(0.0, 0.0), Point::new(1.0, 1.0), 0.1)
            .unwrap()
            .with_purpose(purpose)
            .into()
    }

    fn circle(purpose: Purpose) -> Feature {
        Circle::new(Point::new(2.0, 2.0), 1.6)
            .unwrap()
            .with_purpose(purpose)
            .into()
    }

    fn text(purpose: Purpose) -> Feature {
        Text::new(Point::new(3.0, 3.0), "LFO", TextOptions::default())
            .unwrap()
            .with_purpose(purpose)
            .into()
    }

    #[test]
    fn test_routing_table() {
        assert_eq!(route(&line(Purpose::Cutout)), Layer::Outline);
        assert_eq!(route(&line(Purpose::Marking)), Layer::Decoration);
        assert_eq!(route(&circle(Purpose::Cutout)), Layer::Drill);
        assert_eq!(route(&circle(Purpose::Marking)), Layer::Decoration);
        assert_eq!(route(&text(Purpose::Cutout)), Layer::Outline);
        assert_eq!(route(&text(Purpose::Marking)), Layer::Decoration);
    }

    #[test]
    fn test_cutout_text_diagnostic() {
        let result = classify(vec![text(Purpose::Cutout)]);
        assert_eq!(result.outline.len(), 1);
        assert_eq!(
            result.diagnostics,
            vec![Diagnostic::CutoutText {
                text: "LFO".to_string(),
                origin: Point::new(3.0, 3.0),
            }]
        );
    }

    #[test]
    fn test_marking_text_has_no_diagnostic() {
        let result = classify(vec![text(Purpose::Marking)]);
        assert!(result.diagnostics.is_empty());
        assert_eq!(result.decoration.len(), 1);
    }

    #[test]
    fn test_empty_input() {
        let result = classify(Vec::new());
        assert_eq!(result, Classification::default());
        assert_eq!(result.total(), 0);
    }

    #[test]
    fn test_layer_display() {
        assert_eq!(Layer::Outline.to_string(), "Outline");
        assert_eq!(Layer::Drill.to_string(), "Drill");
        assert_eq!(Layer::Decoration.to_string(), "Decoration");
    }
}
