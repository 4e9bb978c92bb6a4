//! Feature generation for a panel: outline and mounting holes, header and
//! footer legends, decorative fill, and the copper pour region.

use crate::feature::{Alignment, Circle, Feature, Line, Purpose, Text, TextOptions};
use frontpanel_core::{FeatureError, Point, Rect};
use frontpanel_formats::PanelFormat;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Stroke width of the board outline, in mm
pub const OUTLINE_THICKNESS: f64 = 0.1;

/// Header and footer text size, in points
pub const HEADER_FOOTER_TEXT_SIZE: f64 = 16.0;

pub const DEFAULT_FILL_COUNT: usize = 100;

/// Board outline (top, bottom, left, right) followed by one drill per
/// mounting hole. Everything is a cutout.
pub fn outline(format: &PanelFormat) -> Vec<Feature> {
    let edge = |a: Point, b: Point| -> Feature {
        Line::from_valid(a, b, OUTLINE_THICKNESS)
            .with_purpose(Purpose::Cutout)
            .into()
    };

    let mut features = vec![
        edge(format.top_left(), format.top_right()),
        edge(format.bottom_left(), format.bottom_right()),
        edge(format.top_left(), format.bottom_left()),
        edge(format.top_right(), format.bottom_right()),
    ];

    let radius = format.mounting_hole_diameter() / 2.0;
    features.extend(format.mounting_holes().into_iter().map(|centre| {
        Feature::from(Circle::from_valid(centre, radius).with_purpose(Purpose::Cutout))
    }));
    features
}

/// Centred legends at the header and footer anchors. Empty strings produce
/// nothing; the header comes first when both are present.
pub fn header_footer(format: &PanelFormat, header: &str, footer: &str) -> Vec<Feature> {
    let options = TextOptions {
        alignment: Alignment::Centre,
        size: HEADER_FOOTER_TEXT_SIZE,
        ..TextOptions::default()
    };

    [
        (header, format.header_location()),
        (footer, format.footer_location()),
    ]
    .into_iter()
    .filter(|(text, _)| !text.is_empty())
    .map(|(text, anchor)| Text::from_valid(anchor, text.to_string(), options).into())
    .collect()
}

/// Decorative fill parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FillOptions {
    /// Number of lines to draw
    pub count: usize,
    /// Line thicknesses to pick from, uniformly
    pub thicknesses: Vec<f64>,
}

impl Default for FillOptions {
    fn default() -> Self {
        Self {
            count: DEFAULT_FILL_COUNT,
            thicknesses: vec![0.0, 0.1, 0.2],
        }
    }
}

impl FillOptions {
    pub fn validate(&self) -> Result<(), FeatureError> {
        if self.thicknesses.is_empty() {
            return Err(FeatureError::EmptyThicknessSet);
        }
        for &thickness in &self.thicknesses {
            if !thickness.is_finite() {
                return Err(FeatureError::NonFinite { field: "thickness" });
            }
            if thickness < 0.0 {
                return Err(FeatureError::NegativeThickness { thickness });
            }
        }
        Ok(())
    }
}

/// Area the decorative fill may use: clear of the rails vertically and
/// inset by twice the horizontal fit on the left.
pub fn safe_interior(format: &PanelFormat) -> Rect {
    let fit = format.horizontal_fit();
    let end = format.rail_height_from_mounting_hole() + format.mounting_hole_bottom_y();
    Rect::from_corners(
        Point::new(fit * 2.0, end),
        Point::new(format.width(), format.height() - end),
    )
}

/// Random marking lines with both endpoints inside [`safe_interior`].
pub fn decorative_fill<R: Rng + ?Sized>(
    format: &PanelFormat,
    options: &FillOptions,
    rng: &mut R,
) -> Result<Vec<Feature>, FeatureError> {
    options.validate()?;

    let area = safe_interior(format);
    let random_point = |rng: &mut R| {
        Point::new(
            area.min.x + rng.random::<f64>() * area.width(),
            area.min.y + rng.random::<f64>() * area.height(),
        )
    };

    let mut features = Vec::with_capacity(options.count);
    for _ in 0..options.count {
        let start = random_point(&mut *rng);
        let end = random_point(&mut *rng);
        let thickness = options.thicknesses[rng.random_range(0..options.thicknesses.len())];
        features.push(Line::from_valid(start, end, thickness).into());
    }

    tracing::debug!(
        count = features.len(),
        "decorative fill generated for {}",
        format
    );
    Ok(features)
}

/// Copper region between the rails, spanning the toleranced outline
/// horizontally. Fabs expect at least one copper layer even on blank panels.
pub fn copper_pour(format: &PanelFormat) -> Rect {
    let rail = format.rail_height_from_mounting_hole();
    Rect::from_corners(
        Point::new(format.left_x(), format.mounting_hole_bottom_y() + rail),
        Point::new(format.right_x(), format.mounting_hole_top_y() - rail),
    )
}

/// What to put on a panel besides its outline
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutRequest {
    pub header: String,
    pub footer: String,
    /// `None` leaves the panel blank between the legends
    pub fill: Option<FillOptions>,
}

/// Every feature of one panel, in generation order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PanelLayout {
    pub format: PanelFormat,
    pub features: Vec<Feature>,
}

impl PanelLayout {
    /// Outline, then header/footer, then decorative fill.
    pub fn generate<R: Rng + ?Sized>(
        format: PanelFormat,
        request: &LayoutRequest,
        rng: &mut R,
    ) -> Result<Self, FeatureError> {
        let mut features = outline(&format);
        features.extend(header_footer(&format, &request.header, &request.footer));
        if let Some(fill) = &request.fill {
            features.extend(decorative_fill(&format, fill, rng)?);
        }

        tracing::info!(
            features = features.len(),
            "generated layout for {}",
            format
        );
        Ok(Self { format, features })
    }

    pub fn copper_pour(&self) -> Rect {
        copper_pour(&self.format)
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}
