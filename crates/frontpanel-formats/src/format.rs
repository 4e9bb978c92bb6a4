//! Panel format selection and derived geometry.

use crate::table::{FormatSpec, RightHoleRule, NARROW_PANEL_WIDTH};
use crate::{eurorack, intellijel, pulplogic};
use frontpanel_core::{PanelError, Point, Rect};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Supported panel standards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatKind {
    /// Doepfer A-100 3U
    #[default]
    Eurorack,
    /// Intellijel 1U
    Intellijel,
    /// Pulplogic 1U tiles
    Pulplogic,
}

impl FormatKind {
    pub const ALL: [FormatKind; 3] = [
        FormatKind::Eurorack,
        FormatKind::Intellijel,
        FormatKind::Pulplogic,
    ];

    /// The constant table for this standard
    pub fn spec(self) -> &'static FormatSpec {
        match self {
            FormatKind::Eurorack => &eurorack::SPEC,
            FormatKind::Intellijel => &intellijel::SPEC,
            FormatKind::Pulplogic => &pulplogic::SPEC,
        }
    }

    pub fn name(self) -> &'static str {
        self.spec().name
    }

    fn valid_names() -> String {
        Self::ALL
            .iter()
            .map(|k| k.name())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for FormatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for FormatKind {
    type Err = PanelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|k| k.name() == wanted)
            .ok_or_else(|| PanelError::UnknownFormat {
                name: s.to_string(),
                valid: Self::valid_names(),
            })
    }
}

/// A panel of a given standard and width.
///
/// Immutable once constructed; all accessors are pure functions of the
/// standard's constant table and the width in units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PanelFormat {
    kind: FormatKind,
    units: u32,
}

impl PanelFormat {
    /// Create a panel `units` wide (HP for all current standards).
    ///
    /// Widths below one unit are rejected rather than clamped.
    pub fn new(kind: FormatKind, units: i64) -> Result<Self, PanelError> {
        if units < 1 {
            return Err(PanelError::InvalidWidth { width: units });
        }
        let units = u32::try_from(units).map_err(|_| PanelError::WidthOutOfRange {
            width: units,
            max: u32::MAX,
        })?;
        if units == 1 {
            tracing::debug!(
                format = %kind,
                "1-unit panel: width forced to {:.2}mm, horizontal fit disabled",
                NARROW_PANEL_WIDTH
            );
        }
        Ok(Self { kind, units })
    }

    pub fn kind(&self) -> FormatKind {
        self.kind
    }

    pub fn spec(&self) -> &'static FormatSpec {
        self.kind.spec()
    }

    /// Width in format units
    pub fn units(&self) -> u32 {
        self.units
    }

    fn is_narrow(&self) -> bool {
        self.units == 1
    }

    /// Nominal X-dimension size. Does not include tolerance adjustments.
    pub fn width(&self) -> f64 {
        if self.is_narrow() {
            return NARROW_PANEL_WIDTH;
        }
        self.spec().pitch * f64::from(self.units)
    }

    /// Y-dimension size, eg. 128.5mm for Eurorack. Does not include
    /// tolerance adjustments.
    pub fn height(&self) -> f64 {
        self.spec().height
    }

    pub fn mounting_hole_diameter(&self) -> f64 {
        self.spec().mounting_hole_diameter
    }

    /// Panel tolerance in the horizontal axis.
    ///
    /// Applied only to the left and right outline edges, never to the X
    /// coordinates of holes or other features. Zero on 1-unit panels.
    pub fn horizontal_fit(&self) -> f64 {
        if self.is_narrow() {
            return 0.0;
        }
        self.spec().horizontal_fit
    }

    /// Radius of the panel corners; zero gives a four-line outline.
    pub fn corner_radius(&self) -> f64 {
        self.spec().corner_radius
    }

    /// How far the rail extends from a mounting hole centre towards the
    /// middle of the panel.
    pub fn rail_height_from_mounting_hole(&self) -> f64 {
        self.spec().rail_height_from_mounting_hole
    }

    pub fn mounting_hole_top_y(&self) -> f64 {
        self.spec().mounting_hole_top_y
    }

    pub fn mounting_hole_bottom_y(&self) -> f64 {
        self.spec().mounting_hole_bottom_y
    }

    /// Header text anchor, aligned with the top mounting screws
    pub fn header_location(&self) -> Point {
        Point::new(self.width() / 2.0, self.mounting_hole_top_y())
    }

    /// Footer text anchor, aligned with the bottom mounting screws
    pub fn footer_location(&self) -> Point {
        Point::new(self.width() / 2.0, self.mounting_hole_bottom_y())
    }

    /// Mounting hole centres: left column (bottom, top), then the right
    /// column (bottom, top) on panels wider than the standard's threshold.
    pub fn mounting_holes(&self) -> Vec<Point> {
        let spec = self.spec();
        let bottom = spec.mounting_hole_bottom_y;
        let top = spec.mounting_hole_top_y;

        // 1-unit panels are narrower than the left offset; centre the hole.
        let lhsx = if self.is_narrow() {
            self.width() / 2.0
        } else {
            spec.mounting_holes_left_offset
        };

        let mut holes = vec![Point::new(lhsx, bottom), Point::new(lhsx, top)];
        if self.units > spec.extra_mounting_holes_threshold {
            let rhsx = self.right_hole_x();
            holes.push(Point::new(rhsx, bottom));
            holes.push(Point::new(rhsx, top));
        }
        holes
    }

    fn right_hole_x(&self) -> f64 {
        let spec = self.spec();
        match spec.right_hole_rule {
            RightHoleRule::PitchFromLeft { units_back } => {
                let steps = f64::from(self.units.saturating_sub(units_back));
                spec.mounting_holes_left_offset + spec.pitch * steps
            }
            RightHoleRule::FromRightEdge { offset } => self.width() - offset,
        }
    }

    /// Left outline edge, adjusted for horizontal fit
    pub fn left_x(&self) -> f64 {
        self.horizontal_fit() / 2.0
    }

    /// Right outline edge, adjusted for horizontal fit
    pub fn right_x(&self) -> f64 {
        self.width() - self.horizontal_fit() / 2.0
    }

    pub fn top_y(&self) -> f64 {
        self.height()
    }

    pub fn bottom_y(&self) -> f64 {
        0.0
    }

    pub fn top_left(&self) -> Point {
        Point::new(self.left_x(), self.top_y())
    }

    pub fn top_right(&self) -> Point {
        Point::new(self.right_x(), self.top_y())
    }

    pub fn bottom_left(&self) -> Point {
        Point::new(self.left_x(), self.bottom_y())
    }

    pub fn bottom_right(&self) -> Point {
        Point::new(self.right_x(), self.bottom_y())
    }

    /// The toleranced board outline
    pub fn outline_rect(&self) -> Rect {
        Rect::from_corners(self.bottom_left(), self.top_right())
    }
}

impl fmt::Display for PanelFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}u ({:.2}mm x {:.2}mm)",
            self.kind,
            self.units,
            self.width(),
            self.height()
        )
    }
}
