//! Pulplogic 1U "tile" panel format.
//!
//! Based on <http://pulplogic.com/1u_tiles/>. The published dimensions are
//! imperial; they are converted once here.

use crate::eurorack;
use crate::table::{FormatSpec, RightHoleRule};
use frontpanel_core::units::inches;

pub const PANEL_HEIGHT_1U: f64 = inches(1.70);
pub const MOUNTING_HOLES_LEFT_OFFSET: f64 = inches(0.2);
pub const MOUNTING_HOLES_RIGHT_OFFSET: f64 = inches(0.2);
pub const MOUNTING_HOLE_BOTTOM_Y_1U: f64 = inches(0.118);
pub const MOUNTING_HOLE_TOP_Y_1U: f64 = PANEL_HEIGHT_1U - inches(0.118);
pub const MOUNTING_HOLE_DIAMETER: f64 = inches(0.125);
pub const EXTRA_MOUNTING_HOLES_THRESHOLD: u32 = 6;

/// Half the height of a Vector T-strut rail, not the Eurorack figure. With
/// this keep-out the recommended maximum PCB height (1.130") fits between
/// the rails.
pub const RAIL_HEIGHT_FROM_MOUNTING_HOLE: f64 = inches(0.291 / 2.0);

pub const SPEC: FormatSpec = FormatSpec {
    name: "pulplogic",
    pitch: eurorack::HP,
    height: PANEL_HEIGHT_1U,
    mounting_hole_bottom_y: MOUNTING_HOLE_BOTTOM_Y_1U,
    mounting_hole_top_y: MOUNTING_HOLE_TOP_Y_1U,
    mounting_hole_diameter: MOUNTING_HOLE_DIAMETER,
    mounting_holes_left_offset: MOUNTING_HOLES_LEFT_OFFSET,
    right_hole_rule: RightHoleRule::FromRightEdge {
        offset: MOUNTING_HOLES_RIGHT_OFFSET,
    },
    extra_mounting_holes_threshold: EXTRA_MOUNTING_HOLES_THRESHOLD,
    horizontal_fit: eurorack::HORIZONTAL_FIT,
    corner_radius: 0.0,
    rail_height_from_mounting_hole: RAIL_HEIGHT_FROM_MOUNTING_HOLE,
};
