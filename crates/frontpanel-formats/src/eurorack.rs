//! Eurorack 3U module panel format as defined in the Doepfer A-100
//! specification.

use crate::table::{FormatSpec, RightHoleRule};

/// Total height of a Eurorack panel. This is NOT the Eurocard height, as the
/// latter does not use lipped rails.
pub const PANEL_HEIGHT_3U: f64 = 128.5;

/// Horizontal pitch in a Eurorack frame
pub const HP: f64 = 5.08;

pub const MOUNTING_HOLES_LEFT_OFFSET: f64 = 7.5;
pub const MOUNTING_HOLE_BOTTOM_Y_3U: f64 = 3.00;
pub const MOUNTING_HOLE_TOP_Y_3U: f64 = PANEL_HEIGHT_3U - 3.00;

/// M3 clearance
pub const MOUNTING_HOLE_DIAMETER: f64 = 3.2;

pub const HORIZONTAL_FIT: f64 = 0.25;

/// A safe figure for all known-used Eurorack rail types.
pub const RAIL_HEIGHT_FROM_MOUNTING_HOLE: f64 = 5.0;

pub const EXTRA_MOUNTING_HOLES_THRESHOLD: u32 = 8;

pub const SPEC: FormatSpec = FormatSpec {
    name: "eurorack",
    pitch: HP,
    height: PANEL_HEIGHT_3U,
    mounting_hole_bottom_y: MOUNTING_HOLE_BOTTOM_Y_3U,
    mounting_hole_top_y: MOUNTING_HOLE_TOP_Y_3U,
    mounting_hole_diameter: MOUNTING_HOLE_DIAMETER,
    mounting_holes_left_offset: MOUNTING_HOLES_LEFT_OFFSET,
    right_hole_rule: RightHoleRule::PitchFromLeft { units_back: 3 },
    extra_mounting_holes_threshold: EXTRA_MOUNTING_HOLES_THRESHOLD,
    horizontal_fit: HORIZONTAL_FIT,
    corner_radius: 0.0,
    rail_height_from_mounting_hole: RAIL_HEIGHT_FROM_MOUNTING_HOLE,
};
