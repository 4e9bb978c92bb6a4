//! Intellijel 1U module panel format.
//!
//! Based on <https://intellijel.com/support/1u-technical-specifications/>.
//! Shares pitch, hole size and rails with Eurorack; only the height and the
//! extra-hole threshold differ.

use crate::eurorack;
use crate::table::{FormatSpec, RightHoleRule};

pub const PANEL_HEIGHT_1U: f64 = 39.65;
pub const MOUNTING_HOLE_BOTTOM_Y_1U: f64 = 3.00;
pub const MOUNTING_HOLE_TOP_Y_1U: f64 = PANEL_HEIGHT_1U - 3.00;
pub const EXTRA_MOUNTING_HOLES_THRESHOLD: u32 = 6;

pub const SPEC: FormatSpec = FormatSpec {
    name: "intellijel",
    pitch: eurorack::HP,
    height: PANEL_HEIGHT_1U,
    mounting_hole_bottom_y: MOUNTING_HOLE_BOTTOM_Y_1U,
    mounting_hole_top_y: MOUNTING_HOLE_TOP_Y_1U,
    mounting_hole_diameter: eurorack::MOUNTING_HOLE_DIAMETER,
    mounting_holes_left_offset: eurorack::MOUNTING_HOLES_LEFT_OFFSET,
    right_hole_rule: RightHoleRule::PitchFromLeft { units_back: 3 },
    extra_mounting_holes_threshold: EXTRA_MOUNTING_HOLES_THRESHOLD,
    horizontal_fit: 0.25,
    corner_radius: 0.0,
    rail_height_from_mounting_hole: eurorack::RAIL_HEIGHT_FROM_MOUNTING_HOLE,
};
