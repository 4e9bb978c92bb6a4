//! Constant tables describing a panel standard.

use serde::Serialize;

/// Physical width of a one-unit panel. The Doepfer specification gives
/// 5.00mm rather than one full pitch, leaving no room for a tolerance inset.
pub const NARROW_PANEL_WIDTH: f64 = 5.00;

/// Where the right-hand column of mounting holes sits on wide panels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case", tag = "rule")]
pub enum RightHoleRule {
    /// `left_offset + pitch * (units - units_back)`, measured from the left
    /// edge so the holes land on the rail's pitch grid.
    PitchFromLeft { units_back: u32 },
    /// `width - offset`, measured back from the right edge.
    FromRightEdge { offset: f64 },
}

/// Per-standard constants. Every derived panel quantity is a pure function
/// of one of these tables and the requested width.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FormatSpec {
    /// Lowercase identifier, also the CLI/config name
    pub name: &'static str,
    /// Horizontal pitch (mm per width unit)
    pub pitch: f64,
    /// Total panel height, not including tolerance adjustments
    pub height: f64,
    /// Y of the bottom row of mounting holes
    pub mounting_hole_bottom_y: f64,
    /// Y of the top row of mounting holes
    pub mounting_hole_top_y: f64,
    pub mounting_hole_diameter: f64,
    /// Distance of the first mounting hole from the left edge
    pub mounting_holes_left_offset: f64,
    pub right_hole_rule: RightHoleRule,
    /// Width (in units) beyond which a second column of holes is required
    pub extra_mounting_holes_threshold: u32,
    /// Tolerance removed from the outline width, split across both edges
    pub horizontal_fit: f64,
    /// Zero means square corners
    pub corner_radius: f64,
    /// How far the rail extends past a mounting hole centre, towards the
    /// middle of the panel. Defines the keep-out bands.
    pub rail_height_from_mounting_hole: f64,
}
