//! Configuration structs for stave groups.
//!
//! Every threshold and padding the layout engine consults lives here with
//! an explicit default; there is no hidden module-level state.

use serde::{Deserialize, Serialize};

use crate::constants::*;

/// Construction-time configuration for a [`StaveGroup`](crate::StaveGroup).
///
/// Vertical quantities (`space_above_units`, `space_below_units`) are in
/// staff-line units and are converted to pixels through `spacing_unit_px`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupOptions {
    /// Number of staves the group starts with.
    pub num_staves: usize,
    /// Pixel height of one staff-line unit.
    pub spacing_unit_px: f64,
    /// Margin above the whole group, in staff-line units.
    pub space_above_units: f64,
    /// Margin below the whole group, in staff-line units.
    pub space_below_units: f64,
    /// Stroke width of a staff line. Values above 1 are treated as thick
    /// strokes and stave baselines are corrected by half the thickness so
    /// the stroke is visually centered.
    pub line_thickness: f64,
    /// Width of a vertical barline, part of the post-prefix padding.
    pub vertical_bar_width: f64,
    /// Baseline x from which prefix glyph widths accumulate.
    pub glyph_start_x: f64,
}

impl Default for GroupOptions {
    fn default() -> Self {
        Self {
            num_staves: 1,
            spacing_unit_px: SPACING_UNIT_PX,
            space_above_units: SPACE_ABOVE_UNITS,
            space_below_units: SPACE_BELOW_UNITS,
            line_thickness: STAFF_LINE_WIDTH,
            vertical_bar_width: VERTICAL_BAR_WIDTH,
            glyph_start_x: GLYPH_START_X,
        }
    }
}

/// Per-stave configuration within a group.
///
/// Rebuilt to all-visible whenever the stave count changes. An invisible
/// stave still occupies vertical space; it is only skipped by the draw
/// pass, so y-positions stay stable when visibility toggles.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaveConfig {
    pub visible: bool,
}

impl Default for StaveConfig {
    fn default() -> Self {
        Self { visible: true }
    }
}

/// Font used for group-level text such as measure numbers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FontInfo {
    pub family: String,
    pub size: f64,
    pub weight: String,
}

impl Default for FontInfo {
    fn default() -> Self {
        Self {
            family: "sans-serif".into(),
            size: 8.0,
            weight: String::new(),
        }
    }
}
