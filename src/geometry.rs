//! Group geometry — spacing, margins, stave count, and derived coordinates.
//!
//! Single source of truth for the vertical layout of a stave group. Height
//! is re-derived on every mutation that affects it; reads never recompute.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::constants::UNITS_PER_STAVE;
use crate::error::LayoutError;
use crate::options::{GroupOptions, StaveConfig};

/// Derived bounding box of a group.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

/// Geometry state of a stave group: origin, width, options, per-stave
/// config, and the derived height.
#[derive(Debug, Clone)]
pub struct GroupGeometry {
    x: f64,
    y: f64,
    width: f64,
    options: GroupOptions,
    stave_config: Vec<StaveConfig>,
    height: f64,
}

impl GroupGeometry {
    pub fn new(x: f64, y: f64, width: f64, options: GroupOptions) -> Self {
        let mut geometry = Self {
            x,
            y,
            width,
            options,
            stave_config: Vec::new(),
            height: 0.0,
        };
        geometry.reset_staves();
        geometry
    }

    /// Rebuild per-stave config to all-visible and re-derive the height.
    fn reset_staves(&mut self) {
        let count = self.options.num_staves;
        self.stave_config = vec![StaveConfig::default(); count];
        self.height = (count as f64 * UNITS_PER_STAVE + self.options.space_above_units)
            * self.options.spacing_unit_px;
        debug!(
            "stave geometry reset: {} staves, height {:.1}px",
            count, self.height
        );
    }

    // ── Accessors ───────────────────────────────────────────────────

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn stave_count(&self) -> usize {
        self.options.num_staves
    }

    pub fn spacing_unit_px(&self) -> f64 {
        self.options.spacing_unit_px
    }

    pub fn options(&self) -> &GroupOptions {
        &self.options
    }

    /// Derived group height. Never recomputes; mutations keep it current.
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Bounding box, derived on read so it can never go stale.
    pub fn bounds(&self) -> Bounds {
        Bounds {
            x: self.x,
            y: self.y,
            w: self.width,
            h: self.height,
        }
    }

    // ── Mutators ────────────────────────────────────────────────────

    pub(crate) fn set_x(&mut self, x: f64) {
        self.x = x;
    }

    pub(crate) fn set_y(&mut self, y: f64) {
        self.y = y;
    }

    pub(crate) fn set_width(&mut self, width: f64) {
        self.width = width;
    }

    /// Set the stave count. Negative input is rejected with `InvalidCount`;
    /// per-stave config is rebuilt all-visible and the height re-derived.
    pub fn set_stave_count(&mut self, count: i64) -> Result<&mut Self, LayoutError> {
        if count < 0 {
            return Err(LayoutError::InvalidCount(count));
        }
        self.options.num_staves = count as usize;
        self.reset_staves();
        Ok(self)
    }

    /// Set the pixel height of one staff-line unit and re-derive the height.
    pub fn set_spacing_unit_px(&mut self, spacing: f64) -> &mut Self {
        self.options.spacing_unit_px = spacing;
        self.reset_staves();
        self
    }

    /// Set the top margin in staff-line units and re-derive the height.
    pub fn set_space_above_units(&mut self, units: f64) -> &mut Self {
        self.options.space_above_units = units;
        self.reset_staves();
        self
    }

    /// Set the bottom margin in staff-line units.
    pub fn set_space_below_units(&mut self, units: f64) -> &mut Self {
        self.options.space_below_units = units;
        self
    }

    // ── Stave position resolver ─────────────────────────────────────

    /// Half of the configured line thickness when strokes are thick enough
    /// to need centering; hairline strokes (≤ 1) get no correction.
    fn thickness_correction(&self) -> f64 {
        if self.options.line_thickness > 1.0 {
            self.options.line_thickness
        } else {
            0.0
        }
    }

    /// Absolute y-coordinate of stave `index`.
    ///
    /// `index == stave_count` is valid and gives the bottom-margin row, not
    /// an actual stave. Anything larger is `InvalidIndex`. Pure function of
    /// current state.
    pub fn y_for_stave(&self, index: usize) -> Result<f64, LayoutError> {
        let count = self.options.num_staves;
        if index > count {
            return Err(LayoutError::InvalidIndex {
                index,
                len: count + 1,
            });
        }
        let spacing = self.options.spacing_unit_px;
        let headroom = self.options.space_above_units;
        Ok(self.y + (index as f64 + headroom) * spacing - self.thickness_correction() / 2.0)
    }

    /// Bottom of the group: the bottom-margin row plus the below-group
    /// margin. Group-trailing content sits flush against this.
    pub fn bottom_y(&self) -> f64 {
        let count = self.options.num_staves;
        let spacing = self.options.spacing_unit_px;
        let headroom = self.options.space_above_units;
        let last_row = self.y + (count as f64 + headroom) * spacing
            - self.thickness_correction() / 2.0;
        last_row + self.options.space_below_units * spacing
    }

    // ── Per-stave visibility config ─────────────────────────────────

    pub fn config_for_staves(&self) -> &[StaveConfig] {
        &self.stave_config
    }

    pub fn is_visible(&self, index: usize) -> Result<bool, LayoutError> {
        self.stave_config
            .get(index)
            .map(|config| config.visible)
            .ok_or(LayoutError::InvalidIndex {
                index,
                len: self.stave_config.len(),
            })
    }

    /// Configure one stave. Out-of-range indices are a config error.
    pub fn set_config_for_stave(
        &mut self,
        index: usize,
        config: StaveConfig,
    ) -> Result<&mut Self, LayoutError> {
        if index >= self.stave_config.len() {
            return Err(LayoutError::StaveConfig(format!(
                "stave number {} must be within the range of the number of staves in the group ({})",
                index,
                self.stave_config.len()
            )));
        }
        self.stave_config[index] = config;
        Ok(self)
    }

    /// Configure every stave at once. The slice must have exactly one entry
    /// per stave; `None` entries keep the existing config.
    pub fn set_config_for_staves(
        &mut self,
        configs: Vec<Option<StaveConfig>>,
    ) -> Result<&mut Self, LayoutError> {
        if configs.len() != self.stave_config.len() {
            return Err(LayoutError::StaveConfig(format!(
                "the configuration array length ({}) must match the number of staves in the group ({})",
                configs.len(),
                self.stave_config.len()
            )));
        }
        for (slot, config) in self.stave_config.iter_mut().zip(configs) {
            if let Some(config) = config {
                *slot = config;
            }
        }
        Ok(self)
    }
}
