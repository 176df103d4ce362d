//! Stave group controller — public mutators, surface propagation, and the
//! draw pass.

use log::{debug, trace};

use crate::constants::TEXT_COLOR;
use crate::error::LayoutError;
use crate::geometry::{Bounds, GroupGeometry};
use crate::glyph::PrefixGlyph;
use crate::modifier::{self, Modifier};
use crate::options::{FontInfo, GroupOptions, StaveConfig};
use crate::stave::{Stave, StaveRenderer};
use crate::surface::{SaveGuard, SharedSurface};

/// A vertically stacked set of staves sharing one horizontal span.
///
/// Geometry stays mutable after construction: x, y, width, and the stave
/// count can change any number of times between draw passes, and every
/// mutator leaves the group in a fully consistent state.
pub struct StaveGroup {
    geometry: GroupGeometry,
    glyphs: Vec<PrefixGlyph>,
    modifiers: Vec<Modifier>,
    staves: Vec<Box<dyn StaveRenderer>>,
    surface: Option<SharedSurface>,
    font: FontInfo,
    measure: Option<u32>,
}

impl StaveGroup {
    pub fn new(x: f64, y: f64, width: f64, options: GroupOptions) -> Self {
        Self {
            geometry: GroupGeometry::new(x, y, width, options),
            glyphs: Vec::new(),
            modifiers: Vec::new(),
            staves: Vec::new(),
            surface: None,
            font: FontInfo::default(),
            measure: None,
        }
    }

    // ── Accessors ───────────────────────────────────────────────────

    pub fn x(&self) -> f64 {
        self.geometry.x()
    }

    pub fn y(&self) -> f64 {
        self.geometry.y()
    }

    pub fn width(&self) -> f64 {
        self.geometry.width()
    }

    pub fn num_staves(&self) -> usize {
        self.geometry.stave_count()
    }

    pub fn height(&self) -> f64 {
        self.geometry.height()
    }

    pub fn bounds(&self) -> Bounds {
        self.geometry.bounds()
    }

    pub fn spacing_unit_px(&self) -> f64 {
        self.geometry.spacing_unit_px()
    }

    pub fn geometry(&self) -> &GroupGeometry {
        &self.geometry
    }

    pub fn modifiers(&self) -> &[Modifier] {
        &self.modifiers
    }

    pub fn glyphs(&self) -> &[PrefixGlyph] {
        &self.glyphs
    }

    /// Absolute y-coordinate of stave `index` (see
    /// [`GroupGeometry::y_for_stave`]).
    pub fn y_for_stave(&self, index: usize) -> Result<f64, LayoutError> {
        self.geometry.y_for_stave(index)
    }

    /// y-coordinate of the row below the last stave.
    pub fn bottom_stave_y(&self) -> Result<f64, LayoutError> {
        self.geometry.y_for_stave(self.geometry.stave_count())
    }

    /// Bottom of the group including the below-group margin.
    pub fn bottom_y(&self) -> f64 {
        self.geometry.bottom_y()
    }

    // ── Mutators ────────────────────────────────────────────────────

    /// Move the group horizontally. Every modifier with a defined x shifts
    /// by the same delta; glyph widths are untouched.
    pub fn set_x(&mut self, x: f64) -> &mut Self {
        let shift = x - self.geometry.x();
        self.geometry.set_x(x);
        modifier::shift_all(&mut self.modifiers, shift);
        debug!("group moved to x {:.1}, modifiers shifted by {:.1}", x, shift);
        self
    }

    /// Move the group vertically. Row y-values derive from y on every
    /// query, so nothing else needs shifting.
    pub fn set_y(&mut self, y: f64) -> &mut Self {
        self.geometry.set_y(y);
        self
    }

    /// Resize the group. Width moves the right edge only; the left-anchored
    /// prefix modifiers stay put.
    pub fn set_width(&mut self, width: f64) -> &mut Self {
        self.geometry.set_width(width);
        self
    }

    /// Change the stave count. Rebuilds per-stave config all-visible and
    /// drops materialized child renderers; they are rebuilt on the next
    /// draw pass.
    pub fn set_num_staves(&mut self, count: i64) -> Result<&mut Self, LayoutError> {
        self.geometry.set_stave_count(count)?;
        self.staves.clear();
        Ok(self)
    }

    /// Measure number rendered above the first stave. Zero clears it.
    pub fn set_measure(&mut self, measure: u32) -> &mut Self {
        self.measure = if measure > 0 { Some(measure) } else { None };
        self
    }

    pub fn set_font(&mut self, font: FontInfo) -> &mut Self {
        self.font = font;
        self
    }

    /// Configure one stave's visibility.
    pub fn set_config_for_stave(
        &mut self,
        index: usize,
        config: StaveConfig,
    ) -> Result<&mut Self, LayoutError> {
        self.geometry.set_config_for_stave(index, config)?;
        Ok(self)
    }

    /// Configure every stave's visibility at once; `None` entries keep the
    /// existing config.
    pub fn set_config_for_staves(
        &mut self,
        configs: Vec<Option<StaveConfig>>,
    ) -> Result<&mut Self, LayoutError> {
        self.geometry.set_config_for_staves(configs)?;
        Ok(self)
    }

    // ── Prefix glyphs and modifiers ─────────────────────────────────

    pub fn add_glyph(&mut self, glyph: PrefixGlyph) -> &mut Self {
        self.glyphs.push(glyph);
        self
    }

    pub fn add_modifier(&mut self, modifier: Modifier) -> &mut Self {
        self.modifiers.push(modifier);
        self
    }

    /// Pixels to shift past the prefix glyphs `0..=index`; `None` means the
    /// last glyph. An empty prefix shifts by exactly 0.
    pub fn modifier_x_shift(&self, index: Option<usize>) -> Result<f64, LayoutError> {
        modifier::shift_after(
            &self.glyphs,
            index,
            self.geometry.options().vertical_bar_width,
        )
    }

    /// Absolute x of the first note-head: the glyph baseline plus the shift
    /// past the whole prefix.
    pub fn note_start_x(&self) -> Result<f64, LayoutError> {
        Ok(self.geometry.x()
            + self.geometry.options().glyph_start_x
            + self.modifier_x_shift(None)?)
    }

    // ── Surface propagation ─────────────────────────────────────────

    /// Attach the shared drawing surface and forward it to every
    /// materialized child that takes one. Children without the capability
    /// are skipped, not errored.
    pub fn attach_surface(&mut self, surface: SharedSurface) -> &mut Self {
        for (i, stave) in self.staves.iter_mut().enumerate() {
            if !stave.attach_surface(&surface) {
                debug!("stave {} does not take a drawing surface, skipped", i);
            }
        }
        self.surface = Some(surface);
        self
    }

    pub fn surface(&self) -> Option<&SharedSurface> {
        self.surface.as_ref()
    }

    /// Install a caller-provided renderer for one row. The group positions
    /// it during the draw pass and forwards the surface if it takes one.
    pub fn set_stave_renderer(
        &mut self,
        index: usize,
        mut renderer: Box<dyn StaveRenderer>,
    ) -> Result<&mut Self, LayoutError> {
        let count = self.geometry.stave_count();
        if index >= count {
            return Err(LayoutError::InvalidIndex { index, len: count });
        }
        self.materialize_staves();
        if let Some(surface) = self.surface.as_ref() {
            renderer.attach_surface(surface);
        }
        self.staves[index] = renderer;
        Ok(self)
    }

    /// Build default renderers for any rows that lack one, forwarding the
    /// surface to each.
    fn materialize_staves(&mut self) {
        let count = self.geometry.stave_count();
        while self.staves.len() < count {
            let mut stave = Stave::new(
                self.geometry.x(),
                self.geometry.y(),
                self.geometry.width(),
                self.geometry.options(),
            );
            if let Some(surface) = self.surface.as_ref() {
                stave.attach_surface(surface);
            }
            self.staves.push(Box::new(stave));
        }
        self.staves.truncate(count);
    }

    // ── Draw pass ───────────────────────────────────────────────────

    /// Render every visible stave in ascending index order, then the
    /// measure number when one is set.
    ///
    /// Fails with `NoDrawSurface` before anything is rendered when no
    /// surface is attached. Each row's draw call runs inside a
    /// save/restore bracket; a failed row leaves earlier rows rendered and
    /// the surface state at the last restore.
    pub fn draw(&mut self) -> Result<(), LayoutError> {
        let surface = self
            .surface
            .as_ref()
            .cloned()
            .ok_or(LayoutError::NoDrawSurface)?;

        self.materialize_staves();

        let x = self.geometry.x();
        let width = self.geometry.width();
        let count = self.geometry.stave_count();

        for index in 0..count {
            if !self.geometry.is_visible(index)? {
                trace!("stave {} hidden, skipped", index);
                continue;
            }
            let y = self.geometry.y_for_stave(index)?;
            self.staves[index].set_span(x, y, width);

            trace!("drawing stave {} at y {:.1}", index, y);
            let _bracket = SaveGuard::new(&surface);
            self.staves[index].draw()?;
        }

        if let Some(measure) = self.measure {
            let label = measure.to_string();
            let y = self.geometry.y_for_stave(0)? - 8.0;
            let _bracket = SaveGuard::new(&surface);
            let mut surface = surface.borrow_mut();
            let text_width = surface.measure_text(&label, &self.font);
            surface.text(x - text_width / 2.0, y, &label, &self.font, TEXT_COLOR);
        }

        Ok(())
    }
}
