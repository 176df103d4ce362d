//! stavelib — stave group layout and rendering library.
//!
//! Lays out a vertical group of musical staves sharing one horizontal span,
//! positions the prefix modifiers (clef, key signature, time signature,
//! barlines) drawn at the start of each stave, and drives draw calls
//! against an abstract 2D drawing surface.
//!
//! # Example
//! ```
//! use stavelib::{GroupOptions, StaveGroup, render_group_to_svg};
//!
//! let mut options = GroupOptions::default();
//! options.num_staves = 3;
//! let mut group = StaveGroup::new(0.0, 0.0, 400.0, options);
//!
//! assert_eq!(group.height(), (3.0 * 5.0 + 4.0) * 10.0);
//! let svg = render_group_to_svg(&mut group).unwrap();
//! assert!(svg.starts_with("<svg"));
//! ```

pub mod error;
pub mod geometry;
pub mod glyph;
pub mod group;
pub mod modifier;
pub mod options;
pub mod stave;
pub mod surface;

mod constants;

use std::cell::RefCell;
use std::rc::Rc;

use serde::Serialize;

pub use error::LayoutError;
pub use geometry::{Bounds, GroupGeometry};
pub use glyph::{GlyphKind, GlyphMetrics, PrefixGlyph};
pub use group::StaveGroup;
pub use modifier::Modifier;
pub use options::{FontInfo, GroupOptions, StaveConfig};
pub use stave::{Stave, StaveRenderer};
pub use surface::{DrawSurface, SaveGuard, SharedSurface, SvgSurface};

/// Render a group into a fresh [`SvgSurface`] sized to its bounds and
/// return the SVG document.
///
/// Convenience wrapper combining surface creation, attachment, and the
/// draw pass. The surface replaces any previously attached one.
pub fn render_group_to_svg(group: &mut StaveGroup) -> Result<String, LayoutError> {
    let bounds = group.bounds();
    let surface = Rc::new(RefCell::new(SvgSurface::new(
        bounds.x + bounds.w,
        group.bottom_y(),
    )));
    group.attach_surface(surface.clone());
    group.draw()?;
    let svg = surface.borrow().build();
    Ok(svg)
}

/// Snapshot of a group's computed geometry.
#[derive(Debug, Serialize)]
pub struct LayoutSnapshot {
    pub bounds: Bounds,
    pub stave_ys: Vec<f64>,
    pub bottom_y: f64,
}

/// Export a group's computed geometry as a JSON string.
/// Useful for inspecting layout without a drawing surface.
pub fn layout_to_json(group: &StaveGroup) -> Result<String, LayoutError> {
    let stave_ys = (0..group.num_staves())
        .map(|i| group.y_for_stave(i))
        .collect::<Result<Vec<f64>, LayoutError>>()?;
    let snapshot = LayoutSnapshot {
        bounds: group.bounds(),
        stave_ys,
        bottom_y: group.bottom_y(),
    };
    Ok(serde_json::to_string_pretty(&snapshot)?)
}
