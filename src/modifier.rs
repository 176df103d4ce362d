//! Modifier records and horizontal shift computation.

use crate::constants::MODIFIER_PADDING;
use crate::error::LayoutError;
use crate::glyph::{GlyphKind, GlyphMetrics};

/// An x-anchored mark owned by the group (e.g. an end barline).
///
/// Entries with a defined x shift in lockstep when the group's x moves;
/// entries without one are ignored by the shift.
#[derive(Debug, Clone)]
pub struct Modifier {
    pub kind: GlyphKind,
    pub x: Option<f64>,
    pub width: f64,
}

impl Modifier {
    pub fn new(kind: GlyphKind, x: Option<f64>, width: f64) -> Self {
        Self { kind, x, width }
    }
}

/// Shift every modifier with a defined x by `delta`. Widths are untouched.
pub(crate) fn shift_all(modifiers: &mut [Modifier], delta: f64) {
    for modifier in modifiers.iter_mut() {
        if let Some(x) = modifier.x.as_mut() {
            *x += delta;
        }
    }
}

/// Pixels to shift from the start of a stave past the prefix glyphs
/// `0..=index`.
///
/// `index == None` means "the last glyph in the sequence". When at least
/// one glyph contributed width, a fixed `vertical_bar_width + 10` padding
/// is added once after the loop — the gap before the first note. An empty
/// prefix shifts by exactly 0.
pub(crate) fn shift_after<G: GlyphMetrics>(
    glyphs: &[G],
    index: Option<usize>,
    vertical_bar_width: f64,
) -> Result<f64, LayoutError> {
    let last = match index {
        Some(i) if i >= glyphs.len() => {
            return Err(LayoutError::InvalidIndex {
                index: i,
                len: glyphs.len(),
            });
        }
        Some(i) => Some(i),
        None => glyphs.len().checked_sub(1),
    };

    let mut shift = 0.0;
    if let Some(last) = last {
        for glyph in &glyphs[..=last] {
            shift += glyph.width();
        }
    }

    if shift > 0.0 {
        shift += vertical_bar_width + MODIFIER_PADDING;
    }

    Ok(shift)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::glyph::PrefixGlyph;

    #[test]
    fn shift_after_empty_prefix_is_zero() {
        let glyphs: Vec<PrefixGlyph> = Vec::new();
        assert_eq!(shift_after(&glyphs, None, 10.0).unwrap(), 0.0);
    }

    #[test]
    fn shift_after_accumulates_and_pads_once() {
        let glyphs = vec![
            PrefixGlyph::new(GlyphKind::Clef, 32.0),
            PrefixGlyph::new(GlyphKind::KeySignature, 20.0),
            PrefixGlyph::new(GlyphKind::TimeSignature, 24.0),
        ];
        // Default index covers all three glyphs.
        assert_eq!(shift_after(&glyphs, None, 10.0).unwrap(), 32.0 + 20.0 + 24.0 + 10.0 + 10.0);
        // Explicit index stops after the clef.
        assert_eq!(shift_after(&glyphs, Some(0), 10.0).unwrap(), 32.0 + 10.0 + 10.0);
    }

    #[test]
    fn shift_after_rejects_out_of_range_index() {
        let glyphs = vec![PrefixGlyph::new(GlyphKind::Clef, 32.0)];
        assert!(matches!(
            shift_after(&glyphs, Some(1), 10.0),
            Err(LayoutError::InvalidIndex { index: 1, len: 1 })
        ));
    }

    #[test]
    fn shift_all_skips_unanchored_modifiers() {
        let mut modifiers = vec![
            Modifier::new(GlyphKind::Barline, Some(100.0), 1.0),
            Modifier::new(GlyphKind::Barline, None, 1.0),
        ];
        shift_all(&mut modifiers, -25.0);
        assert_eq!(modifiers[0].x, Some(75.0));
        assert_eq!(modifiers[1].x, None);
        assert_eq!(modifiers[0].width, 1.0);
    }
}
