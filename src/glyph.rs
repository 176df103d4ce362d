//! Prefix glyphs (clef, key signature, time signature) and their metrics.

use serde::{Deserialize, Serialize};

use crate::constants::*;

/// What kind of mark a glyph or modifier represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GlyphKind {
    Clef,
    KeySignature,
    TimeSignature,
    Barline,
}

/// Width seam for anything the modifier layout accumulates.
///
/// External glyph providers implement this; [`PrefixGlyph`] is the
/// in-crate carrier for pre-measured widths.
pub trait GlyphMetrics {
    fn width(&self) -> f64;
}

/// A prefix glyph drawn before the musical content of a stave.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrefixGlyph {
    pub kind: GlyphKind,
    pub width: f64,
}

impl PrefixGlyph {
    pub fn new(kind: GlyphKind, width: f64) -> Self {
        Self { kind, width }
    }

    /// A clef glyph at the default width.
    pub fn clef() -> Self {
        Self::new(GlyphKind::Clef, CLEF_WIDTH)
    }

    /// A key signature glyph sized for `accidentals` sharps or flats.
    pub fn key_signature(accidentals: u32) -> Self {
        Self::new(
            GlyphKind::KeySignature,
            accidentals as f64 * KEY_SIG_ACCIDENTAL_WIDTH,
        )
    }

    /// A time signature glyph at the default width.
    pub fn time_signature() -> Self {
        Self::new(GlyphKind::TimeSignature, TIME_SIG_WIDTH)
    }
}

impl GlyphMetrics for PrefixGlyph {
    fn width(&self) -> f64 {
        self.width
    }
}
