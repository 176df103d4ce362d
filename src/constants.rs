//! Default geometry constants (all in pixels / SVG user units).

// ── Stave dimensions ────────────────────────────────────────────────
pub(crate) const SPACING_UNIT_PX: f64 = 10.0; // one staff-line unit
pub(crate) const UNITS_PER_STAVE: f64 = 5.0; // units spanned by 5 staff lines
pub(crate) const SPACE_ABOVE_UNITS: f64 = 4.0; // top margin, in staff-line units
pub(crate) const SPACE_BELOW_UNITS: f64 = 4.0; // bottom margin, in staff-line units
pub(crate) const STAFF_LINE_WIDTH: f64 = 0.8;

// ── Prefix glyph widths ─────────────────────────────────────────────
pub(crate) const CLEF_WIDTH: f64 = 32.0;
pub(crate) const KEY_SIG_ACCIDENTAL_WIDTH: f64 = 10.0; // per sharp/flat
pub(crate) const TIME_SIG_WIDTH: f64 = 24.0;
pub(crate) const VERTICAL_BAR_WIDTH: f64 = 10.0;
pub(crate) const MODIFIER_PADDING: f64 = 10.0; // gap before the first note
pub(crate) const GLYPH_START_X: f64 = 5.0;

// ── Colors ──────────────────────────────────────────────────────────
pub(crate) const STAFF_COLOR: &str = "#555555";
pub(crate) const TEXT_COLOR: &str = "#555555";
