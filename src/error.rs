//! Error kinds surfaced by the layout and draw operations.
//!
//! Everything here is raised synchronously to the immediate caller; nothing
//! is retried or swallowed inside the crate.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LayoutError {
    /// A stave or glyph index outside the valid range for the current
    /// configuration.
    #[error("index {index} out of range (valid range is 0..{len})")]
    InvalidIndex { index: usize, len: usize },

    /// A stave-count mutator was given a negative value.
    #[error("invalid stave count: {0}")]
    InvalidCount(i64),

    /// `draw()` was invoked with no drawing surface attached.
    #[error("no drawing surface attached; call attach_surface first")]
    NoDrawSurface,

    /// A malformed per-stave visibility configuration.
    #[error("stave config error: {0}")]
    StaveConfig(String),

    /// Layout snapshot could not be serialized.
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}
