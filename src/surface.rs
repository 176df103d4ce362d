//! Drawing surface abstraction and the SVG implementation.
//!
//! The group and its child staves share one surface by reference; the
//! surface carries mutable transform state, so every stave draw is
//! bracketed in a save/restore pair (see [`SaveGuard`]).

use std::cell::RefCell;
use std::rc::Rc;

use crate::options::FontInfo;

/// 2D drawing primitives consumed by the group and stave renderers.
pub trait DrawSurface {
    /// Push the current surface state (transform, clip).
    fn save(&mut self);
    /// Pop back to the most recently saved state.
    fn restore(&mut self);

    fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, color: &str, width: f64);
    fn rect(&mut self, x: f64, y: f64, w: f64, h: f64, fill: &str);
    fn text(&mut self, x: f64, y: f64, content: &str, font: &FontInfo, color: &str);

    /// Advance width of `content` in the given font, in pixels.
    fn measure_text(&self, content: &str, font: &FontInfo) -> f64;
}

/// A drawing surface shared by reference between a group and its staves.
/// Layout and rendering run on a single logical thread per group.
pub type SharedSurface = Rc<RefCell<dyn DrawSurface>>;

/// RAII save/restore bracket around one stave's draw call.
///
/// Saves on construction and restores on drop, so the surface state rolls
/// back to the last save even when the bracketed draw returns early.
pub struct SaveGuard {
    surface: SharedSurface,
}

impl SaveGuard {
    pub fn new(surface: &SharedSurface) -> Self {
        surface.borrow_mut().save();
        Self {
            surface: Rc::clone(surface),
        }
    }
}

impl Drop for SaveGuard {
    fn drop(&mut self) {
        self.surface.borrow_mut().restore();
    }
}

// ═══════════════════════════════════════════════════════════════════════
// SvgSurface
// ═══════════════════════════════════════════════════════════════════════

/// Drawing surface that accumulates SVG elements and produces the final
/// document string. Save/restore maps to `<g>` nesting.
pub struct SvgSurface {
    elements: Vec<String>,
    width: f64,
    height: f64,
    depth: usize,
}

impl SvgSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            elements: Vec::new(),
            width,
            height,
            depth: 0,
        }
    }

    /// Assemble the full SVG document. Open `<g>` brackets from unbalanced
    /// saves are closed so the output is always well-formed.
    pub fn build(&self) -> String {
        let mut svg = format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {} {}" width="{}" height="{}">"#,
            self.width, self.height, self.width, self.height
        );
        svg.push('\n');
        for el in &self.elements {
            svg.push_str("  ");
            svg.push_str(el);
            svg.push('\n');
        }
        for _ in 0..self.depth {
            svg.push_str("  </g>\n");
        }
        svg.push_str("</svg>\n");
        svg
    }
}

impl DrawSurface for SvgSurface {
    fn save(&mut self) {
        self.elements.push("<g>".into());
        self.depth += 1;
    }

    fn restore(&mut self) {
        if self.depth > 0 {
            self.elements.push("</g>".into());
            self.depth -= 1;
        }
    }

    fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, color: &str, width: f64) {
        self.elements.push(format!(
            r#"<line x1="{:.1}" y1="{:.1}" x2="{:.1}" y2="{:.1}" stroke="{}" stroke-width="{:.1}" stroke-linecap="round"/>"#,
            x1, y1, x2, y2, color, width
        ));
    }

    fn rect(&mut self, x: f64, y: f64, w: f64, h: f64, fill: &str) {
        self.elements.push(format!(
            r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" fill="{}"/>"#,
            x, y, w, h, fill
        ));
    }

    fn text(&mut self, x: f64, y: f64, content: &str, font: &FontInfo, color: &str) {
        let escaped = content
            .replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;");
        let weight = if font.weight.is_empty() {
            "normal"
        } else {
            font.weight.as_str()
        };
        self.elements.push(format!(
            r#"<text x="{:.1}" y="{:.1}" font-family="{}" font-size="{:.0}" font-weight="{}" fill="{}">{}</text>"#,
            x, y, font.family, font.size, weight, color, escaped
        ));
    }

    fn measure_text(&self, content: &str, font: &FontInfo) -> f64 {
        // Average-advance estimate; SVG has no font metrics of its own.
        content.chars().count() as f64 * font.size * 0.6
    }
}
