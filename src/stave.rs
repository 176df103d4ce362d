//! Stave renderers — the per-row collaborators of a stave group.

use crate::constants::STAFF_COLOR;
use crate::error::LayoutError;
use crate::options::GroupOptions;
use crate::surface::SharedSurface;

/// One row of a stave group.
///
/// `attach_surface` is an opt-in capability: renderers that draw through a
/// shared surface store the handle and return `true`; renderers with their
/// own output path return `false` and the group skips them when forwarding
/// the handle. The group checks this once at attach time, not per draw.
pub trait StaveRenderer {
    /// Reposition the renderer over `[x, y, width]`.
    fn set_span(&mut self, x: f64, y: f64, width: f64);

    /// Offer a shared drawing surface. Returns whether it was accepted.
    fn attach_surface(&mut self, surface: &SharedSurface) -> bool {
        let _ = surface;
        false
    }

    /// Render one stave at the current span.
    fn draw(&mut self) -> Result<(), LayoutError>;
}

/// Default five-line stave renderer.
pub struct Stave {
    x: f64,
    y: f64,
    width: f64,
    spacing_unit_px: f64,
    line_thickness: f64,
    surface: Option<SharedSurface>,
}

impl Stave {
    pub fn new(x: f64, y: f64, width: f64, options: &GroupOptions) -> Self {
        Self {
            x,
            y,
            width,
            spacing_unit_px: options.spacing_unit_px,
            line_thickness: options.line_thickness,
            surface: None,
        }
    }
}

impl StaveRenderer for Stave {
    fn set_span(&mut self, x: f64, y: f64, width: f64) {
        self.x = x;
        self.y = y;
        self.width = width;
    }

    fn attach_surface(&mut self, surface: &SharedSurface) -> bool {
        self.surface = Some(surface.clone());
        true
    }

    fn draw(&mut self) -> Result<(), LayoutError> {
        let surface = self.surface.as_ref().ok_or(LayoutError::NoDrawSurface)?;
        let mut surface = surface.borrow_mut();
        for i in 0..5 {
            let line_y = self.y + i as f64 * self.spacing_unit_px;
            surface.line(
                self.x,
                line_y,
                self.x + self.width,
                line_y,
                STAFF_COLOR,
                self.line_thickness,
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::SvgSurface;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn stave_draws_five_lines() {
        let surface = Rc::new(RefCell::new(SvgSurface::new(400.0, 200.0)));
        let shared: SharedSurface = surface.clone();

        let mut stave = Stave::new(0.0, 40.0, 400.0, &GroupOptions::default());
        assert!(stave.attach_surface(&shared));
        stave.draw().unwrap();

        let out = surface.borrow().build();
        assert_eq!(out.matches("<line").count(), 5);
        assert!(out.contains(r#"y1="40.0""#));
        assert!(out.contains(r#"y1="80.0""#));
    }

    #[test]
    fn stave_without_surface_fails() {
        let mut stave = Stave::new(0.0, 0.0, 400.0, &GroupOptions::default());
        assert!(matches!(stave.draw(), Err(LayoutError::NoDrawSurface)));
    }
}
