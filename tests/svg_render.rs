//! Rendering tests — draw stave groups into an SvgSurface and check the
//! output document.

use std::cell::RefCell;
use std::rc::Rc;

use pretty_assertions::assert_eq;

use stavelib::{
    render_group_to_svg, GroupOptions, LayoutError, SharedSurface, StaveConfig, StaveGroup,
    StaveRenderer, SvgSurface,
};

fn group_with(num_staves: usize) -> StaveGroup {
    let options = GroupOptions {
        num_staves,
        ..GroupOptions::default()
    };
    StaveGroup::new(0.0, 0.0, 400.0, options)
}

#[test]
fn renders_five_lines_per_stave() {
    let mut group = group_with(3);
    let svg = render_group_to_svg(&mut group).unwrap();

    assert!(svg.starts_with("<svg"), "output should be SVG");
    assert!(svg.contains("</svg>"), "SVG should be closed");
    assert_eq!(svg.matches("<line").count(), 15);

    // Rows land on the documented y-coordinates, top to bottom.
    assert!(svg.contains(r#"y1="40.0""#));
    assert!(svg.contains(r#"y1="50.0""#));
    assert!(svg.contains(r#"y1="60.0""#));
}

#[test]
fn draw_without_surface_fails_before_rendering() {
    let mut group = group_with(2);
    assert!(matches!(group.draw(), Err(LayoutError::NoDrawSurface)));
}

#[test]
fn hidden_staves_are_laid_out_but_not_drawn() {
    let mut group = group_with(3);
    group
        .set_config_for_stave(1, StaveConfig { visible: false })
        .unwrap();

    let svg = render_group_to_svg(&mut group).unwrap();

    // Two visible staves of five lines each.
    assert_eq!(svg.matches("<line").count(), 10);
    // The hidden row still occupies vertical space: row 0 starts at 40 and
    // row 2 at its usual 60, reaching down to 100.
    assert!(svg.contains(r#"y1="40.0""#));
    assert!(svg.contains(r#"y1="100.0""#));
}

#[test]
fn each_stave_draw_is_bracketed() {
    let mut group = group_with(4);
    let svg = render_group_to_svg(&mut group).unwrap();

    assert_eq!(svg.matches("<g>").count(), 4);
    assert_eq!(svg.matches("</g>").count(), 4);
}

#[test]
fn measure_number_renders_above_the_first_stave() {
    let mut group = group_with(1);
    group.set_measure(12).set_font(stavelib::FontInfo {
        family: "serif".into(),
        size: 12.0,
        weight: "bold".into(),
    });

    let svg = render_group_to_svg(&mut group).unwrap();
    assert!(svg.contains(">12</text>"));
    assert!(svg.contains(r#"font-family="serif" font-size="12" font-weight="bold""#));

    // Clearing the measure removes the text element.
    group.set_measure(0);
    let svg = render_group_to_svg(&mut group).unwrap();
    assert!(!svg.contains("<text"));
}

/// Renderer with its own output path: declines the shared surface.
struct SilentRenderer;

impl StaveRenderer for SilentRenderer {
    fn set_span(&mut self, _x: f64, _y: f64, _width: f64) {}

    fn draw(&mut self) -> Result<(), LayoutError> {
        Ok(())
    }
}

#[test]
fn renderers_without_surface_capability_are_skipped_not_errored() {
    let mut group = group_with(2);
    let surface = Rc::new(RefCell::new(SvgSurface::new(400.0, 200.0)));
    let shared: SharedSurface = surface.clone();
    group.attach_surface(shared);
    assert!(group.surface().is_some());

    group
        .set_stave_renderer(0, Box::new(SilentRenderer))
        .unwrap();

    group.draw().unwrap();

    // Only the default renderer for row 1 emitted lines.
    let svg = surface.borrow().build();
    assert_eq!(svg.matches("<line").count(), 5);
    // Both rows were bracketed.
    assert_eq!(svg.matches("<g>").count(), 2);
    assert_eq!(svg.matches("</g>").count(), 2);
}

#[test]
fn installing_a_renderer_out_of_range_is_invalid() {
    let mut group = group_with(2);
    let result = group.set_stave_renderer(2, Box::new(SilentRenderer));
    assert!(matches!(
        result,
        Err(LayoutError::InvalidIndex { index: 2, len: 2 })
    ));
}

#[test]
fn stave_count_change_invalidates_children_and_redraws() {
    let mut group = group_with(1);
    let svg = render_group_to_svg(&mut group).unwrap();
    assert_eq!(svg.matches("<line").count(), 5);

    group.set_num_staves(3).unwrap();
    let svg = render_group_to_svg(&mut group).unwrap();
    assert_eq!(svg.matches("<line").count(), 15);
}

#[test]
fn resizing_moves_the_right_edge_only() {
    let mut group = group_with(1);
    group.set_width(250.0);
    let svg = render_group_to_svg(&mut group).unwrap();
    assert!(svg.contains(r#"x1="0.0""#));
    assert!(svg.contains(r#"x2="250.0""#));
}
