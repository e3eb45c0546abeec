use super::*;
use crate::foundation::core::Vec2;
use crate::foundation::math::{EPSILON, approx_eq};
use crate::render::record::{DrawCommand, RecordingRenderer};
use crate::render::view::ViewTransform;

fn setup() -> FrameSetup {
    FrameSetup {
        canvas_width: 300,
        canvas_height: 200,
        view: ViewTransform {
            center: Point::new(150.0, 100.0),
            pixels_per_unit: 50.0,
        },
        background: Palette::default().space,
    }
}

fn paint(basis: &Basis, handles: Option<HandleActivation>) -> RecordingRenderer {
    let style = StrokeStyle::default();
    let palette = Palette::default();
    let scene = Scene {
        basis,
        reference: &Basis::IDENTITY,
        extent: GridExtent { cols: 2, rows: 2 },
        setup: setup(),
        style: &style,
        palette: &palette,
        handles,
        cursor: CursorShape::Default,
    };
    let mut r = RecordingRenderer::new();
    scene.paint(&mut r).unwrap();
    r
}

#[test]
fn arrow_head_points_back_along_shaft() {
    let [tip, a, b] = arrow_head(Point::ORIGIN, Point::new(50.0, 0.0), 8.0).unwrap();
    assert_eq!(tip, Point::new(50.0, 0.0));
    assert!(a.x < 50.0 && b.x < 50.0);
    assert!(approx_eq(a.y, -b.y, EPSILON));
    assert!(approx_eq((tip - a).hypot(), 8.0, EPSILON));
    assert!(arrow_head(Point::ORIGIN, Point::ORIGIN, 8.0).is_none());
}

#[test]
fn paints_grids_arrows_in_order() {
    let r = paint(&Basis::IDENTITY, None);
    let palette = Palette::default();
    assert_eq!(r.frames(), 1);
    // 5 + 5 lines per grid.
    assert_eq!(r.segments_with_color(palette.reference_grid), 10);
    assert_eq!(r.segments_with_color(palette.grid), 10);
    assert_eq!(r.segments_with_color(palette.axis0), 1);
    assert_eq!(r.segments_with_color(palette.axis1), 1);

    let triangles = r
        .commands()
        .iter()
        .filter(|c| matches!(c, DrawCommand::Triangle { .. }))
        .count();
    assert_eq!(triangles, 2);
    assert!(
        !r.commands()
            .iter()
            .any(|c| matches!(c, DrawCommand::Point { .. }))
    );
    assert!(matches!(
        r.commands().first(),
        Some(DrawCommand::Segment { color, .. }) if *color == palette.reference_grid
    ));
}

#[test]
fn axis_lines_are_heavier() {
    let r = paint(&Basis::IDENTITY, None);
    let style = StrokeStyle::default();
    let palette = Palette::default();
    let heavy = r
        .commands()
        .iter()
        .filter(|c| {
            matches!(c, DrawCommand::Segment { color, stroke_weight, .. }
                if *color == palette.grid && *stroke_weight == style.grid_axis)
        })
        .count();
    assert_eq!(heavy, 2);
}

#[test]
fn arrow_tip_is_scaled_axis() {
    let basis = Basis::new(Vec2::new(2.0, 1.0), Vec2::new(0.0, -1.0));
    let r = paint(&basis, None);
    let palette = Palette::default();
    let tip = r.commands().iter().find_map(|c| match c {
        DrawCommand::Segment { to, color, .. } if *color == palette.axis0 => Some(*to),
        _ => None,
    });
    assert_eq!(tip, Some(Point::new(100.0, 50.0)));
}

#[test]
fn collapsed_axis_draws_no_arrow() {
    let basis = Basis::new(Vec2::ZERO, Vec2::new(0.0, 1.0));
    let r = paint(&basis, None);
    assert_eq!(r.segments_with_color(Palette::default().axis0), 0);
}

#[test]
fn hot_handle_is_highlighted() {
    let handles = HandleActivation {
        axis0: false,
        axis1: true,
    };
    let r = paint(&Basis::IDENTITY, Some(handles));
    let palette = Palette::default();
    let points: Vec<_> = r
        .commands()
        .iter()
        .filter_map(|c| match c {
            DrawCommand::Point { at, color, .. } => Some((*at, *color)),
            _ => None,
        })
        .collect();
    assert_eq!(
        points,
        vec![
            (Point::new(50.0, 0.0), palette.axis0),
            (Point::new(0.0, 50.0), palette.handle_hot),
        ]
    );
}
