use gmapkit_core::Rgba;
use gmapkit_route::{GMapRoute, SkiaCanvas, StrokeStyle};

use crate::common::{corner_route, local, RecordingContext};

#[test]
fn test_visible_route_is_stroked_once() {
    let route = corner_route();
    let mut ctx = RecordingContext::default();
    route.on_render(&mut ctx);
    assert_eq!(ctx.strokes, vec![(4, 5.0)]);
}

#[test]
fn test_hidden_route_draws_nothing() {
    let mut route = corner_route();
    route.set_visible(false);
    let mut ctx = RecordingContext::default();
    route.on_render(&mut ctx);
    assert!(ctx.strokes.is_empty());
}

#[test]
fn test_route_without_points_draws_nothing() {
    let route = GMapRoute::new("empty");
    let mut ctx = RecordingContext::default();
    route.on_render(&mut ctx);
    assert!(ctx.strokes.is_empty());
}

#[test]
fn test_render_uses_current_stroke() {
    let mut route = corner_route();
    route.stroke_mut().width = 9.0;
    let mut ctx = RecordingContext::default();
    route.on_render(&mut ctx);
    assert_eq!(ctx.strokes, vec![(4, 9.0)]);
}

#[test]
fn test_skia_canvas_paints_route_pixels() {
    let mut route = GMapRoute::new("line");
    route.set_local_points(local(&[(10, 20), (90, 20)]));
    route.set_stroke(StrokeStyle::new(6.0, Rgba::MIDNIGHT_BLUE));

    let mut canvas = SkiaCanvas::new(100, 40).unwrap();
    route.on_render(&mut canvas);

    assert_eq!(canvas.alpha_at(50, 20), 255);
    assert_eq!(canvas.alpha_at(50, 35), 0);
    assert_eq!(canvas.alpha_at(5, 20), 0);
    assert_eq!(canvas.alpha_at(500, 500), 0);
}

#[test]
fn test_skia_canvas_skips_single_point() {
    let mut route = GMapRoute::new("dot");
    route.set_local_points(local(&[(10, 10)]));
    let mut canvas = SkiaCanvas::new(20, 20).unwrap();
    route.on_render(&mut canvas);
    assert!(canvas.pixmap().pixels().iter().all(|p| p.alpha() == 0));
}

#[test]
fn test_zero_sized_canvas_is_rejected() {
    assert!(SkiaCanvas::new(0, 10).is_none());
}
