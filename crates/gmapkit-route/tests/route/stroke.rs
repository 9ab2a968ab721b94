use std::sync::Arc;

use gmapkit_core::{LineCap, LineJoin, Rgba};
use gmapkit_route::{default_stroke, DashPattern, GMapRoute, StrokeStyle};

#[test]
fn test_new_routes_share_default_stroke() {
    let a = GMapRoute::new("a");
    let b = GMapRoute::new("b");
    assert!(a.uses_default_stroke());
    assert!(b.uses_default_stroke());
    assert_eq!(a.stroke(), b.stroke());
    assert_eq!(a.stroke().width, 5.0);
    assert_eq!(a.stroke().line_join, LineJoin::Round);
    assert_eq!(a.stroke().line_cap, LineCap::Butt);
    assert_eq!(a.stroke().color, Rgba::new(25, 25, 112, 144));
}

#[test]
fn test_stroke_mut_copies_on_write() {
    let mut route = GMapRoute::new("custom");
    route.stroke_mut().width = 11.0;

    assert!(!route.uses_default_stroke());
    assert_eq!(route.stroke().width, 11.0);
    assert_eq!(default_stroke().width, 5.0);
    assert_eq!(GMapRoute::new("other").stroke().width, 5.0);
}

#[test]
fn test_shared_stroke_between_routes() {
    let shared = Arc::new(StrokeStyle::new(3.0, Rgba::MIDNIGHT_BLUE));
    let mut a = GMapRoute::new("a");
    let mut b = GMapRoute::new("b");
    a.set_shared_stroke(Arc::clone(&shared));
    b.set_shared_stroke(Arc::clone(&shared));

    a.stroke_mut().width = 7.0;
    assert_eq!(a.stroke().width, 7.0);
    assert_eq!(b.stroke().width, 3.0);
    assert_eq!(shared.width, 3.0);
}

#[test]
fn test_reset_stroke() {
    let mut route = GMapRoute::new("r");
    route.set_stroke(StrokeStyle::default().with_line_cap(LineCap::Round));
    assert!(!route.uses_default_stroke());
    route.reset_stroke();
    assert!(route.uses_default_stroke());
}

#[test]
fn test_skia_stroke_mirrors_style() {
    let style = StrokeStyle::new(4.0, Rgba::MIDNIGHT_BLUE)
        .with_line_join(LineJoin::Bevel)
        .with_line_cap(LineCap::Square)
        .with_dash(DashPattern::new([6.0, 2.0], 1.0).unwrap());
    let stroke = style.to_skia_stroke();
    assert_eq!(stroke.width, 4.0);
    assert_eq!(stroke.line_join, tiny_skia::LineJoin::Bevel);
    assert_eq!(stroke.line_cap, tiny_skia::LineCap::Square);
    assert!(stroke.dash.is_some());
    assert!(style.to_skia_paint().anti_alias);
}
