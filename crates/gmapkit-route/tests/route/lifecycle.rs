use gmapkit_core::{shared, PointLatLng};
use gmapkit_route::GMapRoute;

use crate::common::{corner_route, local, RecordingContext, RecordingHost};

#[test]
fn test_dispose_releases_everything() {
    let host = shared(RecordingHost::default());
    let mut route = corner_route();
    route.base_mut().push(PointLatLng::new(1.0, 1.0));
    route.attach_overlay(&host);

    route.dispose();

    assert!(route.is_disposed());
    assert!(route.local_points().is_empty());
    assert!(route.base().is_empty());
    assert!(route.path().is_none());
    assert!(!route.has_overlay());
}

#[test]
fn test_dispose_twice_is_noop() {
    let mut route = corner_route();
    route.dispose();
    route.dispose();
    assert!(route.is_disposed());
    assert!(route.path().is_none());
}

#[test]
fn test_disposed_route_is_inert() {
    let mut route = corner_route();
    route.dispose();

    assert!(!route.is_inside(5.0, 0.0));

    let mut ctx = RecordingContext::default();
    route.on_render(&mut ctx);
    assert!(ctx.strokes.is_empty());

    route.set_local_points(local(&[(0, 0), (10, 0)]));
    route.push_local_point((20, 0).into());
    route.clear_local_points();
    route.rebuild_path();
    assert!(route.local_points().is_empty());
    assert!(route.path().is_none());
}

#[test]
fn test_dispose_drops_pending_restore() {
    let mut route = GMapRoute::restore(corner_route().snapshot());
    assert!(route.has_pending_restore());
    route.dispose();
    assert!(!route.has_pending_restore());
}

#[test]
fn test_visibility_after_dispose_skips_host() {
    let host = shared(RecordingHost::default());
    let mut route = corner_route();
    route.attach_overlay(&host);
    route.dispose();

    route.set_visible(false);
    assert_eq!(host.borrow().total_requests(), 0);
}
