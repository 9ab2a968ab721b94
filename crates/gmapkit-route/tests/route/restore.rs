use gmapkit_core::{shared, LocalPoint, MapRoute, PointLatLng};
use gmapkit_route::{
    restore_overlay, GMapRoute, OverlayRestore, OverlaySnapshot, RouteSnapshot,
};
use proptest::prelude::*;

use crate::common::{local, RecordingHost};

fn snapshot(visible: bool, local_points: Option<Vec<LocalPoint>>) -> RouteSnapshot {
    RouteSnapshot {
        route: MapRoute::with_points(
            "saved",
            vec![PointLatLng::new(1.0, 2.0), PointLatLng::new(3.0, 4.0)],
        ),
        visible,
        local_points,
        saved_at: None,
    }
}

#[test]
fn test_phase_one_holds_points_back() {
    let route = GMapRoute::restore(snapshot(false, Some(local(&[(1, 1), (2, 2)]))));
    assert_eq!(route.name(), "saved");
    assert_eq!(route.base().len(), 2);
    assert!(!route.is_visible());
    assert!(route.local_points().is_empty());
    assert!(route.has_pending_restore());
}

#[test]
fn test_finalize_places_points_in_order() {
    let points = local(&[(5, 5), (1, 9), (7, 3)]);
    let mut route = GMapRoute::restore(snapshot(true, Some(points.clone())));
    route.finalize_restore();

    assert_eq!(route.local_points(), points.as_slice());
    assert!(route.is_visible());
    assert!(!route.has_pending_restore());
    assert!(route.path().is_some());
}

#[test]
fn test_finalize_without_points_is_empty() {
    let mut route = GMapRoute::restore(snapshot(true, None));
    route.finalize_restore();
    assert!(route.local_points().is_empty());
    assert!(!route.is_inside(0.0, 0.0));
}

#[test]
fn test_missing_fields_use_defaults() {
    let snap = RouteSnapshot::from_json(r#"{"name":"bare"}"#).unwrap();
    assert!(snap.visible);
    assert!(snap.local_points.is_none());

    let mut route = GMapRoute::restore(snap);
    route.finalize_restore();
    assert!(route.is_visible());
    assert!(route.local_points().is_empty());
}

#[test]
fn test_null_local_points_accepted() {
    let snap =
        RouteSnapshot::from_json(r#"{"name":"n","visible":false,"local_points":null}"#).unwrap();
    let mut route = GMapRoute::restore(snap);
    route.finalize_restore();
    assert!(route.local_points().is_empty());
}

#[test]
fn test_malformed_json_is_error() {
    assert!(RouteSnapshot::from_json("{ not json").is_err());
}

#[test]
fn test_snapshot_through_json() {
    let mut original = GMapRoute::with_points("trip", vec![PointLatLng::new(54.0, 25.0)]);
    original.set_local_points(local(&[(12, 34)]));
    original.set_visible(false);

    let json = original.snapshot().to_json().unwrap();
    let mut restored = GMapRoute::restore(RouteSnapshot::from_json(&json).unwrap());
    restored.finalize_restore();

    assert_eq!(restored.base(), original.base());
    assert_eq!(restored.local_points(), original.local_points());
    assert_eq!(restored.is_visible(), original.is_visible());
}

#[test]
fn test_restored_route_uses_default_stroke() {
    let mut original = GMapRoute::new("styled");
    original.stroke_mut().width = 12.0;
    let restored = GMapRoute::restore(original.snapshot());
    assert!(restored.uses_default_stroke());
}

#[test]
fn test_overlay_restore_runs_passes_in_order() {
    let mut a = GMapRoute::with_points("a", vec![PointLatLng::new(0.0, 0.0)]);
    a.set_local_points(local(&[(0, 0), (10, 0)]));
    let mut b = GMapRoute::new("b");
    b.set_local_points(local(&[(5, 5)]));
    b.set_visible(false);

    let json = OverlaySnapshot::capture("routes", [&a, &b]).to_json().unwrap();

    let host = shared(RecordingHost::default());
    let mut pending = OverlayRestore::begin(OverlaySnapshot::from_json(&json).unwrap());
    assert_eq!(pending.id(), "routes");
    assert!(pending.routes().iter().all(|r| r.local_points().is_empty()));

    pending.attach_overlay(&host);
    let restored = pending.finish();

    assert_eq!(restored.id, "routes");
    assert_eq!(restored.routes.len(), 2);
    assert_eq!(restored.routes[0].name(), "a");
    assert_eq!(restored.routes[0].local_points(), a.local_points());
    assert_eq!(restored.routes[1].local_points(), b.local_points());
    assert!(!restored.routes[1].is_visible());
    assert!(restored.routes.iter().all(GMapRoute::has_overlay));
    // Restoring never talks to the host.
    assert_eq!(host.borrow().total_requests(), 0);
}

#[test]
fn test_restore_overlay_in_one_call() {
    let mut a = GMapRoute::new("a");
    a.set_local_points(local(&[(0, 0), (10, 0)]));
    let mut b = GMapRoute::new("b");
    b.set_local_points(local(&[(3, 4), (5, 6), (7, 8)]));
    b.set_visible(false);
    let snapshot = OverlaySnapshot::capture("layer", [&a, &b]);

    let host = shared(RecordingHost::default());
    let restored = restore_overlay(snapshot, &host);

    assert_eq!(restored.id, "layer");
    let names: Vec<&str> = restored.routes.iter().map(GMapRoute::name).collect();
    assert_eq!(names, ["a", "b"]);
    assert_eq!(restored.routes[0].local_points(), a.local_points());
    assert_eq!(restored.routes[1].local_points(), b.local_points());
    assert!(!restored.routes[1].is_visible());
    assert!(restored.routes.iter().all(|r| r.has_overlay() && !r.has_pending_restore()));
    assert!(restored.routes[0].is_inside(5.0, 0.0));
    assert_eq!(host.borrow().total_requests(), 0);
}

#[test]
fn test_overlay_snapshot_parse_error_has_context() {
    let err = OverlaySnapshot::from_json("[]").unwrap_err();
    assert!(err.to_string().contains("Failed to parse overlay snapshot"));
}

proptest! {
    #[test]
    fn prop_restore_round_trip(
        raw in proptest::collection::vec((-10_000i64..10_000, -10_000i64..10_000), 0..64),
        visible in any::<bool>(),
    ) {
        let points = local(&raw);
        let mut route = GMapRoute::restore(snapshot(visible, Some(points.clone())));
        route.finalize_restore();

        prop_assert_eq!(route.local_points(), points.as_slice());
        prop_assert_eq!(route.is_visible(), visible);
    }
}
