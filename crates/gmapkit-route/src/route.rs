//! Drawable map route.
//!
//! [`GMapRoute`] wraps the geographic [`MapRoute`] with everything needed to
//! put it on screen: the projected points supplied by the owning overlay, the
//! path built from them, the stroke and the visibility/hover state.
//!
//! Behaviour is split across sibling modules by concern:
//! - [`crate::visibility`]: showing and hiding, with host notifications
//! - [`crate::restore`]: two-phase snapshot restore
//! - [`crate::lifecycle`]: teardown
//! - [`crate::render`]: drawing

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use gmapkit_core::{LocalPoint, MapRoute, PointLatLng, Shared};
use lyon::math::point;

use crate::geometry::{self, RoutePath};
use crate::hit_test;
use crate::host::{OverlayHandle, OverlayHost};
use crate::stroke::{default_stroke, StrokeStyle};
use crate::visibility::Visibility;

#[derive(Debug)]
pub struct GMapRoute {
    base: MapRoute,
    local_points: Vec<LocalPoint>,
    stroke: Arc<StrokeStyle>,
    path: Option<RoutePath>,
    pub(crate) visibility: Visibility,
    /// Whether input dispatch should consider this route. Not enforced here.
    pub is_hit_test_visible: bool,
    pub(crate) is_mouse_over: bool,
    pub(crate) overlay: Option<OverlayHandle>,
    pub(crate) restored_local_points: Option<Vec<LocalPoint>>,
    pub(crate) disposed: bool,
}

impl GMapRoute {
    pub fn new(name: impl Into<String>) -> Self {
        Self::from_base(MapRoute::new(name))
    }

    pub fn with_points(
        name: impl Into<String>,
        points: impl IntoIterator<Item = PointLatLng>,
    ) -> Self {
        Self::from_base(MapRoute::with_points(name, points))
    }

    pub(crate) fn from_base(base: MapRoute) -> Self {
        Self {
            base,
            local_points: Vec::new(),
            stroke: default_stroke(),
            path: None,
            visibility: Visibility::Visible,
            is_hit_test_visible: false,
            is_mouse_over: false,
            overlay: None,
            restored_local_points: None,
            disposed: false,
        }
    }

    pub fn name(&self) -> &str {
        self.base.name()
    }

    /// Geographic side of the route.
    pub fn base(&self) -> &MapRoute {
        &self.base
    }

    /// Point-editing access to the geographic points.
    ///
    /// Projected points are not touched; the overlay reprojects on its next pass.
    pub fn base_mut(&mut self) -> &mut MapRoute {
        &mut self.base
    }

    pub fn local_points(&self) -> &[LocalPoint] {
        &self.local_points
    }

    /// Replaces the projected points and rebuilds the path.
    pub fn set_local_points(&mut self, points: impl IntoIterator<Item = LocalPoint>) {
        if self.disposed {
            tracing::warn!("Ignoring local point update on disposed route '{}'", self.name());
            return;
        }
        self.local_points.clear();
        self.local_points.extend(points);
        self.rebuild_path();
    }

    pub fn push_local_point(&mut self, point: LocalPoint) {
        if self.disposed {
            tracing::warn!("Ignoring local point update on disposed route '{}'", self.name());
            return;
        }
        self.local_points.push(point);
        self.rebuild_path();
    }

    pub fn clear_local_points(&mut self) {
        if self.disposed {
            tracing::warn!("Ignoring local point update on disposed route '{}'", self.name());
            return;
        }
        self.local_points.clear();
        self.rebuild_path();
    }

    pub(crate) fn local_points_mut(&mut self) -> &mut Vec<LocalPoint> {
        &mut self.local_points
    }

    /// Rebuilds the path from the current projected points.
    pub fn rebuild_path(&mut self) {
        if self.disposed {
            return;
        }
        geometry::rebuild_path(&mut self.path, &self.local_points);
    }

    /// The path as of the last rebuild, `None` before the first one.
    pub fn path(&self) -> Option<&RoutePath> {
        self.path.as_ref()
    }

    pub(crate) fn take_path(&mut self) -> Option<RoutePath> {
        self.path.take()
    }

    /// Whether the view-space point lies on the stroked outline of the route.
    pub fn is_inside(&self, x: f32, y: f32) -> bool {
        match &self.path {
            Some(path) => hit_test::outline_contains(path, &self.stroke, point(x, y)),
            None => false,
        }
    }

    pub fn stroke(&self) -> &StrokeStyle {
        &self.stroke
    }

    /// Gives this route its own stroke.
    pub fn set_stroke(&mut self, stroke: StrokeStyle) {
        self.stroke = Arc::new(stroke);
    }

    /// Shares an existing stroke between routes.
    pub fn set_shared_stroke(&mut self, stroke: Arc<StrokeStyle>) {
        self.stroke = stroke;
    }

    /// Mutable stroke access, copying first if the stroke is shared.
    pub fn stroke_mut(&mut self) -> &mut StrokeStyle {
        Arc::make_mut(&mut self.stroke)
    }

    /// Goes back to the process-wide default stroke.
    pub fn reset_stroke(&mut self) {
        self.stroke = default_stroke();
    }

    pub fn uses_default_stroke(&self) -> bool {
        Arc::ptr_eq(&self.stroke, &default_stroke())
    }

    pub fn is_mouse_over(&self) -> bool {
        self.is_mouse_over
    }

    /// Hover state, set by the UI layer.
    pub fn set_mouse_over(&mut self, value: bool) {
        self.is_mouse_over = value;
    }

    /// Associates the route with its host without taking ownership of it.
    pub fn attach_overlay<H: OverlayHost + 'static>(&mut self, host: &Shared<H>) {
        let host: Rc<RefCell<dyn OverlayHost>> = host.clone();
        self.overlay = Some(Rc::downgrade(&host));
    }

    pub fn detach_overlay(&mut self) {
        self.overlay = None;
    }

    /// Whether a host is attached and still alive.
    pub fn has_overlay(&self) -> bool {
        self.host().is_some()
    }

    pub(crate) fn host(&self) -> Option<Rc<RefCell<dyn OverlayHost>>> {
        self.overlay.as_ref().and_then(|weak| weak.upgrade())
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }
}
