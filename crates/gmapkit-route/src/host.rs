//! Interface to the overlay/map control that owns a route.
//!
//! The route never draws, projects or changes the cursor itself. It asks its
//! host to, through this trait, and only while the host is still alive.

use std::cell::RefCell;
use std::rc::Weak;

use crate::route::GMapRoute;

/// Requests a route issues to the surface it is drawn on.
///
/// Every method is a fire-and-forget hint; the route does not wait on, or
/// inspect the outcome of, any of them.
pub trait OverlayHost {
    /// Recompute the projected points of `route` for the current view.
    ///
    /// Implementations normally finish with [`GMapRoute::set_local_points`],
    /// which also rebuilds the route's path.
    fn update_route_local_position(&mut self, route: &mut GMapRoute);

    /// Schedule a redraw of the drawing surface.
    fn invalidate(&mut self);

    /// While true, routes must not request redraws on their own.
    fn hold_invalidation(&self) -> bool {
        false
    }

    /// Shared hover flag of the control.
    fn is_mouse_over_route(&self) -> bool {
        false
    }

    fn set_mouse_over_route(&mut self, _value: bool) {}

    /// Put the pointer back to its default shape.
    fn restore_cursor_on_leave(&mut self) {}
}

/// Non-owning association from a route to its host.
pub type OverlayHandle = Weak<RefCell<dyn OverlayHost>>;
