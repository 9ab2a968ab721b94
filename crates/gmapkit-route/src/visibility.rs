//! Shown/hidden state of a route and the host notifications it triggers.

use std::fmt;

use crate::host::OverlayHost;
use crate::route::GMapRoute;

/// Visibility state of a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Visible,
    Hidden,
}

impl Visibility {
    pub fn from_bool(visible: bool) -> Self {
        if visible {
            Self::Visible
        } else {
            Self::Hidden
        }
    }

    pub fn is_visible(self) -> bool {
        self == Self::Visible
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Visible => write!(f, "visible"),
            Self::Hidden => write!(f, "hidden"),
        }
    }
}

impl GMapRoute {
    pub fn is_visible(&self) -> bool {
        self.visibility.is_visible()
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    /// Shows or hides the route.
    ///
    /// Setting the current value does nothing. Otherwise the state changes
    /// first, then an attached host is asked to:
    /// - reproject the route when it becomes visible, since hidden routes are
    ///   not kept in sync with the view;
    /// - drop hover state and restore the cursor when a hovered route hides;
    /// - redraw, unless it is holding invalidation.
    pub fn set_visible(&mut self, visible: bool) {
        let next = Visibility::from_bool(visible);
        if next == self.visibility {
            return;
        }
        self.visibility = next;
        tracing::debug!("Route '{}' is now {}", self.name(), next);

        let Some(host) = self.host() else {
            return;
        };
        let Ok(mut host) = host.try_borrow_mut() else {
            tracing::warn!(
                "Overlay of route '{}' is busy; skipping visibility notifications",
                self.name()
            );
            return;
        };

        match next {
            Visibility::Visible => host.update_route_local_position(self),
            Visibility::Hidden => self.leave_hover(&mut *host),
        }

        if !host.hold_invalidation() {
            host.invalidate();
        }
    }

    fn leave_hover(&mut self, host: &mut dyn OverlayHost) {
        if self.is_mouse_over || host.is_mouse_over_route() {
            self.is_mouse_over = false;
            host.set_mouse_over_route(false);
            host.restore_cursor_on_leave();
        }
    }
}
