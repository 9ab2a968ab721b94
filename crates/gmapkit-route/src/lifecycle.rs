//! Route teardown.

use crate::route::GMapRoute;

impl GMapRoute {
    /// Releases the path and all point storage.
    ///
    /// Only the first call does anything. Afterwards the route stays usable
    /// but inert: it renders nothing and hit-tests as empty.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.disposed = true;

        self.local_points_mut().clear();
        self.take_path();
        self.restored_local_points = None;
        self.overlay = None;
        self.base_mut().clear();

        tracing::debug!("Disposed route '{}'", self.name());
    }
}
