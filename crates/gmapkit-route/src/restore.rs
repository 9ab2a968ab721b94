//! Two-phase restore of a route from a snapshot.
//!
//! A route's projected points may only be placed once the whole object graph
//! around it (overlay, control, sibling routes) has been rebuilt, and graphs
//! are not rebuilt in a guaranteed order. Restore therefore happens in two
//! passes driven by the graph owner:
//!
//! 1. [`GMapRoute::restore`] builds the route from the snapshot's geographic
//!    fields and visibility and only *holds* the projected points.
//! 2. [`GMapRoute::finalize_restore`] moves the held points into place once
//!    everything else exists.
//!
//! Snapshots store view-space points, so a restore after the view changed
//! yields points for the old view until the overlay reprojects the route.

use chrono::{DateTime, Utc};
use gmapkit_core::{LocalPoint, MapRoute, Result};
use serde::{Deserialize, Serialize};

use crate::route::GMapRoute;
use crate::visibility::Visibility;

fn default_visible() -> bool {
    true
}

/// Persisted state of a route.
///
/// The stroke is not part of it; restored routes start with the default stroke.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteSnapshot {
    #[serde(flatten)]
    pub route: MapRoute,
    #[serde(default = "default_visible")]
    pub visible: bool,
    #[serde(default)]
    pub local_points: Option<Vec<LocalPoint>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saved_at: Option<DateTime<Utc>>,
}

impl RouteSnapshot {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl GMapRoute {
    /// Captures the persisted fields of the route.
    pub fn snapshot(&self) -> RouteSnapshot {
        RouteSnapshot {
            route: self.base().clone(),
            visible: self.is_visible(),
            local_points: Some(self.local_points().to_vec()),
            saved_at: Some(Utc::now()),
        }
    }

    /// Restore phase 1.
    ///
    /// Geographic fields and visibility are applied immediately; the
    /// projected points wait in a holder for [`GMapRoute::finalize_restore`].
    /// No overlay is attached yet, so nothing is notified.
    pub fn restore(snapshot: RouteSnapshot) -> Self {
        let RouteSnapshot {
            route,
            visible,
            local_points,
            ..
        } = snapshot;

        let mut restored = Self::from_base(route);
        restored.visibility = Visibility::from_bool(visible);
        restored.restored_local_points = local_points;

        tracing::debug!(
            "Restored route '{}' ({} geo points, {} held local points)",
            restored.name(),
            restored.base().len(),
            restored
                .restored_local_points
                .as_ref()
                .map_or(0, |points| points.len())
        );
        restored
    }

    /// Restore phase 2, run once the whole graph has been resolved.
    ///
    /// Appends the held points in order and releases the holder. A missing
    /// holder leaves the projected points as they are. Calling this before
    /// [`GMapRoute::restore`], or twice for one snapshot, is up to the caller
    /// to avoid.
    pub fn finalize_restore(&mut self) {
        let held = self.restored_local_points.take().unwrap_or_default();
        let geo_len = self.base().len();

        let local_points = self.local_points_mut();
        local_points.reserve(geo_len.saturating_sub(local_points.len()));
        local_points.extend(held);

        self.rebuild_path();
        tracing::debug!(
            "Finalized restore of route '{}' with {} local points",
            self.name(),
            self.local_points().len()
        );
    }

    /// Whether phase 2 still has points to place.
    pub fn has_pending_restore(&self) -> bool {
        self.restored_local_points.is_some()
    }
}
