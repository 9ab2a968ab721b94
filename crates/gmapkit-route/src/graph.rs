//! Restoring all routes of an overlay as one graph.
//!
//! The graph owner drives the passes in a fixed order: every route runs
//! phase 1, the overlay is wired up, then every route runs phase 2.
//!
//! ```rust,ignore
//! let mut pending = OverlayRestore::begin(OverlaySnapshot::from_json(&json)?);
//! pending.attach_overlay(&control);
//! let overlay = pending.finish();
//!
//! // Same passes in one call:
//! let overlay = restore_overlay(OverlaySnapshot::from_json(&json)?, &control);
//! ```

use anyhow::{Context, Result};
use gmapkit_core::Shared;
use serde::{Deserialize, Serialize};

use crate::host::OverlayHost;
use crate::restore::RouteSnapshot;
use crate::route::GMapRoute;

/// Persisted routes of one overlay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverlaySnapshot {
    pub id: String,
    #[serde(default)]
    pub routes: Vec<RouteSnapshot>,
}

impl OverlaySnapshot {
    pub fn capture<'a>(
        id: impl Into<String>,
        routes: impl IntoIterator<Item = &'a GMapRoute>,
    ) -> Self {
        Self {
            id: id.into(),
            routes: routes.into_iter().map(GMapRoute::snapshot).collect(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize overlay snapshot")
    }

    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse overlay snapshot")
    }
}

/// Routes of an overlay between the two restore passes.
#[derive(Debug)]
pub struct OverlayRestore {
    id: String,
    routes: Vec<GMapRoute>,
}

/// Fully restored routes of an overlay.
#[derive(Debug)]
pub struct RestoredOverlay {
    pub id: String,
    pub routes: Vec<GMapRoute>,
}

impl OverlayRestore {
    /// Runs phase 1 for every route, in snapshot order.
    pub fn begin(snapshot: OverlaySnapshot) -> Self {
        let OverlaySnapshot { id, routes } = snapshot;
        let routes: Vec<GMapRoute> = routes.into_iter().map(GMapRoute::restore).collect();
        tracing::debug!("Overlay '{}': phase 1 restored {} routes", id, routes.len());
        Self { id, routes }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn routes(&self) -> &[GMapRoute] {
        &self.routes
    }

    /// Associates every route with the resolved host.
    pub fn attach_overlay<H: OverlayHost + 'static>(&mut self, host: &Shared<H>) {
        for route in &mut self.routes {
            route.attach_overlay(host);
        }
    }

    /// Runs phase 2 for every route, in snapshot order.
    pub fn finish(self) -> RestoredOverlay {
        let Self { id, mut routes } = self;
        for route in &mut routes {
            route.finalize_restore();
        }
        tracing::debug!("Overlay '{}': restore finalized", id);
        RestoredOverlay { id, routes }
    }
}

/// Restores every route of `snapshot` and attaches them to `host`.
///
/// Runs phase 1 for all routes, attaches the host, then runs phase 2.
pub fn restore_overlay<H: OverlayHost + 'static>(
    snapshot: OverlaySnapshot,
    host: &Shared<H>,
) -> RestoredOverlay {
    let mut pending = OverlayRestore::begin(snapshot);
    pending.attach_overlay(host);
    pending.finish()
}
