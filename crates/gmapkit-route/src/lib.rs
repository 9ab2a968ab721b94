//! # GMapKit Route
//!
//! Drawing core for a single map route: an ordered polyline of geographic
//! points shown on an interactive map surface.
//!
//! ## Core Components
//!
//! - **Stroke**: shared immutable default style, per-route owned overrides
//! - **Geometry**: rebuilds the renderable path from projected points
//! - **Hit testing**: stroke-tolerant "is this point on the route" queries
//! - **Visibility**: shown/hidden transitions and host notifications
//! - **Restore**: two-phase snapshot restore, per route and per overlay
//! - **Lifecycle**: idempotent teardown
//! - **Render**: stroking onto a [`RenderContext`], tiny-skia included
//!
//! ## Architecture
//!
//! ```text
//! OverlayHost (map control, external)
//!   │  set_local_points()          ▲ invalidate / reproject / cursor
//!   ▼                              │
//! GMapRoute ── RoutePath ── hit_test / on_render
//!   └── RouteSnapshot ── OverlayRestore
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use gmapkit_route::GMapRoute;
//!
//! let mut route = GMapRoute::new("track");
//! route.set_local_points([(0, 0).into(), (10, 0).into(), (10, 10).into()]);
//! assert!(route.is_inside(5.0, 1.0));
//! ```

pub mod geometry;
pub mod graph;
pub mod host;
pub mod lifecycle;
pub mod render;
pub mod restore;
pub mod route;
pub mod stroke;
pub mod visibility;

pub use geometry::RoutePath;
pub use graph::{restore_overlay, OverlayRestore, OverlaySnapshot, RestoredOverlay};
pub use host::{OverlayHandle, OverlayHost};
pub use render::{RenderContext, SkiaCanvas};
pub use restore::RouteSnapshot;
pub use route::GMapRoute;
pub use stroke::{default_stroke, init_default_stroke, DashPattern, StrokeStyle};
pub use visibility::Visibility;
