//! # GMapKit
//!
//! Route overlays for interactive map controls:
//! - projected route paths rebuilt from screen-space points
//! - stroke-outline hit testing honoring width, joins, caps and dashes
//! - visibility changes that keep the owning overlay in sync
//! - two-phase restore of routes from persisted snapshots
//!
//! ## Architecture
//!
//! GMapKit is organized as a workspace with multiple crates:
//!
//! 1. **gmapkit-core** - Geographic and screen points, base routes, style enums, errors
//! 2. **gmapkit-settings** - Route settings loaded from TOML or JSON
//! 3. **gmapkit-route** - Drawable routes, hit testing, visibility, restore, rendering
//! 4. **gmapkit** - Facade that re-exports the crates and sets up logging

pub use gmapkit_core as core;
pub use gmapkit_route as route;
pub use gmapkit_settings as settings;

pub use gmapkit_core::{
    Error, LineCap, LineJoin, LocalPoint, MapRoute, PointLatLng, Result, Rgba, Shared,
};

pub use gmapkit_route::{
    default_stroke, init_default_stroke, restore_overlay, DashPattern, GMapRoute, OverlayHandle,
    OverlayHost, OverlayRestore, OverlaySnapshot, RenderContext, RestoredOverlay, RouteSnapshot,
    SkiaCanvas, StrokeStyle, Visibility,
};

pub use gmapkit_settings::{RouteSettings, SettingsError, StrokeSettings};

/// Initialize logging
///
/// Installs a pretty `tracing` formatter on stdout filtered by `RUST_LOG`,
/// with INFO enabled by default. Fails if a global subscriber is already set.
pub fn init_logging() -> anyhow::Result<()> {
    use anyhow::Context;
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(true)
        .with_level(true)
        .with_thread_ids(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    Ok(())
}
