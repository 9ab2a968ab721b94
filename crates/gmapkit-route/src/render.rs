//! Drawing routes onto a surface.
//!
//! The route only knows how to hand its path and stroke to a
//! [`RenderContext`]. [`SkiaCanvas`] is the bundled raster implementation,
//! using tiny-skia for anti-aliased stroking.

use gmapkit_core::Rgba;
use tiny_skia::{Color, PathBuilder, Pixmap, Transform};

use crate::geometry::RoutePath;
use crate::route::GMapRoute;
use crate::stroke::StrokeStyle;

/// Something a route can be stroked onto.
pub trait RenderContext {
    fn stroke_path(&mut self, path: &RoutePath, stroke: &StrokeStyle);
}

/// Raster surface backed by a tiny-skia pixmap.
pub struct SkiaCanvas {
    pixmap: Pixmap,
    transform: Transform,
}

impl SkiaCanvas {
    /// Returns `None` for a zero-sized surface.
    pub fn new(width: u32, height: u32) -> Option<Self> {
        Some(Self {
            pixmap: Pixmap::new(width, height)?,
            transform: Transform::identity(),
        })
    }

    /// View transform applied to every path drawn afterwards.
    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    pub fn clear(&mut self, color: Rgba) {
        self.pixmap
            .fill(Color::from_rgba8(color.r, color.g, color.b, color.a));
    }

    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    pub fn into_pixmap(self) -> Pixmap {
        self.pixmap
    }

    /// Alpha of the pixel at (x, y), 0 outside the surface.
    pub fn alpha_at(&self, x: u32, y: u32) -> u8 {
        self.pixmap.pixel(x, y).map_or(0, |p| p.alpha())
    }
}

impl RenderContext for SkiaCanvas {
    fn stroke_path(&mut self, path: &RoutePath, stroke: &StrokeStyle) {
        let mut pb = PathBuilder::new();
        let mut points = path.points().iter();
        let Some(first) = points.next() else {
            return;
        };
        pb.move_to(first.x, first.y);
        for p in points {
            pb.line_to(p.x, p.y);
        }

        // finish() rejects paths without usable bounds.
        let Some(skia_path) = pb.finish() else {
            return;
        };
        self.pixmap.stroke_path(
            &skia_path,
            &stroke.to_skia_paint(),
            &stroke.to_skia_stroke(),
            self.transform,
            None,
        );
    }
}

impl GMapRoute {
    /// Strokes the route if it is visible and has something to draw.
    pub fn on_render(&self, ctx: &mut dyn RenderContext) {
        if !self.is_visible() {
            return;
        }
        if let Some(path) = self.path().filter(|p| !p.is_empty()) {
            ctx.stroke_path(path, self.stroke());
        }
    }
}
