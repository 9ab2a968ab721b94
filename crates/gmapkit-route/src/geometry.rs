//! Renderable polyline built from a route's projected points.

use std::fmt::Write as _;

use gmapkit_core::LocalPoint;
use lyon::math::{point, Box2D, Point};
use lyon::path::Path;

/// A connected polyline in view space.
///
/// Vertices are stored in the path's own precision (`f32`). Each new segment
/// starts from the path's recorded last point, so whatever rounding happened
/// when a vertex was stored carries through to the next segment.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RoutePath {
    points: Vec<Point>,
}

impl RoutePath {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            points: Vec::with_capacity(capacity),
        }
    }

    /// Empties the path while keeping its allocation.
    pub fn reset(&mut self) {
        self.points.clear();
    }

    /// Appends a straight segment.
    ///
    /// The first segment records both ends. Later segments are expected to
    /// start at [`RoutePath::last_point`]; a different `from` is joined to the
    /// current end with a connecting segment, as a single figure would be.
    pub fn add_line(&mut self, from: Point, to: Point) {
        match self.points.last() {
            Some(last) if *last == from => {}
            _ => self.points.push(from),
        }
        self.points.push(to);
    }

    pub fn last_point(&self) -> Option<Point> {
        self.points.last().copied()
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Number of stored vertices.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Axis-aligned bounds of the centre line.
    pub fn bounds(&self) -> Option<Box2D> {
        if self.points.is_empty() {
            return None;
        }
        Some(Box2D::from_points(self.points.iter().copied()))
    }

    /// Arc length of the centre line.
    pub fn length(&self) -> f32 {
        self.points
            .windows(2)
            .map(|seg| (seg[1] - seg[0]).length())
            .sum()
    }

    /// Copies the polyline into a lyon path for tessellation or export.
    pub fn to_lyon_path(&self) -> Path {
        let mut builder = Path::builder();
        let mut iter = self.points.iter();
        if let Some(first) = iter.next() {
            builder.begin(*first);
            for p in iter {
                builder.line_to(*p);
            }
            builder.end(false);
        }
        builder.build()
    }

    /// SVG path data (`M x y L x y ...`) for the centre line.
    pub fn to_svg_path_data(&self) -> String {
        let mut svg = String::new();
        for event in self.to_lyon_path().iter() {
            match event {
                lyon::path::Event::Begin { at } => {
                    let _ = write!(svg, "M {} {} ", at.x, at.y);
                }
                lyon::path::Event::Line { to, .. } => {
                    let _ = write!(svg, "L {} {} ", to.x, to.y);
                }
                _ => {}
            }
        }
        svg.trim_end().to_string()
    }
}

/// Converts a projected point into path space.
pub fn to_path_point(p: LocalPoint) -> Point {
    point(p.x as f32, p.y as f32)
}

/// Rebuilds `path` from `local_points`, reusing an existing path if there is one.
///
/// The first point becomes a zero-length segment so a single point still
/// produces a started figure. An empty slice leaves an empty, present path.
pub fn rebuild_path(path: &mut Option<RoutePath>, local_points: &[LocalPoint]) {
    if let Some(existing) = path.as_mut() {
        existing.reset();
    }
    let path = path.get_or_insert_with(|| RoutePath::with_capacity(local_points.len() + 1));

    for (i, p) in local_points.iter().enumerate() {
        let p2 = to_path_point(*p);
        if i == 0 {
            path.add_line(p2, p2);
        } else if let Some(last) = path.last_point() {
            path.add_line(last, p2);
        }
    }

    tracing::trace!(
        "Rebuilt route path: {} local points, {} vertices",
        local_points.len(),
        path.len()
    );
}
