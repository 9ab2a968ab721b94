//! Base route representation.
//!
//! A [`MapRoute`] is the geographic half of a route: a name and an ordered list
//! of coordinates. Drawable routes wrap it and add the projected points and
//! everything needed to draw them.

use serde::{Deserialize, Serialize};

use crate::geo::PointLatLng;

/// A named, ordered polyline of geographic points.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MapRoute {
    name: String,
    #[serde(default)]
    points: Vec<PointLatLng>,
    /// Free-form user data carried alongside the route.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
}

impl MapRoute {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            points: Vec::new(),
            tag: None,
        }
    }

    pub fn with_points(
        name: impl Into<String>,
        points: impl IntoIterator<Item = PointLatLng>,
    ) -> Self {
        Self {
            name: name.into(),
            points: points.into_iter().collect(),
            tag: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn points(&self) -> &[PointLatLng] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn push(&mut self, point: PointLatLng) {
        self.points.push(point);
    }

    /// Inserts a point before `index`, clamping to the end of the route.
    pub fn insert(&mut self, index: usize, point: PointLatLng) {
        let index = index.min(self.points.len());
        self.points.insert(index, point);
    }

    /// Removes and returns the point at `index`, if there is one.
    pub fn remove(&mut self, index: usize) -> Option<PointLatLng> {
        (index < self.points.len()).then(|| self.points.remove(index))
    }

    pub fn extend(&mut self, points: impl IntoIterator<Item = PointLatLng>) {
        self.points.extend(points);
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// First point of the route.
    pub fn from(&self) -> Option<PointLatLng> {
        self.points.first().copied()
    }

    /// Last point of the route.
    pub fn to(&self) -> Option<PointLatLng> {
        self.points.last().copied()
    }

    /// Total length along the route in kilometres.
    pub fn distance_km(&self) -> f64 {
        self.points
            .windows(2)
            .map(|leg| leg[0].distance_km(&leg[1]))
            .sum()
    }
}
