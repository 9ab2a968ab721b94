//! Geographic and projected coordinates.
//!
//! [`PointLatLng`] is a position on the globe in degrees. [`LocalPoint`] is the
//! same position after the map control's projection, in whole pixels of the
//! current view.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Equatorial earth radius used for distance calculations, in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6378.137;

/// A geographic coordinate in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PointLatLng {
    pub lat: f64,
    pub lng: f64,
}

impl PointLatLng {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Great-circle distance to `other` in kilometres (haversine).
    pub fn distance_km(&self, other: &PointLatLng) -> f64 {
        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();
        let dlat = lat2 - lat1;
        let dlng = (other.lng - self.lng).to_radians();

        let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlng / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        EARTH_RADIUS_KM * c
    }
}

impl fmt::Display for PointLatLng {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{Lat={}, Lng={}}}", self.lat, self.lng)
    }
}

/// A projected point in view space (pixels).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct LocalPoint {
    pub x: i64,
    pub y: i64,
}

impl LocalPoint {
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Translates the point in place.
    pub fn offset(&mut self, dx: i64, dy: i64) {
        self.x += dx;
        self.y += dy;
    }
}

impl From<(i64, i64)> for LocalPoint {
    fn from((x, y): (i64, i64)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for LocalPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{X={}, Y={}}}", self.x, self.y)
    }
}
