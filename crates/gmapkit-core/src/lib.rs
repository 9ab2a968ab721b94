//! # GMapKit Core
//!
//! Core types shared by the GMapKit crates.
//! Provides geographic and projected point types, the base route model,
//! stroke style primitives, error types and handle aliases.

pub mod error;
pub mod geo;
pub mod map_route;
pub mod style;
pub mod types;

pub use error::{Error, Result};
pub use geo::{LocalPoint, PointLatLng, EARTH_RADIUS_KM};
pub use map_route::MapRoute;
pub use style::{LineCap, LineJoin, Rgba};
pub use types::{shared, Shared, WeakShared};
