//! Coordinate extraction.
//!
//! [`CoordAll`] reduces a geometry, feature or feature collection to the ordered
//! list of its positions. Polygons and multi-polygons implement [`CoordAllRings`]
//! instead, which lets the caller decide whether each ring's closing coordinate
//! is kept.
//!
//! Note the asymmetry: when a polygon is reached through [`Geometry`](geoturf_geometry::Geometry),
//! a [`GeometryCollection`](geoturf_geometry::GeometryCollection), a feature or a
//! feature collection, its closing coordinates are always excluded.

mod coord_all;
mod get_coord;

pub use coord_all::*;
pub use get_coord::*;
