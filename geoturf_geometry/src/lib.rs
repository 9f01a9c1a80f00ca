//! Data model for GeoJSON-style geometries.
//!
//! The crate provides the seven geometry kinds of the GeoJSON specification
//! (`Point`, `MultiPoint`, `LineString`, `MultiLineString`, `Polygon`,
//! `MultiPolygon` and `GeometryCollection`), wrapped in the [`Geometry`]
//! tagged union, plus [`GeoFeature`] and [`GeoCollection`].
//!
//! All values are plain, owned trees: geometries never share state and can be
//! sent across threads freely. Parsing and serialization are left to callers.

mod geo;

pub use geo::*;
