//! Unit conversion and geometry conversion.
//!
//! Distances are converted through radians on a sphere whose radius is
//! expressed in every supported [`Unit`]. Geometry helpers turn a feature
//! collection of single geometries into one multi-geometry ([`combine`]),
//! features into point features ([`explode`]) and polygons into lines
//! ([`polygon_to_line`]).

mod combine;
mod explode;
mod length;
mod polygon_to_line;
mod unit;

pub use combine::*;
pub use explode::*;
pub use length::*;
pub use polygon_to_line::*;
pub use unit::*;
