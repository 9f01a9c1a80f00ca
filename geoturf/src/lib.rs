//! Turf-style helpers over [`geoturf_geometry`] values.
//!
//! - [`meta`] flattens any geometry, feature or feature collection into its
//!   points ([`meta::CoordAll`]) and unwraps point features ([`meta::get_coord`]).
//! - [`conversion`] converts great-circle distances between units
//!   ([`conversion::Unit`]), combines single geometries into one multi-geometry
//!   ([`conversion::combine`]) and explodes or outlines geometries.
//!
//! Every operation is a pure function over borrowed input that allocates a new
//! result. Failures are reported as [`GeometryOperationError`] inside an
//! [`anyhow::Error`].

pub mod conversion;
mod error;
pub mod meta;

pub use error::GeometryOperationError;
