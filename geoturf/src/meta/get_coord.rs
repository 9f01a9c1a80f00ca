use crate::GeometryOperationError;
use anyhow::{Result, bail};
use geoturf_geometry::{GeoFeature, Geometry, PointGeometry};

/// Unwraps the point of a feature whose geometry is a `Point`.
///
/// Fails with [`GeometryOperationError`] for any other geometry, including none.
pub fn get_coord(feature: &GeoFeature) -> Result<PointGeometry> {
	match &feature.geometry {
		Some(Geometry::Point(point)) => Ok(*point),
		_ => bail!(GeometryOperationError::new(
			"A Feature with a Point geometry is required."
		)),
	}
}
