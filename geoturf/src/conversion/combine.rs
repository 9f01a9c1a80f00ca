use crate::GeometryOperationError;
use anyhow::{Result, bail};
use geoturf_geometry::*;
use log::debug;

/// Combines a feature collection of `Point`, `LineString` or `Polygon` features
/// into one `MultiPoint`, `MultiLineString` or `MultiPolygon`.
///
/// All features must carry the same geometry type. The result has one member
/// per feature, in feature order, and every member keeps its coordinates
/// untouched. Nothing is built unless the whole collection is valid.
///
/// Fails with [`GeometryOperationError`] if
/// - the collection is empty,
/// - the features do not all share one geometry type (a missing geometry counts as a different type),
/// - the shared type is not one of the three single geometry types.
pub fn combine(collection: &GeoCollection) -> Result<Geometry> {
	let Some(first) = collection.features.first() else {
		bail!(GeometryOperationError::new(
			"Your FeatureCollection doesn't have any Feature objects in it."
		))
	};
	let expected = first.geometry_type();

	if let Some(other) = collection
		.iter()
		.map(GeoFeature::geometry_type)
		.find(|geometry_type| *geometry_type != expected)
	{
		bail!(GeometryOperationError::new(format!(
			"Your FeatureCollection must be of all of the same geometry type. Expected {}, found {}",
			describe(expected),
			describe(other)
		)))
	}

	let Some(seed) = first.geometry.clone().filter(|g| g.geometry_type().is_single()) else {
		bail!(GeometryOperationError::new(format!(
			"combine only supports features with Point, LineString or Polygon geometries, found {}",
			describe(expected)
		)))
	};
	let combined = collection
		.iter()
		.skip(1)
		.filter_map(|feature| feature.geometry.clone())
		.try_fold(seed.into_multi(), push_member)?;

	debug!("combined {} features into a {}", collection.len(), combined.type_name());
	Ok(combined)
}

/// Appends a single geometry to the multi-geometry of its kind.
fn push_member(multi: Geometry, member: Geometry) -> Result<Geometry> {
	Ok(match (multi, member) {
		(Geometry::MultiPoint(mut points), Geometry::Point(point)) => {
			points.push(point);
			Geometry::MultiPoint(points)
		}
		(Geometry::MultiLineString(mut lines), Geometry::LineString(line)) => {
			lines.push(line);
			Geometry::MultiLineString(lines)
		}
		(Geometry::MultiPolygon(mut polygons), Geometry::Polygon(polygon)) => {
			polygons.push(polygon);
			Geometry::MultiPolygon(polygons)
		}
		(multi, member) => bail!(GeometryOperationError::new(format!(
			"cannot add a {} to a {}",
			member.type_name(),
			multi.type_name()
		))),
	})
}

fn describe(geometry_type: Option<GeometryType>) -> &'static str {
	geometry_type.map_or("no geometry", |t| t.as_str())
}
