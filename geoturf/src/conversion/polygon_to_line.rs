use crate::GeometryOperationError;
use anyhow::{Result, bail};
use geoturf_geometry::*;

/// Converts a polygon into its outline.
///
/// A polygon with a single ring becomes a `LineString` feature; a polygon with
/// holes becomes a `MultiLineString` feature with one line per ring, in ring order.
/// Rings are copied as they are, closing coordinate included. A polygon without
/// rings yields an empty `MultiLineString`.
pub fn polygon_to_line(polygon: &PolygonGeometry, properties: Option<GeoProperties>) -> GeoFeature {
	let geometry = match polygon.0.as_slice() {
		[ring] => Geometry::LineString(ring_to_line(ring)),
		rings => Geometry::MultiLineString(MultiLineStringGeometry(rings.iter().map(ring_to_line).collect())),
	};
	GeoFeature::with_properties(geometry, properties.unwrap_or_default())
}

/// Converts every polygon of a multi-polygon with [`polygon_to_line`], keeping their order.
/// All resulting features share the given properties.
pub fn multi_polygon_to_line(
	multi_polygon: &MultiPolygonGeometry,
	properties: Option<GeoProperties>,
) -> GeoCollection {
	multi_polygon
		.0
		.iter()
		.map(|polygon| polygon_to_line(polygon, properties.clone()))
		.collect()
}

/// Outlines a `Polygon` or `MultiPolygon` feature, keeping its id and properties.
///
/// Fails with [`GeometryOperationError`] for features holding any other geometry, or none.
pub fn feature_to_line(feature: &GeoFeature) -> Result<GeoCollection> {
	let properties = Some(feature.properties.clone());
	let mut lines = match &feature.geometry {
		Some(Geometry::Polygon(polygon)) => GeoCollection::from_feature(polygon_to_line(polygon, properties)),
		Some(Geometry::MultiPolygon(multi_polygon)) => multi_polygon_to_line(multi_polygon, properties),
		other => bail!(GeometryOperationError::new(format!(
			"A Feature with a Polygon or MultiPolygon geometry is required, found {}",
			other.as_ref().map_or("no geometry", |geometry| geometry.type_name())
		))),
	};
	for line in &mut lines.features {
		line.id.clone_from(&feature.id);
	}
	Ok(lines)
}

fn ring_to_line(ring: &RingGeometry) -> LineStringGeometry {
	LineStringGeometry(ring.0.clone())
}
