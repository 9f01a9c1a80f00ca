use std::fmt::Display;

/// The kind of a [`Geometry`](crate::Geometry), without its coordinates.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum GeometryType {
	Point,
	LineString,
	Polygon,
	MultiPoint,
	MultiLineString,
	MultiPolygon,
	GeometryCollection,
}

impl GeometryType {
	/// Returns the GeoJSON `type` member for this kind.
	pub fn as_str(&self) -> &'static str {
		match self {
			GeometryType::Point => "Point",
			GeometryType::LineString => "LineString",
			GeometryType::Polygon => "Polygon",
			GeometryType::MultiPoint => "MultiPoint",
			GeometryType::MultiLineString => "MultiLineString",
			GeometryType::MultiPolygon => "MultiPolygon",
			GeometryType::GeometryCollection => "GeometryCollection",
		}
	}

	/// `true` for `Point`, `LineString` and `Polygon`, the kinds that have a multi-geometry counterpart.
	pub fn is_single(&self) -> bool {
		matches!(self, GeometryType::Point | GeometryType::LineString | GeometryType::Polygon)
	}
}

impl Display for GeometryType {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn display_uses_geojson_names() {
		assert_eq!(GeometryType::MultiLineString.to_string(), "MultiLineString");
		assert_eq!(format!("{}", GeometryType::GeometryCollection), "GeometryCollection");
	}

	#[test]
	fn single_kinds() {
		use GeometryType::*;
		for kind in [Point, LineString, Polygon] {
			assert!(kind.is_single());
		}
		for kind in [MultiPoint, MultiLineString, MultiPolygon, GeometryCollection] {
			assert!(!kind.is_single());
		}
	}
}
