use super::*;
use std::fmt::Debug;

/// A GeoJSON geometry of any kind.
///
/// Matching on this enum is exhaustive, so adding a geometry kind is a
/// compile-time visible change for every consumer that dispatches on it.
#[derive(Clone, PartialEq)]
pub enum Geometry {
	Point(PointGeometry),
	LineString(LineStringGeometry),
	Polygon(PolygonGeometry),
	MultiPoint(MultiPointGeometry),
	MultiLineString(MultiLineStringGeometry),
	MultiPolygon(MultiPolygonGeometry),
	GeometryCollection(GeometryCollection),
}

impl Geometry {
	pub fn new_point<T>(value: T) -> Self
	where
		PointGeometry: From<T>,
	{
		Self::Point(PointGeometry::from(value))
	}
	pub fn new_line_string<T>(value: T) -> Self
	where
		LineStringGeometry: From<T>,
	{
		Self::LineString(LineStringGeometry::from(value))
	}
	pub fn new_polygon<T>(value: T) -> Self
	where
		PolygonGeometry: From<T>,
	{
		Self::Polygon(PolygonGeometry::from(value))
	}
	pub fn new_multi_point<T>(value: T) -> Self
	where
		MultiPointGeometry: From<T>,
	{
		Self::MultiPoint(MultiPointGeometry::from(value))
	}
	pub fn new_multi_line_string<T>(value: T) -> Self
	where
		MultiLineStringGeometry: From<T>,
	{
		Self::MultiLineString(MultiLineStringGeometry::from(value))
	}
	pub fn new_multi_polygon<T>(value: T) -> Self
	where
		MultiPolygonGeometry: From<T>,
	{
		Self::MultiPolygon(MultiPolygonGeometry::from(value))
	}
	pub fn new_geometry_collection(geometries: Vec<Geometry>) -> Self {
		Self::GeometryCollection(GeometryCollection(geometries))
	}

	/// Returns the kind of this geometry.
	#[must_use]
	pub fn geometry_type(&self) -> GeometryType {
		match self {
			Geometry::Point(_) => GeometryType::Point,
			Geometry::LineString(_) => GeometryType::LineString,
			Geometry::Polygon(_) => GeometryType::Polygon,
			Geometry::MultiPoint(_) => GeometryType::MultiPoint,
			Geometry::MultiLineString(_) => GeometryType::MultiLineString,
			Geometry::MultiPolygon(_) => GeometryType::MultiPolygon,
			Geometry::GeometryCollection(_) => GeometryType::GeometryCollection,
		}
	}

	/// Returns the GeoJSON type name, e.g. `"MultiPolygon"`.
	#[must_use]
	pub fn type_name(&self) -> &'static str {
		self.geometry_type().as_str()
	}

	/// Lifts a single geometry into its one-element multi-geometry.
	/// Multi-geometries and collections are returned unchanged.
	pub fn into_multi(self) -> Self {
		match self {
			Geometry::Point(g) => Geometry::MultiPoint(g.into_multi()),
			Geometry::LineString(g) => Geometry::MultiLineString(g.into_multi()),
			Geometry::Polygon(g) => Geometry::MultiPolygon(g.into_multi()),
			Geometry::MultiPoint(_) => self,
			Geometry::MultiLineString(_) => self,
			Geometry::MultiPolygon(_) => self,
			Geometry::GeometryCollection(_) => self,
		}
	}

	pub fn new_example() -> Self {
		Self::new_multi_polygon(vec![
			vec![
				vec![[0.0, 0.0], [5.0, 0.0], [2.5, 4.0], [0.0, 0.0]],
				vec![[2.0, 1.0], [2.5, 2.0], [3.0, 1.0], [2.0, 1.0]],
			],
			vec![
				vec![[6.0, 0.0], [9.0, 0.0], [9.0, 4.0], [6.0, 4.0], [6.0, 0.0]],
				vec![[7.0, 1.0], [7.0, 3.0], [8.0, 3.0], [8.0, 1.0], [7.0, 1.0]],
			],
		])
	}
}

impl Debug for Geometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let inner: &dyn Debug = match self {
			Geometry::Point(g) => g,
			Geometry::LineString(g) => g,
			Geometry::Polygon(g) => g,
			Geometry::MultiPoint(g) => g,
			Geometry::MultiLineString(g) => g,
			Geometry::MultiPolygon(g) => g,
			Geometry::GeometryCollection(g) => g,
		};
		f.debug_tuple(self.type_name()).field(inner).finish()
	}
}

macro_rules! impl_from_variant {
	($($variant:ident($t:ty)),*) => {$(
		impl From<$t> for Geometry {
			fn from(value: $t) -> Self {
				Geometry::$variant(value)
			}
		}
	)*}
}

impl_from_variant!(
	Point(PointGeometry),
	LineString(LineStringGeometry),
	Polygon(PolygonGeometry),
	MultiPoint(MultiPointGeometry),
	MultiLineString(MultiLineStringGeometry),
	MultiPolygon(MultiPolygonGeometry),
	GeometryCollection(GeometryCollection)
);

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(Geometry::new_point([1.0, 2.0]), GeometryType::Point)]
	#[case(Geometry::new_line_string(&[[0, 0], [1, 1]]), GeometryType::LineString)]
	#[case(Geometry::new_polygon(&[[[0, 0], [1, 0], [1, 1], [0, 0]]]), GeometryType::Polygon)]
	#[case(Geometry::new_multi_point(&[[0, 0], [1, 1]]), GeometryType::MultiPoint)]
	#[case(Geometry::new_multi_line_string(&[[[0, 0], [1, 1]]]), GeometryType::MultiLineString)]
	#[case(Geometry::new_example(), GeometryType::MultiPolygon)]
	#[case(Geometry::new_geometry_collection(vec![]), GeometryType::GeometryCollection)]
	fn geometry_type(#[case] geometry: Geometry, #[case] expected: GeometryType) {
		assert_eq!(geometry.geometry_type(), expected);
		assert_eq!(geometry.type_name(), expected.as_str());
	}

	#[test]
	fn into_multi_lifts_single_geometries() {
		let point = Geometry::new_point([1.0, 2.0]).into_multi();
		assert_eq!(point, Geometry::new_multi_point(&[[1, 2]]));

		let line = Geometry::new_line_string(&[[0, 0], [1, 1]]).into_multi();
		assert_eq!(line, Geometry::new_multi_line_string(&[[[0, 0], [1, 1]]]));

		let polygon = Geometry::new_polygon(&[[[0, 0], [1, 0], [1, 1], [0, 0]]]).into_multi();
		assert_eq!(polygon.geometry_type(), GeometryType::MultiPolygon);
	}

	#[test]
	fn into_multi_keeps_multi_geometries() {
		let example = Geometry::new_example();
		assert_eq!(example.clone().into_multi(), example);

		let collection = Geometry::new_geometry_collection(vec![Geometry::new_point([0.0, 0.0])]);
		assert_eq!(collection.clone().into_multi(), collection);
	}

	#[test]
	fn debug_names_the_variant() {
		assert_eq!(format!("{:?}", Geometry::new_point([1.0, 2.0])), "Point([1.0, 2.0])");
		assert_eq!(
			format!("{:?}", Geometry::new_multi_point(&[[1, 2], [3, 4]])),
			"MultiPoint([[1.0, 2.0], [3.0, 4.0]])"
		);
	}

	#[test]
	fn from_concrete_types() {
		let geometry = Geometry::from(PointGeometry::from_lng_lat(3.0, 4.0));
		assert_eq!(geometry, Geometry::new_point([3.0, 4.0]));
	}
}
