use geoturf_geometry::*;
use log::trace;

/// Extracts all positions of a geometry-like value as points, in order.
///
/// The result is always a new vector. Empty inputs produce an empty vector.
pub trait CoordAll {
	fn coord_all(&self) -> Vec<PointGeometry>;
}

/// Extracts all positions of a polygonal geometry, ring by ring.
///
/// With `exclude_wrap_coord` set, the last coordinate of every ring is skipped.
/// That coordinate normally repeats the first one to close the ring. It is
/// dropped without checking that the ring is actually closed.
pub trait CoordAllRings {
	fn coord_all_rings(&self, exclude_wrap_coord: bool) -> Vec<PointGeometry>;
}

/// Shorthand for [`CoordAll::coord_all`].
pub fn coord_all<T: CoordAll + ?Sized>(value: &T) -> Vec<PointGeometry> {
	value.coord_all()
}

impl CoordAll for PointGeometry {
	fn coord_all(&self) -> Vec<PointGeometry> {
		vec![*self]
	}
}

impl CoordAll for MultiPointGeometry {
	fn coord_all(&self) -> Vec<PointGeometry> {
		self.0.clone()
	}
}

impl CoordAll for LineStringGeometry {
	fn coord_all(&self) -> Vec<PointGeometry> {
		let mut points = Vec::with_capacity(self.0.len());
		append_coords(&mut points, &self.0);
		points
	}
}

impl CoordAll for MultiLineStringGeometry {
	fn coord_all(&self) -> Vec<PointGeometry> {
		let mut points = Vec::with_capacity(self.coord_count());
		for line in &self.0 {
			append_coords(&mut points, &line.0);
		}
		points
	}
}

impl CoordAllRings for PolygonGeometry {
	fn coord_all_rings(&self, exclude_wrap_coord: bool) -> Vec<PointGeometry> {
		let mut points = Vec::new();
		append_polygon(&mut points, self, exclude_wrap_coord);
		points
	}
}

impl CoordAllRings for MultiPolygonGeometry {
	fn coord_all_rings(&self, exclude_wrap_coord: bool) -> Vec<PointGeometry> {
		let mut points = Vec::new();
		for polygon in &self.0 {
			append_polygon(&mut points, polygon, exclude_wrap_coord);
		}
		points
	}
}

/// Dispatches on the geometry kind. Polygons and multi-polygons are always
/// extracted without their closing coordinates.
impl CoordAll for Geometry {
	fn coord_all(&self) -> Vec<PointGeometry> {
		let mut points = Vec::new();
		append_geometry(&mut points, self);
		points
	}
}

impl CoordAll for GeometryCollection {
	fn coord_all(&self) -> Vec<PointGeometry> {
		let mut points = Vec::new();
		for geometry in &self.0 {
			append_geometry(&mut points, geometry);
		}
		points
	}
}

/// A feature without geometry yields no points.
impl CoordAll for GeoFeature {
	fn coord_all(&self) -> Vec<PointGeometry> {
		let mut points = Vec::new();
		if let Some(geometry) = &self.geometry {
			append_geometry(&mut points, geometry);
		}
		points
	}
}

impl CoordAll for GeoCollection {
	fn coord_all(&self) -> Vec<PointGeometry> {
		let mut points = Vec::new();
		for geometry in self.features.iter().filter_map(|feature| feature.geometry.as_ref()) {
			append_geometry(&mut points, geometry);
		}
		trace!("extracted {} points from {} features", points.len(), self.features.len());
		points
	}
}

fn append_coords(points: &mut Vec<PointGeometry>, coords: &[Coordinates]) {
	points.extend(coords.iter().copied().map(PointGeometry::new));
}

fn append_polygon(points: &mut Vec<PointGeometry>, polygon: &PolygonGeometry, exclude_wrap_coord: bool) {
	for ring in &polygon.0 {
		if exclude_wrap_coord {
			if !ring.is_empty() && !ring.is_closed() {
				trace!("unclosed ring with {} coordinates, dropping its last one", ring.len());
			}
			append_coords(points, ring.without_wrap_coord());
		} else {
			append_coords(points, &ring.0);
		}
	}
}

/// Walks nested collections with an explicit stack, so deeply nested input
/// cannot exhaust the call stack. Members are visited in their stored order.
fn append_geometry(points: &mut Vec<PointGeometry>, geometry: &Geometry) {
	let mut stack: Vec<&Geometry> = vec![geometry];
	while let Some(geometry) = stack.pop() {
		match geometry {
			Geometry::Point(g) => points.push(*g),
			Geometry::MultiPoint(g) => points.extend_from_slice(&g.0),
			Geometry::LineString(g) => append_coords(points, &g.0),
			Geometry::MultiLineString(g) => {
				for line in &g.0 {
					append_coords(points, &line.0);
				}
			}
			Geometry::Polygon(g) => append_polygon(points, g, true),
			Geometry::MultiPolygon(g) => {
				for polygon in &g.0 {
					append_polygon(points, polygon, true);
				}
			}
			Geometry::GeometryCollection(g) => {
				trace!("descending into GeometryCollection with {} members", g.0.len());
				stack.extend(g.0.iter().rev());
			}
		}
	}
}
