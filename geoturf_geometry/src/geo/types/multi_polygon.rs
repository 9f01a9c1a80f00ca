use super::{CompositeGeometryTrait, PolygonGeometry};
use std::fmt::Debug;

/// Represents a collection of polygons, each of which may have an outer ring and optional inner holes.
/// This struct is used for complex, multi-part areas in 2D space.
#[derive(Clone, PartialEq)]
pub struct MultiPolygonGeometry(pub Vec<PolygonGeometry>);

/// Provides access to the internal list of `PolygonGeometry` objects.
impl CompositeGeometryTrait<PolygonGeometry> for MultiPolygonGeometry {
	fn new() -> Self {
		Self(Vec::new())
	}
	fn as_vec(&self) -> &Vec<PolygonGeometry> {
		&self.0
	}
	fn as_mut_vec(&mut self) -> &mut Vec<PolygonGeometry> {
		&mut self.0
	}
	fn into_inner(self) -> Vec<PolygonGeometry> {
		self.0
	}
}

impl Debug for MultiPolygonGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

crate::impl_composite_from!(MultiPolygonGeometry => PolygonGeometry);

impl From<geo::MultiPolygon<f64>> for MultiPolygonGeometry {
	fn from(geometry: geo::MultiPolygon<f64>) -> Self {
		MultiPolygonGeometry(geometry.into_iter().map(PolygonGeometry::from).collect())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn from_nested_arrays() {
		let multi = MultiPolygonGeometry::from(&[
			[[[0, 0], [10, 0], [10, 10], [0, 10], [0, 0]]],
			[[[20, 0], [30, 0], [30, 10], [20, 10], [20, 0]]],
		]);
		assert_eq!(multi.len(), 2);
		assert_eq!(multi.0[1].0[0].0[0].x(), 20.0);
	}

	#[test]
	fn empty() {
		let multi = MultiPolygonGeometry::new();
		assert!(multi.is_empty());
		assert_eq!(format!("{multi:?}"), "[]");
	}
}
