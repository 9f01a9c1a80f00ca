use super::{CompositeGeometryTrait, PointGeometry};
use std::fmt::Debug;

/// Represents an ordered collection of points.
#[derive(Clone, PartialEq)]
pub struct MultiPointGeometry(pub Vec<PointGeometry>);

impl CompositeGeometryTrait<PointGeometry> for MultiPointGeometry {
	/// Creates a new, empty `MultiPointGeometry`.
	fn new() -> Self {
		Self(Vec::new())
	}
	fn as_vec(&self) -> &Vec<PointGeometry> {
		&self.0
	}
	fn as_mut_vec(&mut self) -> &mut Vec<PointGeometry> {
		&mut self.0
	}
	fn into_inner(self) -> Vec<PointGeometry> {
		self.0
	}
}

impl Debug for MultiPointGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

crate::impl_composite_from!(MultiPointGeometry => PointGeometry);

impl From<geo::MultiPoint<f64>> for MultiPointGeometry {
	fn from(geometry: geo::MultiPoint<f64>) -> Self {
		MultiPointGeometry(geometry.into_iter().map(PointGeometry::from).collect())
	}
}
