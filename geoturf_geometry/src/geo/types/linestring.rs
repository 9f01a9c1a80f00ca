use super::{CompositeGeometryTrait, Coordinates, MultiLineStringGeometry, SingleGeometryTrait};
use std::fmt::Debug;

/// Represents a sequence of connected coordinates forming a line.
///
/// No closure is required: first and last coordinates may differ.
#[derive(Clone, PartialEq)]
pub struct LineStringGeometry(pub Vec<Coordinates>);

impl CompositeGeometryTrait<Coordinates> for LineStringGeometry {
	/// Creates a new, empty `LineStringGeometry`.
	fn new() -> Self {
		Self(Vec::new())
	}
	/// Returns a reference to the internal vector of coordinates representing the points of the line.
	fn as_vec(&self) -> &Vec<Coordinates> {
		&self.0
	}
	/// Returns a mutable reference to the internal vector of coordinates representing the points of the line.
	fn as_mut_vec(&mut self) -> &mut Vec<Coordinates> {
		&mut self.0
	}
	/// Consumes the `LineStringGeometry` and returns the internal vector of coordinates.
	fn into_inner(self) -> Vec<Coordinates> {
		self.0
	}
}

impl SingleGeometryTrait<MultiLineStringGeometry> for LineStringGeometry {
	/// Converts this single line into a `MultiLineStringGeometry` containing just this one line.
	fn into_multi(self) -> MultiLineStringGeometry {
		MultiLineStringGeometry(vec![self])
	}
}

impl Debug for LineStringGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

crate::impl_composite_from!(LineStringGeometry => Coordinates);

impl From<geo::LineString<f64>> for LineStringGeometry {
	fn from(geometry: geo::LineString<f64>) -> Self {
		LineStringGeometry(geometry.into_iter().map(Coordinates::from).collect())
	}
}
