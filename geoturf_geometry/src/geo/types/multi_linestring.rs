use super::{CompositeGeometryTrait, LineStringGeometry};
use std::fmt::Debug;

/// An ordered list of line strings.
///
/// The lines stay separate: nothing joins the end of one line to the start of
/// the next, and empty lines are kept in place.
#[derive(Clone, PartialEq)]
pub struct MultiLineStringGeometry(pub Vec<LineStringGeometry>);

impl MultiLineStringGeometry {
	/// Total number of coordinates over all lines.
	#[must_use]
	pub fn coord_count(&self) -> usize {
		self.0.iter().map(|line| line.len()).sum()
	}
}

impl CompositeGeometryTrait<LineStringGeometry> for MultiLineStringGeometry {
	fn new() -> Self {
		Self(Vec::new())
	}
	fn as_vec(&self) -> &Vec<LineStringGeometry> {
		&self.0
	}
	fn as_mut_vec(&mut self) -> &mut Vec<LineStringGeometry> {
		&mut self.0
	}
	fn into_inner(self) -> Vec<LineStringGeometry> {
		self.0
	}
}

impl Debug for MultiLineStringGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

crate::impl_composite_from!(MultiLineStringGeometry => LineStringGeometry);

impl From<geo::MultiLineString<f64>> for MultiLineStringGeometry {
	fn from(geometry: geo::MultiLineString<f64>) -> Self {
		MultiLineStringGeometry(geometry.into_iter().map(LineStringGeometry::from).collect())
	}
}
