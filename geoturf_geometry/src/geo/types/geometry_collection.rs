use super::CompositeGeometryTrait;
use crate::Geometry;
use std::fmt::Debug;

/// An ordered, heterogeneous list of geometries. Members may themselves be
/// collections, so a `GeometryCollection` is the only recursive geometry kind.
///
/// The structure is a tree: a collection owns its members, so cycles cannot occur.
#[derive(Clone, PartialEq, Default)]
pub struct GeometryCollection(pub Vec<Geometry>);

impl CompositeGeometryTrait<Geometry> for GeometryCollection {
	fn new() -> Self {
		Self(Vec::new())
	}
	fn as_vec(&self) -> &Vec<Geometry> {
		&self.0
	}
	fn as_mut_vec(&mut self) -> &mut Vec<Geometry> {
		&mut self.0
	}
	fn into_inner(self) -> Vec<Geometry> {
		self.0
	}
}

impl Debug for GeometryCollection {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

impl From<Vec<Geometry>> for GeometryCollection {
	fn from(value: Vec<Geometry>) -> Self {
		Self(value)
	}
}

impl FromIterator<Geometry> for GeometryCollection {
	fn from_iter<I: IntoIterator<Item = Geometry>>(iter: I) -> Self {
		Self(iter.into_iter().collect())
	}
}
