use super::{CompositeGeometryTrait, Coordinates};
use std::fmt::Debug;

/// Represents a linear ring: a series of coordinates whose first and last
/// position are expected to be identical. Rings are the building blocks of polygons.
///
/// Closure is not enforced on construction; use [`RingGeometry::is_closed`] to check it.
#[derive(Clone, PartialEq)]
pub struct RingGeometry(pub Vec<Coordinates>);

impl RingGeometry {
	/// Returns `true` if the ring has at least one coordinate and its first and last coordinates are equal.
	#[must_use]
	pub fn is_closed(&self) -> bool {
		!self.0.is_empty() && self.0.first() == self.0.last()
	}

	/// Returns the coordinates without the closing (wrap) coordinate.
	///
	/// The last coordinate is dropped unconditionally, whether or not the ring is actually closed.
	#[must_use]
	pub fn without_wrap_coord(&self) -> &[Coordinates] {
		&self.0[..self.0.len().saturating_sub(1)]
	}
}

impl CompositeGeometryTrait<Coordinates> for RingGeometry {
	/// Creates a new empty ring.
	fn new() -> Self {
		Self(Vec::new())
	}
	fn as_vec(&self) -> &Vec<Coordinates> {
		&self.0
	}
	fn as_mut_vec(&mut self) -> &mut Vec<Coordinates> {
		&mut self.0
	}
	/// Consumes the ring and returns its internal list of coordinates.
	fn into_inner(self) -> Vec<Coordinates> {
		self.0
	}
}

impl Debug for RingGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

crate::impl_composite_from!(RingGeometry => Coordinates);

/// Converts a `geo::LineString<f64>` into a `RingGeometry`, preserving the order of coordinates.
impl From<geo::LineString<f64>> for RingGeometry {
	fn from(geometry: geo::LineString<f64>) -> Self {
		RingGeometry(geometry.into_iter().map(Coordinates::from).collect())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn square() -> RingGeometry {
		RingGeometry::from(&[[0, 0], [10, 0], [10, 10], [0, 10], [0, 0]])
	}

	#[test]
	fn is_closed() {
		assert!(square().is_closed());
		assert!(!RingGeometry::from(&[[0, 0], [1, 0], [1, 1]]).is_closed());
		assert!(!RingGeometry::new().is_closed());
	}

	#[test]
	fn without_wrap_coord() {
		let ring = square();
		let open = ring.without_wrap_coord();
		assert_eq!(open.len(), 4);
		assert_eq!(open.last(), Some(&Coordinates::new(0.0, 10.0)));
	}

	#[test]
	fn without_wrap_coord_empty() {
		assert!(RingGeometry::new().without_wrap_coord().is_empty());
	}

	#[test]
	fn composite_push_and_len() {
		let mut ring = RingGeometry::new();
		ring.push(Coordinates::new(1.0, 2.0));
		ring.push(Coordinates::new(3.0, 4.0));
		assert_eq!(ring.len(), 2);
		assert!(!ring.is_empty());
	}

	#[test]
	fn from_geo_linestring() {
		let ls = geo::LineString::from(vec![geo::Coord { x: 0.0, y: 0.0 }, geo::Coord { x: 1.0, y: 1.0 }]);
		let ring = RingGeometry::from(ls);
		assert_eq!(ring.len(), 2);
	}
}
