use std::fmt::Debug;

/// A geometry with a multi-geometry counterpart that holds any number of them.
pub trait SingleGeometryTrait<Multi>: Debug + Clone {
	/// Wraps `self` as the only member of a new multi-geometry.
	fn into_multi(self) -> Multi;
}

/// A geometry that is nothing but an ordered list of members: coordinates for
/// lines and rings, rings for polygons, single geometries for multi-geometries.
///
/// Implementors provide access to the list; the remaining methods are derived from it.
pub trait CompositeGeometryTrait<Member>: Debug + Clone {
	/// An empty geometry.
	fn new() -> Self;

	fn as_vec(&self) -> &Vec<Member>;

	fn as_mut_vec(&mut self) -> &mut Vec<Member>;

	fn into_inner(self) -> Vec<Member>;

	fn iter(&self) -> std::slice::Iter<'_, Member> {
		self.as_vec().iter()
	}

	fn is_empty(&self) -> bool {
		self.as_vec().is_empty()
	}

	/// Number of members, not of coordinates.
	fn len(&self) -> usize {
		self.as_vec().len()
	}

	/// Appends a member at the end.
	fn push(&mut self, member: Member) {
		self.as_mut_vec().push(member);
	}
}
