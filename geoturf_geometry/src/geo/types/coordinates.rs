use std::fmt::Debug;

/// A single position: longitude (`x`), latitude (`y`) and an optional altitude.
///
/// Coordinates are immutable values. Equality compares all three components,
/// so a 2D and a 3D position with the same longitude and latitude differ.
#[derive(Clone, Copy, PartialEq)]
pub struct Coordinates {
	xy: [f64; 2],
	altitude: Option<f64>,
}

impl Coordinates {
	#[must_use]
	pub fn new(x: f64, y: f64) -> Self {
		Self {
			xy: [x, y],
			altitude: None,
		}
	}

	#[must_use]
	pub fn new_with_altitude(x: f64, y: f64, altitude: f64) -> Self {
		Self {
			xy: [x, y],
			altitude: Some(altitude),
		}
	}

	#[must_use]
	pub fn x(&self) -> f64 {
		self.xy[0]
	}

	#[must_use]
	pub fn y(&self) -> f64 {
		self.xy[1]
	}

	#[must_use]
	pub fn longitude(&self) -> f64 {
		self.xy[0]
	}

	#[must_use]
	pub fn latitude(&self) -> f64 {
		self.xy[1]
	}

	#[must_use]
	pub fn altitude(&self) -> Option<f64> {
		self.altitude
	}

	#[must_use]
	pub fn has_altitude(&self) -> bool {
		self.altitude.is_some()
	}
}

impl<'a, T> From<&'a [T; 2]> for Coordinates
where
	T: Copy + Into<f64>,
{
	fn from(value: &'a [T; 2]) -> Self {
		Coordinates::new(value[0].into(), value[1].into())
	}
}

impl From<[f64; 2]> for Coordinates {
	fn from(value: [f64; 2]) -> Self {
		Coordinates::new(value[0], value[1])
	}
}

impl From<[f64; 3]> for Coordinates {
	fn from(value: [f64; 3]) -> Self {
		Coordinates::new_with_altitude(value[0], value[1], value[2])
	}
}

impl From<(f64, f64)> for Coordinates {
	fn from(value: (f64, f64)) -> Self {
		Coordinates::new(value.0, value.1)
	}
}

impl From<&(f64, f64)> for Coordinates {
	fn from(value: &(f64, f64)) -> Self {
		Coordinates::new(value.0, value.1)
	}
}

impl From<Coordinates> for [f64; 2] {
	fn from(value: Coordinates) -> Self {
		value.xy
	}
}

impl From<geo::Coord> for Coordinates {
	fn from(value: geo::Coord) -> Self {
		Coordinates::new(value.x, value.y)
	}
}

impl From<geo::Point> for Coordinates {
	fn from(value: geo::Point) -> Self {
		Coordinates::new(value.x(), value.y())
	}
}

impl Debug for Coordinates {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self.altitude {
			Some(z) => [self.xy[0], self.xy[1], z].fmt(f),
			None => self.xy.fmt(f),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[test]
	fn new_and_accessors() {
		let c = Coordinates::new(13.404954, 52.520008);
		assert_eq!(c.x(), 13.404954);
		assert_eq!(c.y(), 52.520008);
		assert_eq!(c.longitude(), 13.404954);
		assert_eq!(c.latitude(), 52.520008);
		assert_eq!(c.altitude(), None);
		assert!(!c.has_altitude());
	}

	#[test]
	fn altitude_is_kept() {
		let c = Coordinates::new_with_altitude(1.0, 2.0, 35.5);
		assert_eq!(c.altitude(), Some(35.5));
		assert!(c.has_altitude());
		assert_ne!(c, Coordinates::new(1.0, 2.0));
	}

	#[rstest]
	#[case(Coordinates::new(1.0, 2.0), "[1.0, 2.0]")]
	#[case(Coordinates::new_with_altitude(1.0, 2.0, 3.0), "[1.0, 2.0, 3.0]")]
	fn debug_formats_like_array(#[case] c: Coordinates, #[case] expected: &str) {
		assert_eq!(format!("{:?}", c), expected);
	}

	#[test]
	fn from_array_ref() {
		let c = Coordinates::from(&[7, 8]);
		assert_eq!(c.x(), 7.0);
		assert_eq!(c.y(), 8.0);
	}

	#[test]
	fn from_three_element_array() {
		let c = Coordinates::from([7.0, 8.0, 9.0]);
		assert_eq!(c.altitude(), Some(9.0));
	}

	#[test]
	fn from_tuple_and_ref_tuple() {
		let c1 = Coordinates::from((3.0f64, 4.0f64));
		let t = (5.0f64, 6.0f64);
		let c2 = Coordinates::from(&t);
		assert_eq!([c1.x(), c1.y()], [3.0, 4.0]);
		assert_eq!([c2.x(), c2.y()], [5.0, 6.0]);
	}

	#[test]
	fn into_array() {
		let arr: [f64; 2] = Coordinates::new(10.25, -20.5).into();
		assert_eq!(arr, [10.25, -20.5]);
	}

	#[test]
	fn from_geo_types() {
		let c = Coordinates::from(geo::Coord { x: 11.0, y: 22.0 });
		assert_eq!(c, Coordinates::new(11.0, 22.0));
		let c = Coordinates::from(geo::Point::new(-3.0, 4.5));
		assert_eq!(c, Coordinates::new(-3.0, 4.5));
	}
}
