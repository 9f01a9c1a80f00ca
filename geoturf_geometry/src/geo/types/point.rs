use super::{Coordinates, MultiPointGeometry, traits};
use std::fmt::Debug;
use traits::SingleGeometryTrait;

/// Represents a single geographic point.
///
/// This is the simplest geometric type and also the element type returned by
/// coordinate extraction: every position of a larger geometry can be handed out
/// as a standalone `PointGeometry`.
#[derive(Clone, Copy, PartialEq)]
pub struct PointGeometry(pub Coordinates);

impl PointGeometry {
	/// Constructs a new `PointGeometry` from a `Coordinates` instance.
	#[must_use]
	pub fn new(c: Coordinates) -> Self {
		Self(c)
	}
	/// Constructs a point from longitude and latitude.
	#[must_use]
	pub fn from_lng_lat(longitude: f64, latitude: f64) -> Self {
		Self(Coordinates::new(longitude, latitude))
	}
	/// Returns the x component (longitude) of the point.
	#[must_use]
	pub fn x(&self) -> f64 {
		self.0.x()
	}
	/// Returns the y component (latitude) of the point.
	#[must_use]
	pub fn y(&self) -> f64 {
		self.0.y()
	}
	#[must_use]
	pub fn longitude(&self) -> f64 {
		self.0.longitude()
	}
	#[must_use]
	pub fn latitude(&self) -> f64 {
		self.0.latitude()
	}
	#[must_use]
	pub fn altitude(&self) -> Option<f64> {
		self.0.altitude()
	}
	/// Returns a reference to the underlying `Coordinates`.
	#[must_use]
	pub fn as_coord(&self) -> &Coordinates {
		&self.0
	}
}

impl SingleGeometryTrait<MultiPointGeometry> for PointGeometry {
	/// Wraps this single point into a `MultiPointGeometry`.
	fn into_multi(self) -> MultiPointGeometry {
		MultiPointGeometry(vec![self])
	}
}

impl Debug for PointGeometry {
	/// Formats the point as `[x, y]` for readability.
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		self.0.fmt(f)
	}
}

impl<T> From<T> for PointGeometry
where
	Coordinates: From<T>,
{
	/// Allows creating a `PointGeometry` from any type convertible into `Coordinates`, such as arrays or tuples.
	fn from(value: T) -> Self {
		Self(Coordinates::from(value))
	}
}
