use super::Unit;
use std::f64::consts::PI;

/// Converts a distance along the earth's surface into radians of arc.
pub fn length_to_radians(distance: f64, unit: Unit) -> f64 {
	distance / unit.factor()
}

/// Converts radians of arc into a distance along the earth's surface.
pub fn radians_to_length(radians: f64, unit: Unit) -> f64 {
	radians * unit.factor()
}

/// Converts a distance along the earth's surface into degrees of arc.
pub fn length_to_degrees(distance: f64, unit: Unit) -> f64 {
	radians_to_degrees(length_to_radians(distance, unit))
}

/// Converts a distance from one unit into another, through radians.
///
/// `to` defaults to [`Unit::Kilometers`].
pub fn convert_length(distance: f64, from: Unit, to: Option<Unit>) -> f64 {
	radians_to_length(length_to_radians(distance, from), to.unwrap_or_default())
}

/// Converts radians into degrees. The angle is first reduced modulo one full turn.
pub fn radians_to_degrees(radians: f64) -> f64 {
	(radians % (2.0 * PI)) * 180.0 / PI
}

/// Converts degrees into radians. The angle is first reduced modulo 360°.
pub fn degrees_to_radians(degrees: f64) -> f64 {
	(degrees % 360.0) * PI / 180.0
}
