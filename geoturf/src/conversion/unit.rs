//! This module defines the `Unit` enum: the closed set of length units (plus the
//! angular units radians and degrees) understood by the distance conversions.
//!
//! Every unit maps to a fixed factor, the length of one radian of arc on the
//! earth expressed in that unit. The table is constant and never recomputed.
//!
//! # Examples
//!
//! ```
//! use geoturf::conversion::Unit;
//!
//! assert_eq!(Unit::Kilometers.factor(), 6373.0);
//! assert_eq!(Unit::parse_str("metres").unwrap(), Unit::Meters);
//! assert!(Unit::parse_str("furlongs").is_err());
//! ```

use crate::GeometryOperationError;
use anyhow::{Result, bail};
#[cfg(feature = "cli")]
use clap::ValueEnum;
use enumset::{EnumSet, EnumSetType};
use itertools::Itertools;
use std::{fmt::Display, str::FromStr};

/// A unit of length, or one of the angular units `Radians` and `Degrees`.
#[cfg_attr(feature = "cli", derive(ValueEnum))]
#[derive(Debug, EnumSetType, Hash)]
pub enum Unit {
	Radians,
	Degrees,
	Kilometers,
	Miles,
	#[cfg_attr(feature = "cli", value(name = "nauticalmiles"))]
	NauticalMiles,
	Meters,
	Centimeters,
	Feet,
	Inches,
	Yards,
}

impl Unit {
	/// Length of one radian of great-circle arc, expressed in this unit.
	pub fn factor(&self) -> f64 {
		match self {
			Unit::Radians => 1.0,
			Unit::Degrees => 57.2957795,
			Unit::Kilometers => 6373.0,
			Unit::Miles => 3960.0,
			Unit::NauticalMiles => 3441.145,
			Unit::Meters => 6373000.0,
			Unit::Centimeters => 6.373e8,
			Unit::Feet => 20908792.65,
			Unit::Inches => 250905600.0,
			Unit::Yards => 6969600.0,
		}
	}

	pub fn as_str(&self) -> &'static str {
		match self {
			Unit::Radians => "radians",
			Unit::Degrees => "degrees",
			Unit::Kilometers => "kilometers",
			Unit::Miles => "miles",
			Unit::NauticalMiles => "nauticalmiles",
			Unit::Meters => "meters",
			Unit::Centimeters => "centimeters",
			Unit::Feet => "feet",
			Unit::Inches => "inches",
			Unit::Yards => "yards",
		}
	}

	/// All recognized units.
	pub fn all() -> EnumSet<Unit> {
		EnumSet::all()
	}

	/// Parses a unit name. Matching ignores case and surrounding whitespace, and
	/// accepts the British spellings `metres`, `kilometres` and `centimetres`.
	///
	/// Fails with [`GeometryOperationError`] for any other name.
	pub fn parse_str(value: &str) -> Result<Self> {
		Ok(match value.trim().to_lowercase().as_str() {
			"radians" => Unit::Radians,
			"degrees" => Unit::Degrees,
			"kilometers" | "kilometres" => Unit::Kilometers,
			"miles" => Unit::Miles,
			"nauticalmiles" => Unit::NauticalMiles,
			"meters" | "metres" => Unit::Meters,
			"centimeters" | "centimetres" => Unit::Centimeters,
			"feet" => Unit::Feet,
			"inches" => Unit::Inches,
			"yards" => Unit::Yards,
			_ => bail!(GeometryOperationError::new(format!(
				"invalid unit '{value}', expected one of: {}",
				Unit::all().iter().map(|unit| unit.as_str()).join(", ")
			))),
		})
	}
}

/// Kilometers, the target unit of [`convert_length`](super::convert_length) when none is given.
impl Default for Unit {
	fn default() -> Self {
		Unit::Kilometers
	}
}

impl Display for Unit {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for Unit {
	type Err = anyhow::Error;

	fn from_str(s: &str) -> Result<Self> {
		Unit::parse_str(s)
	}
}
