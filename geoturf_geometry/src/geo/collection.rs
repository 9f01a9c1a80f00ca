use super::{GeoFeature, Geometry};

/// An ordered list of features.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GeoCollection {
	pub features: Vec<GeoFeature>,
}

impl GeoCollection {
	pub fn from(features: Vec<GeoFeature>) -> Self {
		Self { features }
	}

	/// A collection holding exactly one feature.
	pub fn from_feature(feature: GeoFeature) -> Self {
		Self {
			features: vec![feature],
		}
	}

	/// Wraps every geometry into a property-less feature, keeping the order.
	pub fn from_geometries(geometries: Vec<Geometry>) -> Self {
		Self {
			features: geometries.into_iter().map(GeoFeature::new).collect(),
		}
	}

	pub fn len(&self) -> usize {
		self.features.len()
	}

	pub fn is_empty(&self) -> bool {
		self.features.is_empty()
	}

	pub fn iter(&self) -> std::slice::Iter<'_, GeoFeature> {
		self.features.iter()
	}
}

impl FromIterator<GeoFeature> for GeoCollection {
	fn from_iter<I: IntoIterator<Item = GeoFeature>>(iter: I) -> Self {
		Self {
			features: iter.into_iter().collect(),
		}
	}
}

impl<'a> IntoIterator for &'a GeoCollection {
	type Item = &'a GeoFeature;
	type IntoIter = std::slice::Iter<'a, GeoFeature>;
	fn into_iter(self) -> Self::IntoIter {
		self.features.iter()
	}
}
