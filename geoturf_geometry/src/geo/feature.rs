use super::*;

/// A geometry (or none) plus opaque properties and an optional id.
#[derive(Clone, Debug, PartialEq)]
pub struct GeoFeature {
	pub id: Option<GeoValue>,
	pub geometry: Option<Geometry>,
	pub properties: GeoProperties,
}

impl GeoFeature {
	pub fn new(geometry: Geometry) -> Self {
		Self {
			id: None,
			geometry: Some(geometry),
			properties: GeoProperties::new(),
		}
	}

	/// A feature without geometry, as allowed by GeoJSON (`"geometry": null`).
	pub fn new_empty() -> Self {
		Self {
			id: None,
			geometry: None,
			properties: GeoProperties::new(),
		}
	}

	pub fn with_properties(geometry: Geometry, properties: GeoProperties) -> Self {
		Self {
			id: None,
			geometry: Some(geometry),
			properties,
		}
	}

	pub fn set_id(&mut self, id: GeoValue) {
		self.id = Some(id);
	}

	pub fn set_properties(&mut self, properties: GeoProperties) {
		self.properties = properties;
	}

	pub fn set_property<T>(&mut self, key: String, value: T)
	where
		GeoValue: From<T>,
	{
		self.properties.insert(key, GeoValue::from(value));
	}

	/// The kind of the contained geometry, or `None` for a feature without geometry.
	pub fn geometry_type(&self) -> Option<GeometryType> {
		self.geometry.as_ref().map(Geometry::geometry_type)
	}

	pub fn new_example() -> Self {
		Self {
			id: Some(GeoValue::from(13)),
			geometry: Some(Geometry::new_example()),
			properties: GeoProperties::from(vec![
				("name", GeoValue::from("Nice")),
				("population", GeoValue::from(348085)),
				("is_nice", GeoValue::from(true)),
			]),
		}
	}
}

impl From<Geometry> for GeoFeature {
	fn from(geometry: Geometry) -> Self {
		GeoFeature::new(geometry)
	}
}
