use crate::meta::CoordAll;
use geoturf_geometry::{GeoCollection, GeoFeature, Geometry};

/// Turns every position of every feature into its own `Point` feature.
///
/// Positions are taken in the same order as [`CoordAll`] yields them (polygon
/// rings without their closing coordinate). Each point feature copies the id and
/// properties of the feature it came from. Features without geometry contribute nothing.
pub fn explode(collection: &GeoCollection) -> GeoCollection {
	collection
		.iter()
		.flat_map(|feature| {
			feature.coord_all().into_iter().map(move |point| GeoFeature {
				id: feature.id.clone(),
				geometry: Some(Geometry::Point(point)),
				properties: feature.properties.clone(),
			})
		})
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use geoturf_geometry::{GeoValue, GeometryType};

	#[test]
	fn one_point_feature_per_position() {
		let mut feature = GeoFeature::new(Geometry::new_polygon(&[[[0, 0], [1, 0], [1, 1], [0, 0]]]));
		feature.set_id(GeoValue::from(7));
		feature.set_property("kind".to_string(), "triangle");
		let collection = GeoCollection::from(vec![
			feature,
			GeoFeature::new_empty(),
			GeoFeature::new(Geometry::new_line_string(&[[5, 5], [6, 6]])),
		]);

		let exploded = explode(&collection);
		assert_eq!(exploded.len(), 5);
		assert!(exploded.iter().all(|f| f.geometry_type() == Some(GeometryType::Point)));
		assert_eq!(exploded.features[0].id, Some(GeoValue::from(7)));
		assert_eq!(exploded.features[2].properties.get("kind"), Some(&GeoValue::from("triangle")));
		assert!(exploded.features[3].properties.is_empty());
		assert_eq!(exploded.features[4].geometry, Some(Geometry::new_point([6.0, 6.0])));
	}

	#[test]
	fn empty_collection() {
		assert!(explode(&GeoCollection::default()).is_empty());
	}
}
