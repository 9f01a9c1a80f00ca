use approx::assert_abs_diff_eq;
use geoturf::{
	GeometryOperationError,
	conversion::{Unit, combine, convert_length, length_to_degrees, length_to_radians, radians_to_length},
	meta::CoordAll,
};
use geoturf_geometry::*;
use pretty_assertions::assert_eq;

const DELTA: f64 = 1e-10;

fn init_logger() {
	let _ = env_logger::builder().is_test(true).try_init();
}

/// Parses a unit name the way a caller reading configuration would.
fn unit(name: &str) -> Unit {
	name.parse().expect("unit name should be valid")
}

#[test]
fn literal_unit_fixtures() {
	assert_abs_diff_eq!(radians_to_length(1.0, unit("kilometers")), 6373.0, epsilon = DELTA);
	assert_abs_diff_eq!(radians_to_length(1.0, unit("miles")), 3960.0, epsilon = DELTA);
	assert_abs_diff_eq!(length_to_degrees(1.0, unit("radians")), 57.29577951308232, epsilon = DELTA);
	assert_abs_diff_eq!(
		convert_length(1.0, unit("miles"), Some(unit("kilometers"))),
		1.6093434343434343,
		epsilon = DELTA
	);
	assert_abs_diff_eq!(
		convert_length(1.0, unit("kilometers"), Some(unit("miles"))),
		0.6213714106386318,
		epsilon = DELTA
	);
}

#[test]
fn convert_length_defaults_to_kilometers() {
	for from in Unit::all() {
		assert_eq!(
			convert_length(3.5, from, None),
			convert_length(3.5, from, Some(Unit::Kilometers))
		);
	}
}

#[test]
fn unit_round_trip() {
	for unit in Unit::all() {
		for distance in [0.5, 1.0, 250.0, 40_075.0] {
			let back = radians_to_length(length_to_radians(distance, unit), unit);
			assert_abs_diff_eq!(back, distance, epsilon = distance * 1e-12);
			assert_abs_diff_eq!(convert_length(distance, unit, Some(unit)), distance, epsilon = distance * 1e-12);
		}
	}
}

#[test]
fn unknown_unit_name_is_a_geometry_operation_error() {
	let err = "furlongs".parse::<Unit>().unwrap_err();
	let err = err
		.downcast_ref::<GeometryOperationError>()
		.expect("should be a GeometryOperationError");
	assert!(err.message().contains("furlongs"));
}

#[test]
fn combine_two_points() {
	init_logger();
	let collection = GeoCollection::from(vec![
		GeoFeature::new(Geometry::Point(PointGeometry::from_lng_lat(-2.46, 27.6835))),
		GeoFeature::new(Geometry::Point(PointGeometry::from_lng_lat(41.83, 7.3624))),
	]);

	let Geometry::MultiPoint(multi) = combine(&collection).unwrap() else {
		panic!("expected a MultiPoint");
	};
	assert_eq!(multi.len(), 2);
	assert_abs_diff_eq!(multi.0[0].longitude(), -2.46, epsilon = DELTA);
	assert_abs_diff_eq!(multi.0[0].latitude(), 27.6835, epsilon = DELTA);
	assert_abs_diff_eq!(multi.0[1].longitude(), 41.83, epsilon = DELTA);
	assert_abs_diff_eq!(multi.0[1].latitude(), 7.3624, epsilon = DELTA);
}

#[test]
fn combine_keeps_multiplicity_and_nesting() {
	init_logger();
	let lines: Vec<Geometry> = (0..5)
		.map(|i| {
			let i = f64::from(i);
			Geometry::new_line_string(vec![[i, 0.0], [i, 1.0], [i, 2.0]])
		})
		.collect();
	let combined = combine(&GeoCollection::from_geometries(lines.clone())).unwrap();

	let Geometry::MultiLineString(multi) = combined else {
		panic!("expected a MultiLineString");
	};
	assert_eq!(multi.len(), lines.len());
	for (line, original) in multi.0.into_iter().zip(lines) {
		assert_eq!(Geometry::LineString(line), original);
	}
}

#[test]
fn combine_point_and_polygon_fails() {
	init_logger();
	let collection = GeoCollection::from_geometries(vec![
		Geometry::new_point([-2.46, 27.6835]),
		Geometry::new_polygon(vec![vec![
			[11.42578125, 16.636191878397664],
			[7.91015625, -9.102096738726443],
			[31.113281249999996, 17.644022027872726],
			[11.42578125, 16.636191878397664],
		]]),
	]);

	let err = combine(&collection).unwrap_err();
	let err = err.downcast_ref::<GeometryOperationError>().unwrap();
	assert!(
		err.message()
			.starts_with("Your FeatureCollection must be of all of the same geometry type.")
	);
}

#[test]
fn combined_points_extract_back_in_order() {
	let points: Vec<PointGeometry> = (0..10)
		.map(|i| PointGeometry::from_lng_lat(f64::from(i), -f64::from(i)))
		.collect();
	let collection = GeoCollection::from_geometries(points.iter().copied().map(Geometry::Point).collect());

	assert_eq!(collection.coord_all(), points);
	assert_eq!(combine(&collection).unwrap().coord_all(), points);
}
