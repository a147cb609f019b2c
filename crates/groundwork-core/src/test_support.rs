//! Geometry fixtures shared by unit tests.

use geojson::FeatureCollection;
use serde_json::{json, Value};

/// Meters per degree of longitude on the equator for the haversine radius.
const HAVERSINE_METERS_PER_DEGREE: f64 = 6_371_008.8 * std::f64::consts::PI / 180.0;

/// Meters per degree on the equatorial radius used for area.
const AREA_METERS_PER_DEGREE: f64 = 6_378_137.0 * std::f64::consts::PI / 180.0;

/// Relative comparison with a floor of 1.0 on the magnitude.
pub fn approx_eq(actual: f64, expected: f64, tolerance: f64) -> bool {
    (actual - expected).abs() <= tolerance * expected.abs().max(1.0)
}

/// Wrap a single GeoJSON geometry in a one-feature collection.
pub fn collection(geometry: Value) -> FeatureCollection {
    serde_json::from_value(json!({
        "type": "FeatureCollection",
        "features": [{ "type": "Feature", "properties": {}, "geometry": geometry }]
    }))
    .expect("valid feature collection")
}

/// A collection with nothing drawn.
pub fn empty_collection() -> FeatureCollection {
    serde_json::from_value(json!({ "type": "FeatureCollection", "features": [] }))
        .expect("valid feature collection")
}

/// A square of roughly `side_meters` on the equator.
pub fn square_collection(side_meters: f64) -> FeatureCollection {
    let d = side_meters / AREA_METERS_PER_DEGREE;
    collection(json!({
        "type": "Polygon",
        "coordinates": [[[0.0, 0.0], [d, 0.0], [d, d], [0.0, d], [0.0, 0.0]]]
    }))
}

/// A straight path of `length_meters` along the equator.
pub fn path_collection(length_meters: f64) -> FeatureCollection {
    let d = length_meters / HAVERSINE_METERS_PER_DEGREE;
    collection(json!({
        "type": "LineString",
        "coordinates": [[0.0, 0.0], [d, 0.0]]
    }))
}
