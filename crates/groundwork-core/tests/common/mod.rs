#![allow(dead_code)]

use geojson::FeatureCollection;
use groundwork_core::{JobStore, JobStoreBuilder};
use serde_json::{json, Value};
use tempfile::TempDir;

/// Helper function to create a store backed by a temporary database
pub fn create_test_store() -> (TempDir, JobStore) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let store = open_store(&temp_dir);
    (temp_dir, store)
}

/// Open another store on the same database, like a second browser tab
pub fn open_store(temp_dir: &TempDir) -> JobStore {
    JobStoreBuilder::new()
        .with_database_path(Some(temp_dir.path().join("test.db")))
        .build()
        .expect("Failed to create job store")
}

pub fn feature_collection(geometries: &[Value]) -> FeatureCollection {
    let features: Vec<Value> = geometries
        .iter()
        .map(|geometry| json!({ "type": "Feature", "properties": {}, "geometry": geometry }))
        .collect();
    serde_json::from_value(json!({ "type": "FeatureCollection", "features": features }))
        .expect("valid feature collection")
}

/// A roughly 100 m straight path along the equator.
pub fn hundred_meter_path() -> FeatureCollection {
    let d = 100.0 / (6_371_008.8 * std::f64::consts::PI / 180.0);
    feature_collection(&[json!({
        "type": "LineString",
        "coordinates": [[0.0, 0.0], [d, 0.0]]
    })])
}

/// A small rectangle in London, Ontario.
pub fn driveway() -> FeatureCollection {
    feature_collection(&[json!({
        "type": "Polygon",
        "coordinates": [[
            [-81.2330, 42.9830],
            [-81.2327, 42.9830],
            [-81.2327, 42.9832],
            [-81.2330, 42.9832],
            [-81.2330, 42.9830]
        ]]
    })])
}
