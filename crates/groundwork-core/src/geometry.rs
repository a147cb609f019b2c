//! Measurement of drawn shapes.
//!
//! Input is a GeoJSON feature collection in longitude/latitude degrees, as
//! produced by a map drawing surface. Only the first feature is measured:
//! the drawing surface keeps a single active shape and anything beyond the
//! first feature is ignored.
//!
//! - Polygon: spherical area of the rings, perimeter of every ring.
//! - LineString: zero area, total path length.
//!
//! Any other geometry type measures as zero. Distances use the haversine
//! formula on the mean earth radius; areas use the Chamberlain-Duquette
//! spherical approximation.

use geo::{ChamberlainDuquetteArea, Distance, Haversine, LineString, Polygon};
use geojson::{Feature, FeatureCollection, Value};
use log::{debug, warn};

use crate::{
    error::{DispatchError, Result},
    models::Metrics,
};

/// The feature that drives the quote, if anything has been drawn.
pub fn active_feature(collection: &FeatureCollection) -> Option<&Feature> {
    collection.features.first()
}

/// Measure the active feature of a collection.
///
/// An empty collection yields [`Metrics::ZERO`].
///
/// # Errors
///
/// Returns `DispatchError::InvalidGeometry` when the active feature cannot be
/// converted into a planar geometry or carries non-finite coordinates.
pub fn compute_metrics(collection: &FeatureCollection) -> Result<Metrics> {
    match active_feature(collection) {
        Some(feature) => measure_feature(feature),
        None => Ok(Metrics::ZERO),
    }
}

/// Measure a single feature.
///
/// # Errors
///
/// See [`compute_metrics`].
pub fn measure_feature(feature: &Feature) -> Result<Metrics> {
    let Some(geometry) = &feature.geometry else {
        warn!("Feature has no geometry; measuring as zero");
        return Ok(Metrics::ZERO);
    };

    if !positions_valid(&geometry.value) {
        return Err(DispatchError::invalid_geometry(
            "every position needs a finite longitude and latitude",
        ));
    }

    let shape: geo::Geometry<f64> = geometry
        .clone()
        .try_into()
        .map_err(|e: geojson::Error| DispatchError::invalid_geometry(e.to_string()))?;

    let metrics = match shape {
        geo::Geometry::Polygon(polygon) => {
            Metrics::from_meters(polygon_area(&polygon), polygon_perimeter(&polygon))
        }
        geo::Geometry::LineString(path) => Metrics::from_meters(0.0, path_length(&path)),
        other => {
            warn!(
                "Unsupported geometry type {}; measuring as zero",
                geometry_type_name(&other)
            );
            Metrics::ZERO
        }
    };

    debug!(
        "Measured feature: {:.2} m2, {:.2} m edge",
        metrics.area_square_meters, metrics.edge_meters
    );
    Ok(metrics)
}

/// Spherical area of a polygon in square meters, holes subtracted.
pub fn polygon_area(polygon: &Polygon<f64>) -> f64 {
    polygon.chamberlain_duquette_unsigned_area()
}

/// Perimeter of a polygon in meters, including the rings of any holes.
pub fn polygon_perimeter(polygon: &Polygon<f64>) -> f64 {
    std::iter::once(polygon.exterior())
        .chain(polygon.interiors())
        .map(path_length)
        .sum()
}

/// Haversine length of a path in meters.
pub fn path_length(path: &LineString<f64>) -> f64 {
    path.lines()
        .map(|segment| Haversine.distance(segment.start_point(), segment.end_point()))
        .sum()
}

fn positions_valid(value: &Value) -> bool {
    fn valid(position: &[f64]) -> bool {
        position.len() >= 2 && position[..2].iter().all(|c| c.is_finite())
    }

    match value {
        Value::Point(position) => valid(position),
        Value::MultiPoint(positions) | Value::LineString(positions) => {
            positions.iter().all(|p| valid(p))
        }
        Value::MultiLineString(lines) | Value::Polygon(lines) => {
            lines.iter().flatten().all(|p| valid(p))
        }
        Value::MultiPolygon(polygons) => polygons.iter().flatten().flatten().all(|p| valid(p)),
        Value::GeometryCollection(geometries) => {
            geometries.iter().all(|g| positions_valid(&g.value))
        }
    }
}

fn geometry_type_name(geometry: &geo::Geometry<f64>) -> &'static str {
    match geometry {
        geo::Geometry::Point(_) => "Point",
        geo::Geometry::Line(_) => "Line",
        geo::Geometry::LineString(_) => "LineString",
        geo::Geometry::Polygon(_) => "Polygon",
        geo::Geometry::MultiPoint(_) => "MultiPoint",
        geo::Geometry::MultiLineString(_) => "MultiLineString",
        geo::Geometry::MultiPolygon(_) => "MultiPolygon",
        geo::Geometry::GeometryCollection(_) => "GeometryCollection",
        geo::Geometry::Rect(_) => "Rect",
        geo::Geometry::Triangle(_) => "Triangle",
    }
}
