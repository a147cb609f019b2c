//! Raw geometry measurements.

use serde::{Deserialize, Serialize};

/// Square feet in one square meter.
pub const SQUARE_FEET_PER_SQUARE_METER: f64 = 10.7639;

/// Feet in one meter.
pub const FEET_PER_METER: f64 = 3.28084;

/// Area and edge length of a drawn shape, unrounded.
///
/// The imperial fields are always derived from the metric ones; build values
/// through [`Metrics::from_meters`] rather than setting fields by hand.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metrics {
    pub area_square_meters: f64,
    pub area_square_feet: f64,
    pub edge_meters: f64,
    pub edge_feet: f64,
}

impl Metrics {
    /// All-zero metrics: the "nothing drawn yet" state.
    pub const ZERO: Metrics = Metrics {
        area_square_meters: 0.0,
        area_square_feet: 0.0,
        edge_meters: 0.0,
        edge_feet: 0.0,
    };

    /// Derive the full set of measurements from metric area and edge length.
    ///
    /// Negative inputs are clamped to zero.
    pub fn from_meters(area_square_meters: f64, edge_meters: f64) -> Self {
        let area = area_square_meters.max(0.0);
        let edge = edge_meters.max(0.0);
        Self {
            area_square_meters: area,
            area_square_feet: area * SQUARE_FEET_PER_SQUARE_METER,
            edge_meters: edge,
            edge_feet: edge * FEET_PER_METER,
        }
    }

    /// Whether the shape measured nothing at all.
    pub fn is_zero(&self) -> bool {
        self.area_square_meters == 0.0 && self.edge_meters == 0.0
    }
}
