//! Quote snapshot model.

use serde::{Deserialize, Serialize};

/// Display-ready estimate for the current shape and service.
///
/// Measurements are rounded to whole units and the price to cents. A quote
/// carries no identity; it is recomputed whenever its inputs change and is
/// copied into a [`super::Job`] on submission.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub area_m2: u64,
    pub area_ft2: u64,
    pub edge_m: u64,
    pub edge_ft: u64,
    pub price: f64,
}
