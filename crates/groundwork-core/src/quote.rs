//! Quote assembly.
//!
//! Pricing runs on the raw measurements; rounding to whole units and cents
//! happens only here, so a stored job always carries whole-unit metrics and a
//! cent-precision price.

use geojson::FeatureCollection;
use log::debug;

use crate::{
    error::Result,
    geometry::compute_metrics,
    models::{Metrics, Quote, ServiceType},
    pricing::{estimate_price, round_to_cents},
};

/// Build the quote for a service and the current drawing.
///
/// Returns `Ok(None)` when nothing has been drawn; submission must be
/// disabled in that state.
///
/// # Errors
///
/// Propagates `DispatchError::InvalidGeometry` from measurement.
pub fn build_quote(service: ServiceType, geometry: &FeatureCollection) -> Result<Option<Quote>> {
    if geometry.features.is_empty() {
        return Ok(None);
    }

    let metrics = compute_metrics(geometry)?;
    let quote = quote_from_metrics(service, &metrics);
    debug!(
        "Quoted {} for {} m2 / {} m: {:.2}",
        service.as_str(),
        quote.area_m2,
        quote.edge_m,
        quote.price
    );
    Ok(Some(quote))
}

/// Price raw metrics and round them for display.
pub fn quote_from_metrics(service: ServiceType, metrics: &Metrics) -> Quote {
    let price = estimate_price(service, metrics.area_square_meters, metrics.edge_meters);
    Quote {
        area_m2: whole_units(metrics.area_square_meters),
        area_ft2: whole_units(metrics.area_square_feet),
        edge_m: whole_units(metrics.edge_meters),
        edge_ft: whole_units(metrics.edge_feet),
        price: round_to_cents(price),
    }
}

fn whole_units(value: f64) -> u64 {
    value.max(0.0).round() as u64
}
