//! Price estimation from service type and measurements.

use serde::Serialize;

use crate::{error::Result, models::ServiceType};

/// Per-service pricing: a base fee plus per-unit charges.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Rate {
    /// Flat fee and minimum charge
    pub base: f64,
    /// Charge per square meter of area
    pub per_area_unit: f64,
    /// Charge per meter of edge
    pub per_edge_unit: f64,
}

impl ServiceType {
    /// The static rate record for this service.
    pub fn rate(&self) -> Rate {
        match self {
            ServiceType::Snow => Rate {
                base: 25.0,
                per_area_unit: 0.02,
                per_edge_unit: 0.30,
            },
            ServiceType::Lawn => Rate {
                base: 20.0,
                per_area_unit: 0.015,
                per_edge_unit: 0.0,
            },
            ServiceType::Leaves => Rate {
                base: 15.0,
                per_area_unit: 0.012,
                per_edge_unit: 0.0,
            },
            ServiceType::Salt => Rate {
                base: 10.0,
                per_area_unit: 0.008,
                per_edge_unit: 0.10,
            },
        }
    }
}

/// The full rate table, in service order.
#[derive(Debug, Clone, PartialEq)]
pub struct RateTable(pub Vec<(ServiceType, Rate)>);

impl RateTable {
    /// Every service with its rate.
    pub fn standard() -> Self {
        Self(
            ServiceType::ALL
                .iter()
                .map(|service| (*service, service.rate()))
                .collect(),
        )
    }
}

/// Estimate the price of a job, unrounded.
///
/// `base + per_area_unit * area + per_edge_unit * edge`, never below `base`.
/// Callers pass non-negative measurements.
pub fn estimate_price(service: ServiceType, area_square_meters: f64, edge_meters: f64) -> f64 {
    let rate = service.rate();
    let raw = rate.base + rate.per_area_unit * area_square_meters + rate.per_edge_unit * edge_meters;
    raw.max(rate.base)
}

/// Estimate the price for a service given by name.
///
/// # Errors
///
/// Returns `DispatchError::UnknownService` if `service` is not in the rate
/// table.
pub fn estimate_price_named(service: &str, area_square_meters: f64, edge_meters: f64) -> Result<f64> {
    let service: ServiceType = service.parse()?;
    Ok(estimate_price(service, area_square_meters, edge_meters))
}

/// Round a currency amount to cents.
pub fn round_to_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DispatchError;

    #[test]
    fn test_zero_measurements_cost_exactly_base() {
        for service in ServiceType::ALL {
            assert_eq!(estimate_price(service, 0.0, 0.0), service.rate().base);
        }
    }

    #[test]
    fn test_price_never_below_base() {
        let samples = [0.0, 0.5, 1.0, 12.5, 500.0, 10_000.0, 1e7];
        for service in ServiceType::ALL {
            for area in samples {
                for edge in samples {
                    assert!(estimate_price(service, area, edge) >= service.rate().base);
                }
            }
        }
    }

    #[test]
    fn test_snow_area_scenario() {
        let price = estimate_price(ServiceType::Snow, 500.0, 0.0);
        assert_eq!(round_to_cents(price), 35.0);
    }

    #[test]
    fn test_salt_path_scenario() {
        let price = estimate_price(ServiceType::Salt, 0.0, 100.0);
        assert_eq!(round_to_cents(price), 20.0);
    }

    #[test]
    fn test_lawn_degenerate_shape_gets_floor() {
        assert_eq!(estimate_price(ServiceType::Lawn, 0.0, 0.0), 20.0);
    }

    #[test]
    fn test_lawn_ignores_edge_length() {
        assert_eq!(
            estimate_price(ServiceType::Lawn, 100.0, 0.0),
            estimate_price(ServiceType::Lawn, 100.0, 250.0)
        );
    }

    #[test]
    fn test_named_service_lookup() {
        assert_eq!(estimate_price_named("leaves", 0.0, 0.0).unwrap(), 15.0);

        let err = estimate_price_named("gravel", 10.0, 10.0).unwrap_err();
        assert!(matches!(err, DispatchError::UnknownService { .. }));
    }

    #[test]
    fn test_round_to_cents() {
        assert_eq!(round_to_cents(12.344), 12.34);
        assert_eq!(round_to_cents(12.345_1), 12.35);
        assert_eq!(round_to_cents(20.0), 20.0);
    }

    #[test]
    fn test_rate_table_lists_every_service() {
        let table = RateTable::standard();
        assert_eq!(table.0.len(), 4);
        assert_eq!(table.0[0].0, ServiceType::Snow);
        assert_eq!(table.0[3].1.per_edge_unit, 0.10);
    }
}
