//! Service type enumeration.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DispatchError;

/// The fixed set of services a customer can request.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ServiceType {
    /// Snow plowing
    Snow,

    /// Lawn mowing
    Lawn,

    /// Leaf cleanup
    Leaves,

    /// Salting of walkways and driveways
    Salt,
}

impl ServiceType {
    /// Every service, in rate-table order.
    pub const ALL: [ServiceType; 4] = [
        ServiceType::Snow,
        ServiceType::Lawn,
        ServiceType::Leaves,
        ServiceType::Salt,
    ];

    /// Convert to the persisted string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceType::Snow => "snow",
            ServiceType::Lawn => "lawn",
            ServiceType::Leaves => "leaves",
            ServiceType::Salt => "salt",
        }
    }
}

impl FromStr for ServiceType {
    type Err = DispatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "snow" => Ok(ServiceType::Snow),
            "lawn" => Ok(ServiceType::Lawn),
            "leaves" => Ok(ServiceType::Leaves),
            "salt" => Ok(ServiceType::Salt),
            _ => Err(DispatchError::UnknownService {
                name: s.to_string(),
            }),
        }
    }
}
