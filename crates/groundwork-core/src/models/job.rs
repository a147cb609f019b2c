//! Job model definition and related functionality.

use geojson::FeatureCollection;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{JobStatus, Quote, ServiceType};

/// A submitted service request.
///
/// Created once with [`JobStatus::Open`]; afterwards only `status` changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    /// Opaque unique token
    pub id: String,

    /// Submission time (UTC)
    pub created_at: Timestamp,

    /// Requested service
    pub service: ServiceType,

    /// Free-text service address; empty when the customer gave none
    #[serde(default)]
    pub address: String,

    /// Rounded measurements and price at submission time
    #[serde(flatten)]
    pub quote: Quote,

    /// Lifecycle status
    #[serde(default)]
    pub status: JobStatus,

    /// The drawn shapes that produced the quote, kept verbatim
    pub geometry: FeatureCollection,
}

impl Job {
    /// Build a fresh open job stamped with a new id and the current time.
    pub fn new(
        service: ServiceType,
        address: impl Into<String>,
        quote: Quote,
        geometry: FeatureCollection,
    ) -> Self {
        Self {
            id: new_job_id(),
            created_at: Timestamp::now(),
            service,
            address: address.into(),
            quote,
            status: JobStatus::Open,
            geometry,
        }
    }

    /// The address, if one was given.
    pub fn address(&self) -> Option<&str> {
        let trimmed = self.address.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed)
        }
    }
}

/// Generate a new job identifier.
pub fn new_job_id() -> String {
    Uuid::new_v4().simple().to_string()
}
