//! Customer-side request state.
//!
//! A [`RequestDraft`] holds what the customer has chosen so far: a service,
//! an optional address and the drawn shapes. The quote is derived from that
//! state on demand, and submission turns it into a stored [`Job`].

use geojson::FeatureCollection;
use log::info;

use crate::{
    error::{DispatchError, Result},
    models::{Job, Quote, ServiceType},
    quote::build_quote,
    store::JobStore,
};

/// The in-progress service request.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestDraft {
    service: ServiceType,
    address: String,
    geometry: FeatureCollection,
}

impl RequestDraft {
    /// A draft for `service` with nothing drawn.
    pub fn new(service: ServiceType) -> Self {
        Self {
            service,
            address: String::new(),
            geometry: empty_collection(),
        }
    }

    pub fn service(&self) -> ServiceType {
        self.service
    }

    pub fn set_service(&mut self, service: ServiceType) {
        self.service = service;
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn set_address(&mut self, address: impl Into<String>) {
        self.address = address.into();
    }

    pub fn geometry(&self) -> &FeatureCollection {
        &self.geometry
    }

    /// Replace the drawn shapes.
    pub fn set_geometry(&mut self, geometry: FeatureCollection) {
        self.geometry = geometry;
    }

    /// Remove every drawn shape.
    pub fn clear_geometry(&mut self) {
        self.geometry = empty_collection();
    }

    /// The quote for the current service and drawing, if anything is drawn.
    ///
    /// # Errors
    ///
    /// Returns `DispatchError::InvalidGeometry` if the drawing cannot be
    /// measured.
    pub fn quote(&self) -> Result<Option<Quote>> {
        build_quote(self.service, &self.geometry)
    }

    /// Submit the draft as a new open job.
    ///
    /// On success the drawing and address are cleared and the service is
    /// kept. On failure the draft is left exactly as it was, so the customer
    /// can retry without redrawing.
    ///
    /// # Errors
    ///
    /// Returns `DispatchError::InvalidGeometry` if nothing is drawn, and
    /// `DispatchError::StorageWrite` if the store rejects the job.
    pub fn submit(&mut self, store: &JobStore) -> Result<Job> {
        let quote = self
            .quote()?
            .ok_or_else(|| DispatchError::invalid_geometry("nothing drawn yet"))?;

        let job = Job::new(
            self.service,
            self.address.trim(),
            quote,
            self.geometry.clone(),
        );
        store.create(job.clone())?;
        info!(
            "Submitted {} request {} at {}",
            job.service.as_str(),
            job.id,
            crate::display::Currency(job.quote.price)
        );

        self.clear_geometry();
        self.address.clear();
        Ok(job)
    }
}

fn empty_collection() -> FeatureCollection {
    FeatureCollection {
        bbox: None,
        features: Vec::new(),
        foreign_members: None,
    }
}
