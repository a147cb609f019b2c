//! Core library for the Groundwork service-quoting and dispatch tool.
//!
//! A customer draws an area or a path on a map; this crate turns the drawing
//! into a price, stores the submitted request as a job, and moves that job
//! through its lifecycle while keeping every view of the job list in sync.
//!
//! # Layers
//!
//! ```text
//! GeoJSON drawing ─▶ geometry ─▶ pricing ─▶ quote ─▶ draft::submit
//!                                                        │
//!             views ◀── change signal ◀── JobStore ◀─────┤
//!          (JobFeed)                        ▲            │
//!                                           └── lifecycle┘
//! ```
//!
//! - [`geometry`]: area and edge length of the active drawn shape
//! - [`pricing`]: the static rate table and the floored price function
//! - [`quote`]: rounding measurements and price into a [`Quote`]
//! - [`store`]: the persisted job collection plus change notification
//! - [`lifecycle`]: the job status state machine
//! - [`draft`]: the customer's in-progress request
//! - [`display`]: markdown formatting for terminals
//!
//! # Quick Start
//!
//! ```rust
//! use groundwork_core::{JobStoreBuilder, RequestDraft, ServiceType};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = JobStoreBuilder::new().in_memory().build()?;
//!
//! let drawing: geojson::FeatureCollection = serde_json::from_str(r#"{
//!     "type": "FeatureCollection",
//!     "features": [{
//!         "type": "Feature",
//!         "properties": {},
//!         "geometry": { "type": "LineString", "coordinates": [[0.0, 0.0], [0.0009, 0.0]] }
//!     }]
//! }"#)?;
//!
//! let mut draft = RequestDraft::new(ServiceType::Salt);
//! draft.set_geometry(drawing);
//! if let Some(quote) = draft.quote()? {
//!     println!("{quote}");
//! }
//! let job = draft.submit(&store)?;
//! assert_eq!(store.list_all()?[0].id, job.id);
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod display;
pub mod draft;
pub mod error;
pub mod geometry;
pub mod lifecycle;
pub mod models;
pub mod pricing;
pub mod quote;
pub mod storage;
pub mod store;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export commonly used types
pub use builder::JobStoreBuilder;
pub use display::{Currency, JobBoard, Jobs};
pub use draft::RequestDraft;
pub use error::{DispatchError, Result};
pub use geometry::compute_metrics;
pub use lifecycle::{JobAction, Lifecycle};
pub use models::{Job, JobPatch, JobStatus, Metrics, Quote, ServiceType};
pub use pricing::{estimate_price, Rate, RateTable};
pub use quote::build_quote;
pub use storage::{MemoryStorage, SqliteStorage, Storage};
pub use store::{JobFeed, JobStore, Subscription, CHANGE_EVENT};
