//! Data models for quotes and jobs.
//!
//! Display implementations for these models live in
//! [`crate::display::models`] so presentation stays out of the data
//! definitions.

pub mod job;
pub mod metrics;
pub mod patch;
pub mod quote;
pub mod service;
pub mod status;


pub use job::{new_job_id, Job};
pub use metrics::{Metrics, FEET_PER_METER, SQUARE_FEET_PER_SQUARE_METER};
pub use patch::JobPatch;
pub use quote::Quote;
pub use service::ServiceType;
pub use status::JobStatus;
