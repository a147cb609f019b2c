//! Partial updates for stored jobs.
//!
//! A job's drawing, quote and address are frozen at submission; the status
//! is the only field that changes afterwards.

use serde_json::{Map, Value};

use super::{Job, JobStatus};

/// Fields to merge into an existing job; `None` leaves a field untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JobPatch {
    pub status: Option<JobStatus>,
}

impl JobPatch {
    /// A patch that only sets the status.
    pub fn status(status: JobStatus) -> Self {
        Self {
            status: Some(status),
        }
    }

    /// Whether the patch would change nothing.
    pub fn is_empty(&self) -> bool {
        self.status.is_none()
    }

    /// Merge the set fields into `job`.
    pub fn apply_to(&self, job: &mut Job) {
        if let Some(status) = self.status {
            job.status = status;
        }
    }

    /// Merge the set fields into a stored record, leaving every other key
    /// and its encoding as it was.
    pub fn apply_to_record(&self, record: &mut Map<String, Value>) {
        if let Some(status) = self.status {
            record.insert("status".to_string(), Value::from(status.as_str()));
        }
    }
}
