//! Result wrapper types for displaying operation outcomes.

use std::fmt;

use crate::models::{Job, JobStatus};

/// Wrapper type for displaying the result of a submission.
pub struct CreateResult<T> {
    pub resource: T,
}

impl<T> CreateResult<T> {
    /// Create a new CreateResult wrapper.
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for CreateResult<Job> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Request submitted with ID: {}", self.resource.id)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying a status change.
pub struct TransitionResult {
    pub from: JobStatus,
    pub job: Job,
}

impl TransitionResult {
    pub fn new(from: JobStatus, job: Job) -> Self {
        Self { from, job }
    }
}

impl fmt::Display for TransitionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Job {} moved from {} to {}",
            self.job.id, self.from, self.job.status
        )?;
        writeln!(f)?;
        write!(f, "{}", self.job)
    }
}

/// Wrapper type for displaying how many jobs a clear removed.
pub struct ClearResult {
    pub removed: usize,
}

impl fmt::Display for ClearResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.removed {
            0 => writeln!(f, "No jobs to remove."),
            1 => writeln!(f, "Removed 1 job."),
            n => writeln!(f, "Removed {n} jobs."),
        }
    }
}
