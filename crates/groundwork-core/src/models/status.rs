//! Job status enumeration.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Where a job sits in its lifecycle.
///
/// Transition rules live in [`crate::lifecycle`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "camelCase")]
pub enum JobStatus {
    /// Submitted and waiting for a contractor
    #[default]
    Open,

    /// Accepted by a contractor
    Assigned,

    /// Work has started
    InProgress,

    /// Work is done; terminal
    Completed,
}

impl JobStatus {
    /// Every status, in lifecycle order.
    pub const ALL: [JobStatus; 4] = [
        JobStatus::Open,
        JobStatus::Assigned,
        JobStatus::InProgress,
        JobStatus::Completed,
    ];

    /// Convert to the persisted string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            JobStatus::Open => "open",
            JobStatus::Assigned => "assigned",
            JobStatus::InProgress => "inProgress",
            JobStatus::Completed => "completed",
        }
    }

    /// Human-readable heading used when grouping jobs.
    pub fn label(&self) -> &'static str {
        match self {
            JobStatus::Open => "Open Jobs",
            JobStatus::Assigned => "Assigned",
            JobStatus::InProgress => "In Progress",
            JobStatus::Completed => "Completed",
        }
    }
}

impl FromStr for JobStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "open" => Ok(JobStatus::Open),
            "assigned" => Ok(JobStatus::Assigned),
            "inprogress" | "in_progress" | "in-progress" => Ok(JobStatus::InProgress),
            "completed" => Ok(JobStatus::Completed),
            _ => Err(format!("Invalid job status: {s}")),
        }
    }
}
