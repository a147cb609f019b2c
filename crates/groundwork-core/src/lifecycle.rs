//! Job lifecycle state machine.
//!
//! ```text
//!            accept            start              complete
//!   open ───────────▶ assigned ──────▶ inProgress ─────────▶ completed
//!    ▲                   │                 │
//!    └──── unassign ─────┴─────────────────┘
//! ```
//!
//! `completed` is terminal. Any edge not drawn above is rejected with
//! `DispatchError::InvalidTransition` and leaves the stored job untouched.

use std::str::FromStr;

use log::{debug, info};

use crate::{
    error::{DispatchError, Result},
    models::{Job, JobPatch, JobStatus},
    store::JobStore,
};

/// A contractor action offered for a job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JobAction {
    /// open → assigned
    Accept,
    /// assigned → inProgress
    Start,
    /// inProgress → completed
    Complete,
    /// assigned | inProgress → open
    Unassign,
}

impl JobAction {
    /// The status this action moves a job to.
    pub fn target(&self) -> JobStatus {
        match self {
            JobAction::Accept => JobStatus::Assigned,
            JobAction::Start => JobStatus::InProgress,
            JobAction::Complete => JobStatus::Completed,
            JobAction::Unassign => JobStatus::Open,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            JobAction::Accept => "accept",
            JobAction::Start => "start",
            JobAction::Complete => "complete",
            JobAction::Unassign => "unassign",
        }
    }
}

impl FromStr for JobAction {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "accept" => Ok(JobAction::Accept),
            "start" => Ok(JobAction::Start),
            "complete" => Ok(JobAction::Complete),
            "unassign" => Ok(JobAction::Unassign),
            _ => Err(format!("Invalid job action: {s}")),
        }
    }
}

impl JobStatus {
    /// Statuses reachable from this one in a single step.
    pub fn allowed_transitions(&self) -> &'static [JobStatus] {
        match self {
            JobStatus::Open => &[JobStatus::Assigned],
            JobStatus::Assigned => &[JobStatus::InProgress, JobStatus::Open],
            JobStatus::InProgress => &[JobStatus::Completed, JobStatus::Open],
            JobStatus::Completed => &[],
        }
    }

    /// Actions a contractor is offered for a job in this status.
    pub fn available_actions(&self) -> &'static [JobAction] {
        match self {
            JobStatus::Open => &[JobAction::Accept],
            JobStatus::Assigned => &[JobAction::Start, JobAction::Unassign],
            JobStatus::InProgress => &[JobAction::Complete, JobAction::Unassign],
            JobStatus::Completed => &[],
        }
    }

    pub fn can_transition_to(&self, to: JobStatus) -> bool {
        self.allowed_transitions().contains(&to)
    }

    pub fn is_terminal(&self) -> bool {
        self.allowed_transitions().is_empty()
    }

    /// Validate a move to `to`.
    ///
    /// # Errors
    ///
    /// Returns `DispatchError::InvalidTransition` if the edge is not in the
    /// transition table.
    pub fn transition(self, to: JobStatus) -> Result<JobStatus> {
        if self.can_transition_to(to) {
            Ok(to)
        } else {
            Err(DispatchError::InvalidTransition { from: self, to })
        }
    }
}

/// Applies validated status transitions to stored jobs.
pub struct Lifecycle;

impl Lifecycle {
    /// Move the job with `id` to `to`.
    ///
    /// The current status is read from the store, checked against the
    /// transition table, and only the `status` field is written back.
    /// Returns the updated job, or `None` if no job has that id.
    ///
    /// # Errors
    ///
    /// Returns `DispatchError::InvalidTransition` for edges outside the
    /// table, and storage errors from the underlying write.
    pub fn apply(store: &JobStore, id: &str, to: JobStatus) -> Result<Option<Job>> {
        let Some(job) = store.get(id)? else {
            debug!("Transition to {} ignored: no job {id}", to.as_str());
            return Ok(None);
        };

        let from = job.status;
        from.transition(to)?;
        store.update(id, &JobPatch::status(to))?;
        info!("Job {id} moved from {} to {}", from.as_str(), to.as_str());

        store.get(id)
    }

    /// Perform a named contractor action on the job with `id`.
    ///
    /// # Errors
    ///
    /// See [`Lifecycle::apply`].
    pub fn perform(store: &JobStore, id: &str, action: JobAction) -> Result<Option<Job>> {
        Self::apply(store, id, action.target())
    }
}
