//! Collection wrapper types for displaying groups of jobs.

use std::{fmt, ops::Index};

use crate::models::{Job, JobStatus};

/// Newtype wrapper for displaying a flat list of jobs.
///
/// ```rust
/// use groundwork_core::display::Jobs;
///
/// let jobs = Jobs(Vec::new());
/// assert_eq!(jobs.to_string(), "No jobs found.\n");
/// ```
pub struct Jobs(pub Vec<Job>);

impl Jobs {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Job> {
        self.0.iter()
    }
}

impl Index<usize> for Jobs {
    type Output = Job;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for Jobs {
    type Item = Job;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl fmt::Display for Jobs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No jobs found.")
        } else {
            for job in &self.0 {
                write!(f, "{job}")?;
            }
            Ok(())
        }
    }
}

/// Jobs grouped by status in lifecycle order, each group newest first.
#[derive(Debug, Clone, PartialEq)]
pub struct JobBoard {
    groups: Vec<(JobStatus, Vec<Job>)>,
}

impl JobBoard {
    /// Group `jobs`, keeping their relative order within each status.
    pub fn from_jobs(jobs: Vec<Job>) -> Self {
        let mut groups: Vec<(JobStatus, Vec<Job>)> = JobStatus::ALL
            .iter()
            .map(|status| (*status, Vec::new()))
            .collect();

        for job in jobs {
            if let Some((_, group)) = groups.iter_mut().find(|(status, _)| *status == job.status) {
                group.push(job);
            }
        }

        Self { groups }
    }

    /// Jobs currently in `status`.
    pub fn group(&self, status: JobStatus) -> &[Job] {
        self.groups
            .iter()
            .find(|(s, _)| *s == status)
            .map(|(_, jobs)| jobs.as_slice())
            .unwrap_or(&[])
    }

    /// Total number of jobs on the board.
    pub fn total(&self) -> usize {
        self.groups.iter().map(|(_, jobs)| jobs.len()).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (JobStatus, &[Job])> {
        self.groups
            .iter()
            .map(|(status, jobs)| (*status, jobs.as_slice()))
    }
}

impl fmt::Display for JobBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (status, jobs) in self.iter() {
            writeln!(f, "## {}", status.label())?;
            writeln!(f)?;
            if jobs.is_empty() {
                if status == JobStatus::Open {
                    writeln!(f, "No open jobs yet.")?;
                } else {
                    writeln!(f, "None.")?;
                }
                writeln!(f)?;
            } else {
                for job in jobs {
                    write!(f, "{job}")?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        models::{Quote, ServiceType},
        test_support::square_collection,
    };

    fn job_with_status(status: JobStatus) -> Job {
        let quote = Quote {
            area_m2: 10,
            area_ft2: 108,
            edge_m: 13,
            edge_ft: 43,
            price: 15.12,
        };
        let mut job = Job::new(ServiceType::Leaves, "", quote, square_collection(3.0));
        job.status = status;
        job
    }

    #[test]
    fn test_board_groups_in_lifecycle_order() {
        let jobs = vec![
            job_with_status(JobStatus::Completed),
            job_with_status(JobStatus::Open),
            job_with_status(JobStatus::InProgress),
            job_with_status(JobStatus::Open),
        ];
        let board = JobBoard::from_jobs(jobs.clone());

        assert_eq!(board.total(), 4);
        assert_eq!(board.group(JobStatus::Open), &[jobs[1].clone(), jobs[3].clone()]);
        assert_eq!(board.group(JobStatus::Assigned), &[] as &[Job]);
        assert_eq!(board.group(JobStatus::Completed).len(), 1);

        let order: Vec<JobStatus> = board.iter().map(|(status, _)| status).collect();
        assert_eq!(order, JobStatus::ALL.to_vec());
    }

    #[test]
    fn test_empty_board_display() {
        let output = JobBoard::from_jobs(Vec::new()).to_string();
        assert!(output.contains("## Open Jobs\n\nNo open jobs yet."));
        assert!(output.contains("## Assigned\n\nNone."));
        assert!(output.contains("## In Progress"));
        assert!(output.contains("## Completed"));
    }

    #[test]
    fn test_jobs_display() {
        let job = job_with_status(JobStatus::Open);
        let output = Jobs(vec![job.clone()]).to_string();
        assert!(output.contains(&job.id));
        assert!(output.contains("$15.12"));
    }
}
