//! Command handlers and their clap argument types.
//!
//! Argument structs stay thin: they hold what clap parses and convert into
//! core types at the boundary. The [`Cli`] handler owns the store and the
//! renderer and turns each command into markdown.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{anyhow, Context, Result};
use clap::{Args, Subcommand, ValueEnum};
use geojson::{Feature, FeatureCollection, GeoJson};
use groundwork_core::{
    display::{ClearResult, CreateResult, TransitionResult},
    JobAction, JobBoard, JobStatus, JobStore, Jobs, Lifecycle, RateTable, RequestDraft,
    ServiceType,
};
use log::debug;

use crate::renderer::TerminalRenderer;

/// Price a drawing
#[derive(Args)]
pub struct QuoteArgs {
    /// Service to price: snow, lawn, leaves or salt
    #[arg(short, long)]
    pub service: String,
    /// GeoJSON file holding the drawn shape
    #[arg(help = "GeoJSON file with a FeatureCollection, Feature or Geometry")]
    pub file: PathBuf,
}

/// Submit a service request
#[derive(Args)]
pub struct RequestArgs {
    /// Service requested: snow, lawn, leaves or salt
    #[arg(short, long)]
    pub service: String,
    /// Street address of the property
    #[arg(short, long, help = "Optional street address of the property")]
    pub address: Option<String>,
    /// GeoJSON file holding the drawn shape
    #[arg(help = "GeoJSON file with a FeatureCollection, Feature or Geometry")]
    pub file: PathBuf,
}

/// List jobs on the board
#[derive(Args)]
pub struct ListJobsArgs {
    /// Only show jobs in this status
    #[arg(long, value_enum)]
    pub status: Option<StatusArg>,
}

/// Identify a single job
#[derive(Args)]
pub struct JobIdArgs {
    /// ID of the job
    #[arg(help = "Unique identifier of the job")]
    pub id: String,
}

#[derive(Subcommand)]
pub enum JobsCommands {
    /// Show the job board grouped by status
    #[command(aliases = ["l", "ls"])]
    List(ListJobsArgs),
    /// Show details of a single job
    #[command(alias = "s")]
    Show(JobIdArgs),
    /// Take an open job
    Accept(JobIdArgs),
    /// Start work on an assigned job
    Start(JobIdArgs),
    /// Mark an in-progress job as done
    Complete(JobIdArgs),
    /// Release an assigned job back to the open pool
    Unassign(JobIdArgs),
    /// Remove every job
    Clear,
}

/// Command-line representation of job statuses for filtering.
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum StatusArg {
    Open,
    Assigned,
    InProgress,
    Completed,
}

impl From<StatusArg> for JobStatus {
    fn from(val: StatusArg) -> Self {
        match val {
            StatusArg::Open => JobStatus::Open,
            StatusArg::Assigned => JobStatus::Assigned,
            StatusArg::InProgress => JobStatus::InProgress,
            StatusArg::Completed => JobStatus::Completed,
        }
    }
}

/// Executes commands against a job store and renders the results.
pub struct Cli {
    store: JobStore,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(store: JobStore, renderer: TerminalRenderer) -> Self {
        Self { store, renderer }
    }

    pub fn services(&self) -> Result<()> {
        self.renderer.render(&RateTable::standard().to_string())
    }

    pub fn quote(&self, args: QuoteArgs) -> Result<()> {
        let service: ServiceType = args.service.parse()?;
        let mut draft = RequestDraft::new(service);
        draft.set_geometry(read_drawing(&args.file)?);

        match draft.quote()? {
            Some(quote) => self
                .renderer
                .render(&format!("# Quote ({service})\n\n{quote}")),
            None => self.renderer.render("Nothing drawn yet.\n"),
        }
    }

    pub fn request(&self, args: RequestArgs) -> Result<()> {
        let service: ServiceType = args.service.parse()?;
        let mut draft = RequestDraft::new(service);
        if let Some(address) = args.address {
            draft.set_address(address);
        }
        draft.set_geometry(read_drawing(&args.file)?);

        let job = draft.submit(&self.store)?;
        self.renderer.render(&CreateResult::new(job).to_string())
    }

    pub fn handle_jobs_command(&self, command: JobsCommands) -> Result<()> {
        match command {
            JobsCommands::List(args) => self.list_jobs(args),
            JobsCommands::Show(args) => self.show_job(&args.id),
            JobsCommands::Accept(args) => self.perform(&args.id, JobAction::Accept),
            JobsCommands::Start(args) => self.perform(&args.id, JobAction::Start),
            JobsCommands::Complete(args) => self.perform(&args.id, JobAction::Complete),
            JobsCommands::Unassign(args) => self.perform(&args.id, JobAction::Unassign),
            JobsCommands::Clear => self.clear_jobs(),
        }
    }

    pub fn list_jobs(&self, args: ListJobsArgs) -> Result<()> {
        let jobs = self.store.list_all()?;

        match args.status.map(JobStatus::from) {
            Some(status) => {
                let matching: Vec<_> = jobs.into_iter().filter(|j| j.status == status).collect();
                self.renderer
                    .render(&format!("# {}\n\n{}", status.label(), Jobs(matching)))
            }
            None => self.renderer.render(&JobBoard::from_jobs(jobs).to_string()),
        }
    }

    fn show_job(&self, id: &str) -> Result<()> {
        let job = self
            .store
            .get(id)?
            .ok_or_else(|| anyhow!("No job with ID {id}"))?;
        self.renderer.render(&job.to_string())
    }

    fn perform(&self, id: &str, action: JobAction) -> Result<()> {
        let from = self
            .store
            .get(id)?
            .map(|job| job.status)
            .ok_or_else(|| anyhow!("No job with ID {id}"))?;

        let job = Lifecycle::perform(&self.store, id, action)?
            .ok_or_else(|| anyhow!("No job with ID {id}"))?;
        self.renderer
            .render(&TransitionResult::new(from, job).to_string())
    }

    fn clear_jobs(&self) -> Result<()> {
        let removed = self.store.list_all()?.len();
        self.store.clear()?;
        self.renderer
            .render(&ClearResult { removed }.to_string())
    }
}

/// Load a drawing from disk as a feature collection.
///
/// A bare Feature or Geometry is wrapped into a single-feature collection.
fn read_drawing(path: &Path) -> Result<FeatureCollection> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let parsed: GeoJson = content
        .parse()
        .with_context(|| format!("{} is not valid GeoJSON", path.display()))?;
    debug!("Loaded drawing from {}", path.display());

    let features = match parsed {
        GeoJson::FeatureCollection(collection) => return Ok(collection),
        GeoJson::Feature(feature) => vec![feature],
        GeoJson::Geometry(geometry) => vec![Feature::from(geometry)],
    };
    Ok(FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_arg_maps_to_job_status() {
        assert_eq!(JobStatus::from(StatusArg::Open), JobStatus::Open);
        assert_eq!(JobStatus::from(StatusArg::InProgress), JobStatus::InProgress);
        assert_eq!(JobStatus::from(StatusArg::Completed), JobStatus::Completed);
    }

    #[test]
    fn test_read_drawing_wraps_bare_geometry() {
        let dir = tempfile::TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("path.geojson");
        fs::write(
            &path,
            r#"{"type": "LineString", "coordinates": [[0.0, 0.0], [0.001, 0.0]]}"#,
        )
        .unwrap();

        let collection = read_drawing(&path).unwrap();
        assert_eq!(collection.features.len(), 1);
        assert!(collection.features[0].geometry.is_some());
    }

    #[test]
    fn test_read_drawing_rejects_garbage() {
        let dir = tempfile::TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("bad.geojson");
        fs::write(&path, "not json").unwrap();

        assert!(read_drawing(&path).is_err());
    }
}
