//! Groundwork CLI Application
//!
//! Command-line interface for quoting yard service requests and working the
//! resulting job board.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::{Cli, ListJobsArgs};
use groundwork_core::JobStoreBuilder;
use log::info;
use renderer::TerminalRenderer;
use Commands::*;

fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        command,
    } = Args::parse();

    let store = JobStoreBuilder::new()
        .with_database_path(database_file)
        .build()
        .context("Failed to open job store")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("Groundwork started");

    let cli = Cli::new(store, renderer);
    match command {
        Some(Services) => cli.services(),
        Some(Quote(args)) => cli.quote(args),
        Some(Request(args)) => cli.request(args),
        Some(Jobs { command }) => cli.handle_jobs_command(command),
        None => cli.list_jobs(ListJobsArgs { status: None }),
    }
}
