use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{JobsCommands, QuoteArgs, RequestArgs};

/// Quote and dispatch yard service jobs
///
/// Customers draw the area or path to be serviced as GeoJSON, get an
/// instant price and submit it as a request. Contractors work the resulting
/// job board, accepting, starting and completing jobs.
#[derive(Parser)]
#[command(version, about, name = "gw")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/groundwork/groundwork.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Groundwork CLI
///
/// - `services`: the rate card
/// - `quote` and `request`: the customer side
/// - `jobs`: the contractor side
#[derive(Subcommand)]
pub enum Commands {
    /// Show the services offered and their rates
    #[command(alias = "rates")]
    Services,
    /// Price a drawing without submitting it
    #[command(alias = "q")]
    Quote(QuoteArgs),
    /// Submit a drawing as a new service request
    #[command(alias = "r")]
    Request(RequestArgs),
    /// Work the job board
    #[command(alias = "j")]
    Jobs {
        #[command(subcommand)]
        command: JobsCommands,
    },
}
