use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{NoteArgs, PlanArgs, UpdateArgs};

/// Track one implementation plan through a review-gated workflow
///
/// A plan is a goal split into ordered groups (pull requests), each split into
/// ordered units (commits). Units must be refined before work starts and
/// reviewed before they complete, and only one unit is in progress at a time.
/// Run without a subcommand to show progress.
#[derive(Parser)]
#[command(version, about, name = "micromanage")]
pub struct Args {
    /// Directory holding the plan file. Defaults to ./.micromanage
    #[arg(long, global = true, env = "DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Name of the plan file inside the data directory. Defaults to
    /// workplan.json
    #[arg(long, global = true, env = "DATA_FILE_NAME")]
    pub data_file: Option<String>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Print results and errors as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Define the plan from a JSON file, replacing any existing plan
    #[command(alias = "p")]
    Plan(PlanArgs),
    /// Show progress of the current plan
    #[command(alias = "t")]
    Track,
    /// Change the status of a unit, or annotate a group with unit index -1
    #[command(alias = "u")]
    Update(UpdateArgs),
    /// Set the developer note of a group
    Note(NoteArgs),
    /// Start the MCP server on stdio
    Serve,
}
