//! Command-line handlers
//!
//! Clap argument structs live here next to the [`Cli`] handler that runs
//! them. Arguments convert into core parameter types with `From`, so the core
//! stays free of clap derives:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → WorkPlan
//! ```
//!
//! Command failures from the work plan are reported as data (an
//! [`OperationStatus`] line, or the JSON error payload with `--json`) and turn
//! into a non-zero exit code. Only process-level problems, such as an
//! unreadable plan file, surface as `anyhow` errors.

use std::{
    fs,
    io::{self, Read},
    path::{Path, PathBuf},
    process::ExitCode,
};

use anyhow::{Context, Result};
use clap::Args;
use log::{debug, info};
use micromanage_core::{
    display::OperationStatus,
    models::Status,
    params::{DefinePlan, UpdateStatus},
    WorkPlan, WorkplanError,
};
use serde::Serialize;

use crate::renderer::TerminalRenderer;

/// Define the plan from a JSON document
#[derive(Args)]
pub struct PlanArgs {
    /// Path to the plan JSON, or `-` to read from stdin
    ///
    /// The document has the shape
    /// `{"goal": ..., "groups": [{"goal": ..., "units": [{"goal": ..., "developerNote": ...}]}]}`.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

/// Update a unit's status, goal, or note
#[derive(Args)]
pub struct UpdateArgs {
    /// Zero-based index of the group
    #[arg(value_name = "GROUP", allow_negative_numbers = true)]
    pub group_index: i64,
    /// Zero-based index of the unit, or -1 to address the group itself
    #[arg(value_name = "UNIT", allow_negative_numbers = true)]
    pub unit_index: i64,
    /// New status: not_started, in_progress, user_review, completed,
    /// cancelled, or needs_refinement
    #[arg(short, long)]
    pub status: Option<Status>,
    /// New goal for the unit
    #[arg(short, long)]
    pub goal: Option<String>,
    /// Developer note for the unit, or for the group when UNIT is -1
    #[arg(short = 'n', long = "note")]
    pub developer_note: Option<String>,
}

impl From<UpdateArgs> for UpdateStatus {
    fn from(val: UpdateArgs) -> Self {
        UpdateStatus {
            group_index: val.group_index,
            unit_index: val.unit_index,
            status: val.status,
            goal: val.goal,
            developer_note: val.developer_note,
        }
    }
}

/// Annotate a group
#[derive(Args)]
pub struct NoteArgs {
    /// Zero-based index of the group
    #[arg(value_name = "GROUP")]
    pub group_index: usize,
    /// Developer note to store on the group
    #[arg(value_name = "NOTE")]
    pub developer_note: String,
}

/// Runs one command against the work plan and renders the outcome.
pub struct Cli {
    workplan: WorkPlan,
    renderer: TerminalRenderer,
    json: bool,
}

impl Cli {
    pub fn new(workplan: WorkPlan, renderer: TerminalRenderer, json: bool) -> Self {
        Self {
            workplan,
            renderer,
            json,
        }
    }

    /// Define the plan from a file or stdin.
    pub fn define_plan(mut self, args: PlanArgs) -> Result<ExitCode> {
        let contents = read_plan_source(&args.file)?;
        let params: DefinePlan = serde_json::from_str(&contents)
            .with_context(|| format!("Invalid plan document: {}", args.file.display()))?;
        debug!("Plan document parsed: {params:?}");

        let outcome = self.workplan.define_plan(&params);
        self.finish(outcome)
    }

    /// Show progress.
    pub fn track(self) -> Result<ExitCode> {
        let outcome = self.workplan.get_progress();
        self.finish(outcome)
    }

    /// Positional status update.
    pub fn update(mut self, args: UpdateArgs) -> Result<ExitCode> {
        let outcome = self.workplan.update_status(&args.into());
        self.finish(outcome)
    }

    /// Set a group's developer note.
    pub fn note(mut self, args: NoteArgs) -> Result<ExitCode> {
        let outcome = self
            .workplan
            .update_group_note(args.group_index, args.developer_note);
        self.finish(outcome)
    }

    fn finish<T>(&self, outcome: Result<T, WorkplanError>) -> Result<ExitCode>
    where
        T: std::fmt::Display + Serialize,
    {
        match outcome {
            Ok(result) => {
                if self.json {
                    println!("{}", serde_json::to_string_pretty(&result)?);
                } else {
                    self.renderer.render(&result.to_string())?;
                }
                Ok(ExitCode::SUCCESS)
            }
            Err(e) => {
                info!("Command failed: {e}");
                if self.json {
                    eprintln!("{}", serde_json::to_string_pretty(&e.to_payload())?);
                } else {
                    self.renderer
                        .render_error(&OperationStatus::from(&e).to_string())?;
                }
                Ok(ExitCode::FAILURE)
            }
        }
    }
}

fn read_plan_source(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut contents = String::new();
        io::stdin()
            .read_to_string(&mut contents)
            .context("Failed to read plan from stdin")?;
        return Ok(contents);
    }
    fs::read_to_string(path)
        .with_context(|| format!("Failed to read plan file: {}", path.display()))
}
