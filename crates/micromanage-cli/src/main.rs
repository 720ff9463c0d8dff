//! Micromanage CLI Application
//!
//! Command-line interface and MCP server for the micromanage work plan
//! tracker.

mod args;
mod cli;
mod mcp;
mod renderer;

use std::process::ExitCode;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use mcp::{run_stdio_server, MicromanageMcpServer};
use micromanage_core::WorkPlanBuilder;
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    env_logger::init();

    let Args {
        data_dir,
        data_file,
        no_color,
        json,
        command,
    } = Args::parse();

    let workplan = WorkPlanBuilder::new()
        .with_data_dir(data_dir)
        .with_file_name(data_file)
        .build()
        .context("Failed to initialize work plan")?;

    info!("Micromanage started with {}", workplan.path().display());

    if let Some(Serve) = command {
        info!("Starting Micromanage MCP server");
        run_stdio_server(MicromanageMcpServer::new(workplan))
            .await
            .context("MCP server failed")?;
        return Ok(ExitCode::SUCCESS);
    }

    let cli = Cli::new(workplan, TerminalRenderer::new(!no_color), json);
    match command {
        Some(Plan(args)) => cli.define_plan(args),
        Some(Update(args)) => cli.update(args),
        Some(Note(args)) => cli.note(args),
        Some(Track | Serve) | None => cli.track(),
    }
}
