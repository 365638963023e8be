//! Timebox CLI Application
//!
//! Command-line interface for the timebox day-planner.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::{today_iso, Cli, ShowArgs};
use log::info;
use renderer::TerminalRenderer;
use timebox_core::PlannerBuilder;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        command,
    } = Args::parse();

    let planner = PlannerBuilder::new()
        .with_database_path(database_file)
        .build()
        .await
        .context("Failed to initialize planner")?;

    let renderer = TerminalRenderer::new(!no_color);
    let cli = Cli::new(planner, renderer);

    info!("Timebox started");

    match command {
        Some(Show(show_args)) => cli.show(show_args).await,
        Some(Task { command }) => cli.handle_task_command(command).await,
        Some(Notes(notes_args)) => cli.set_notes(notes_args).await,
        Some(Delete(delete_args)) => cli.delete(delete_args).await,
        None => {
            // No command: show today's planner
            cli.show(ShowArgs {
                date: Some(today_iso()),
                json: false,
            })
            .await
        }
    }
}
