use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{DeleteArgs, NotesArgs, ShowArgs, TaskCommands};

/// Main command-line interface for the Timebox day-planner
///
/// Timebox keeps one planner record per calendar date: an ordered task
/// backlog, up to three Big3 priorities, and an hourly timetable tasks can
/// be placed onto. Every mutation immediately writes the whole record back
/// to the local SQLite database.
#[derive(Parser)]
#[command(version, about, name = "tbx")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/timebox/timebox.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Timebox CLI
///
/// With no command, today's planner is shown. Task mutations live under
/// the `task` subcommand; record-level operations (notes, delete) are top
/// level.
#[derive(Subcommand)]
pub enum Commands {
    /// Show a date's planner (Big3, backlog, timetable)
    #[command(alias = "s")]
    Show(ShowArgs),
    /// Manage a date's tasks
    #[command(alias = "t")]
    Task {
        #[command(subcommand)]
        command: TaskCommands,
    },
    /// Edit a date's notes and reflection
    #[command(alias = "n")]
    Notes(NotesArgs),
    /// Delete a date's record and all its tasks
    Delete(DeleteArgs),
}
