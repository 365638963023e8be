//! Command-line interface definitions using clap
//!
//! This module defines the CLI structure with clap's derive API, following
//! the parameter wrapper pattern: each command has a clap-specific argument
//! struct that converts into the framework-free parameter types consumed by
//! `timebox-core`. CLI concerns (flags, help text, aliases) stay here;
//! business validation stays in the core.

use anyhow::Result;
use clap::{Args, Subcommand};
use timebox_core::{
    params::{AddTask, DateKey, ReorderTask, ScheduleTask, SetNotes, TaskRef, UpdateTask},
    Big3Toggle, OperationStatus, Planner, PlannerError, Timeline,
};

use crate::renderer::TerminalRenderer;

/// Show a date's planner
///
/// Renders the Big3 ranks, the full backlog with task ids, the hourly
/// timetable, and any notes. With --json, prints the raw record instead.
#[derive(Args)]
pub struct ShowArgs {
    /// Date to show (YYYY-MM-DD); defaults to today
    pub date: Option<String>,
    /// Print the record as JSON instead of rendering it
    #[arg(long)]
    pub json: bool,
}

/// Add a task to a date's backlog
#[derive(Args)]
pub struct AddTaskArgs {
    /// Date the task belongs to (YYYY-MM-DD)
    pub date: String,
    /// Title of the task
    pub title: String,
    /// Duration in minutes (defaults to 60)
    #[arg(long)]
    pub span: Option<u32>,
}

impl From<AddTaskArgs> for AddTask {
    fn from(val: AddTaskArgs) -> Self {
        AddTask {
            date: val.date,
            title: val.title,
            time_span: val.span,
        }
    }
}

/// Reference a task within a date's record
#[derive(Args)]
pub struct TaskRefArgs {
    /// Date the task belongs to (YYYY-MM-DD)
    pub date: String,
    /// Id of the task (shown in brackets by `show`)
    pub task_id: String,
}

impl From<TaskRefArgs> for TaskRef {
    fn from(val: TaskRefArgs) -> Self {
        TaskRef {
            date: val.date,
            task_id: val.task_id,
        }
    }
}

/// Edit a task's title and/or duration
#[derive(Args)]
pub struct EditTaskArgs {
    /// Date the task belongs to (YYYY-MM-DD)
    pub date: String,
    /// Id of the task to edit
    pub task_id: String,
    /// New title
    #[arg(long)]
    pub title: Option<String>,
    /// New duration in minutes
    #[arg(long)]
    pub span: Option<u32>,
}

impl From<EditTaskArgs> for UpdateTask {
    fn from(val: EditTaskArgs) -> Self {
        UpdateTask {
            date: val.date,
            task_id: val.task_id,
            title: val.title,
            time_span: val.span,
        }
    }
}

/// Move a task within the backlog
///
/// Indices are the 0-based positions shown by `show`. The task is removed
/// from its source position and lands before the item that was at the
/// target position.
#[derive(Args)]
pub struct MoveTaskArgs {
    /// Date the task belongs to (YYYY-MM-DD)
    pub date: String,
    /// Current 0-based position of the task
    pub from: usize,
    /// Target 0-based position
    pub to: usize,
}

impl From<MoveTaskArgs> for ReorderTask {
    fn from(val: MoveTaskArgs) -> Self {
        ReorderTask {
            date: val.date,
            source_index: val.from,
            target_index: val.to,
        }
    }
}

/// Place a task onto the timetable
#[derive(Args)]
pub struct ScheduleTaskArgs {
    /// Date the task belongs to (YYYY-MM-DD)
    pub date: String,
    /// Id of the task to place
    pub task_id: String,
    /// Starting clock hour of the target block (0-23)
    pub hour: u8,
}

impl From<ScheduleTaskArgs> for ScheduleTask {
    fn from(val: ScheduleTaskArgs) -> Self {
        ScheduleTask {
            date: val.date,
            task_id: val.task_id,
            start_hour: val.hour,
        }
    }
}

/// Edit a date's notes and reflection
#[derive(Args)]
pub struct NotesArgs {
    /// Date to edit (YYYY-MM-DD)
    pub date: String,
    /// Time-management notes
    #[arg(long)]
    pub notes: Option<String>,
    /// End-of-day reflection
    #[arg(long)]
    pub reflection: Option<String>,
}

impl From<NotesArgs> for SetNotes {
    fn from(val: NotesArgs) -> Self {
        SetNotes {
            date: val.date,
            notes: val.notes,
            reflection: val.reflection,
        }
    }
}

/// Delete a date's record
#[derive(Args)]
pub struct DeleteArgs {
    /// Date to delete (YYYY-MM-DD)
    pub date: String,
}

#[derive(Subcommand)]
pub enum TaskCommands {
    /// Add a task to a date's backlog
    #[command(alias = "a")]
    Add(AddTaskArgs),
    /// Remove a task
    #[command(aliases = ["d", "rm"])]
    Remove(TaskRefArgs),
    /// Edit a task's title and/or duration
    #[command(alias = "e")]
    Edit(EditTaskArgs),
    /// Toggle a task's Big3 priority flag
    #[command(alias = "b")]
    Big3(TaskRefArgs),
    /// Move a task within the backlog
    #[command(alias = "m")]
    Move(MoveTaskArgs),
    /// Place a task onto the timetable at a whole hour
    #[command(alias = "sc")]
    Schedule(ScheduleTaskArgs),
    /// Return a scheduled task to the backlog
    #[command(alias = "un")]
    Unschedule(TaskRefArgs),
}

/// CLI command handlers bridging parsed arguments to the core planner.
pub struct Cli {
    planner: Planner,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(planner: Planner, renderer: TerminalRenderer) -> Self {
        Self { planner, renderer }
    }

    /// Show a date's planner: Big3, backlog, timetable, notes.
    pub async fn show(&self, args: ShowArgs) -> Result<()> {
        let date = args.date.unwrap_or_else(today_iso);
        let record = self
            .planner
            .load_record(&DateKey { date: date.clone() })
            .await?;

        if args.json {
            println!("{}", serde_json::to_string_pretty(&record)?);
            return Ok(());
        }

        let mut output = format!("# Planner for {date}\n\n");
        output.push_str(&record.to_string());
        output.push('\n');
        output.push_str(&Timeline(&record.tasks).to_string());
        self.renderer.render(&output)
    }

    pub async fn handle_task_command(&self, command: TaskCommands) -> Result<()> {
        match command {
            TaskCommands::Add(args) => {
                let task = self.planner.add_task(&args.into()).await?;
                self.render_status(OperationStatus::success(format!(
                    "Added task [{}] {}",
                    task.id, task
                )))
            }
            TaskCommands::Remove(args) => match self.planner.remove_task(&args.into()).await {
                Ok(task) => self.render_status(OperationStatus::success(format!(
                    "Removed task [{}] {}",
                    task.id, task
                ))),
                Err(e) => self.render_notice(e),
            },
            TaskCommands::Edit(args) => match self.planner.update_task(&args.into()).await {
                Ok(()) => self.render_status(OperationStatus::success("Task updated".to_string())),
                Err(e) => self.render_notice(e),
            },
            TaskCommands::Big3(args) => match self.planner.toggle_big3(&args.into()).await {
                Ok(Big3Toggle::Flagged) => self.render_status(OperationStatus::success(
                    "Task flagged as a Big3 priority".to_string(),
                )),
                Ok(Big3Toggle::Unflagged) => self.render_status(OperationStatus::success(
                    "Big3 flag removed".to_string(),
                )),
                Err(e) => self.render_notice(e),
            },
            TaskCommands::Move(args) => match self.planner.reorder_task(&args.into()).await {
                Ok(true) => {
                    self.render_status(OperationStatus::success("Task moved".to_string()))
                }
                Ok(false) => self.render_status(OperationStatus::success(
                    "Task already at that position".to_string(),
                )),
                Err(e) => self.render_notice(e),
            },
            TaskCommands::Schedule(args) => {
                let hour = args.hour;
                match self.planner.schedule_task(&args.into()).await {
                    Ok(true) => self.render_status(OperationStatus::success(format!(
                        "Task placed at {}",
                        timebox_core::format_hour(hour)
                    ))),
                    Ok(false) => self.render_status(OperationStatus::success(
                        "Task already at that hour".to_string(),
                    )),
                    Err(e) => self.render_notice(e),
                }
            }
            TaskCommands::Unschedule(args) => {
                match self.planner.unschedule_task(&args.into()).await {
                    Ok(true) => self.render_status(OperationStatus::success(
                        "Task returned to the backlog".to_string(),
                    )),
                    Ok(false) => self.render_status(OperationStatus::success(
                        "Task was not scheduled".to_string(),
                    )),
                    Err(e) => self.render_notice(e),
                }
            }
        }
    }

    pub async fn set_notes(&self, args: NotesArgs) -> Result<()> {
        self.planner.set_notes(&args.into()).await?;
        self.render_status(OperationStatus::success("Notes saved".to_string()))
    }

    pub async fn delete(&self, args: DeleteArgs) -> Result<()> {
        self.planner
            .delete_record(&DateKey { date: args.date.clone() })
            .await?;
        self.render_status(OperationStatus::success(format!(
            "Deleted planner record for {}",
            args.date
        )))
    }

    fn render_status(&self, status: OperationStatus) -> Result<()> {
        self.renderer.render(&status.to_string())
    }

    /// Renders a core error as a user-facing notice.
    ///
    /// Rejected Big3 toggles and stale task references are feedback, not
    /// failures; everything else propagates as a hard error.
    fn render_notice(&self, error: PlannerError) -> Result<()> {
        match error {
            PlannerError::Big3Limit | PlannerError::TaskNotFound { .. } => {
                self.render_status(OperationStatus::failure(error.to_string()))
            }
            other => Err(other.into()),
        }
    }
}

/// Today's date as an ISO `YYYY-MM-DD` key.
pub fn today_iso() -> String {
    jiff::Zoned::now().date().to_string()
}
