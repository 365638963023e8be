//! Parameter structures for timebox operations.
//!
//! Framework-free structures passed between interface layers (CLI today,
//! anything else tomorrow) and the core [`Planner`](crate::planner::Planner).
//! Interface layers own their framework-specific argument types (clap
//! derives and so on) and convert into these via `From` impls, keeping the
//! core free of UI dependencies.

use crate::models::PlannerRecord;

/// A calendar-date key in ISO `YYYY-MM-DD` form.
#[derive(Debug, Clone)]
pub struct DateKey {
    pub date: String,
}

impl From<String> for DateKey {
    fn from(date: String) -> Self {
        Self { date }
    }
}

/// Parameters for saving a full record under a date.
#[derive(Debug, Clone)]
pub struct SaveRecord {
    pub date: String,
    pub record: PlannerRecord,
}

/// Parameters for appending a new task to a date's record.
#[derive(Debug, Clone)]
pub struct AddTask {
    pub date: String,
    pub title: String,
    /// Duration in minutes; `None` applies the one-hour default
    pub time_span: Option<u32>,
}

/// A task reference within a date's record.
#[derive(Debug, Clone)]
pub struct TaskRef {
    pub date: String,
    pub task_id: String,
}

/// Field-level task edits. `None` fields are left untouched.
#[derive(Debug, Clone)]
pub struct UpdateTask {
    pub date: String,
    pub task_id: String,
    pub title: Option<String>,
    pub time_span: Option<u32>,
}

/// Parameters for a backlog reorder gesture.
#[derive(Debug, Clone)]
pub struct ReorderTask {
    pub date: String,
    pub source_index: usize,
    pub target_index: usize,
}

/// Parameters for a timetable placement gesture.
#[derive(Debug, Clone)]
pub struct ScheduleTask {
    pub date: String,
    pub task_id: String,
    /// Starting clock hour of the target block; dropped placements always
    /// land on the whole hour
    pub start_hour: u8,
}

/// Parameters for editing a record's free-text fields.
#[derive(Debug, Clone)]
pub struct SetNotes {
    pub date: String,
    pub notes: Option<String>,
    pub reflection: Option<String>,
}
