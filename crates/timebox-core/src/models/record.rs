//! Planner record: the per-date container that owns the task sequence.

use serde::{Deserialize, Serialize};

use super::task::{ScheduledTime, Task};
use crate::error::{PlannerError, Result};

/// Maximum number of tasks that may be flagged as Big3 at any time.
pub const BIG3_LIMIT: usize = 3;

/// Outcome of a successful Big3 toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Big3Toggle {
    /// The task is now flagged as a Big3 priority
    Flagged,
    /// The task's Big3 flag was removed
    Unflagged,
}

/// The planner state for one calendar date.
///
/// The record exclusively owns its task sequence; the sequence order is the
/// backlog display order and is explicitly reorderable. The calendar date is
/// not embedded here; it is the key the record is stored and loaded under.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PlannerRecord {
    /// Ordered task sequence (backlog order)
    pub tasks: Vec<Task>,

    /// Free-text time-management notes
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub notes: Option<String>,

    /// End-of-day reflection
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub reflection: Option<String>,
}

impl PlannerRecord {
    /// Creates an empty record: no tasks, no notes.
    ///
    /// Used as the initial state before a load completes and as the
    /// substitute when no persisted record exists for a viewed date.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Looks up a task by its client id.
    pub fn task(&self, task_id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == task_id)
    }

    /// Position of a task within the sequence.
    pub fn task_index(&self, task_id: &str) -> Option<usize> {
        self.tasks.iter().position(|t| t.id == task_id)
    }

    fn task_mut(&mut self, task_id: &str) -> Result<&mut Task> {
        self.tasks
            .iter_mut()
            .find(|t| t.id == task_id)
            .ok_or_else(|| PlannerError::TaskNotFound {
                id: task_id.to_string(),
            })
    }

    /// Appends a new task to the end of the sequence.
    pub fn add_task(&mut self, task: Task) {
        self.tasks.push(task);
    }

    /// Removes a task from the sequence.
    pub fn remove_task(&mut self, task_id: &str) -> Result<Task> {
        let index = self
            .task_index(task_id)
            .ok_or_else(|| PlannerError::TaskNotFound {
                id: task_id.to_string(),
            })?;
        Ok(self.tasks.remove(index))
    }

    /// Sets a task's title. Unconstrained per-task mutation.
    pub fn set_title(&mut self, task_id: &str, title: impl Into<String>) -> Result<()> {
        self.task_mut(task_id)?.title = title.into();
        Ok(())
    }

    /// Sets a task's duration in minutes. Must be positive.
    pub fn set_time_span(&mut self, task_id: &str, time_span: u32) -> Result<()> {
        if time_span == 0 {
            return Err(PlannerError::invalid_input(
                "time_span",
                "must be a positive number of minutes",
            ));
        }
        self.task_mut(task_id)?.time_span = time_span;
        Ok(())
    }

    /// Toggles a task's Big3 flag, enforcing the at-most-three invariant.
    ///
    /// Unflagging is always permitted. Flagging is rejected with
    /// [`PlannerError::Big3Limit`] when three tasks are already flagged,
    /// leaving the record unchanged.
    pub fn toggle_big3(&mut self, task_id: &str) -> Result<Big3Toggle> {
        let already_flagged =
            self.task(task_id)
                .ok_or_else(|| PlannerError::TaskNotFound {
                    id: task_id.to_string(),
                })?
                .is_big3;

        if already_flagged {
            self.task_mut(task_id)?.is_big3 = false;
            return Ok(Big3Toggle::Unflagged);
        }

        if self.big3_tasks().count() >= BIG3_LIMIT {
            return Err(PlannerError::Big3Limit);
        }

        self.task_mut(task_id)?.is_big3 = true;
        Ok(Big3Toggle::Flagged)
    }

    /// Places a task on the timetable at the given whole hour.
    ///
    /// Returns `false` when the task already sits at that hour (redrop is
    /// a no-op).
    pub fn schedule(&mut self, task_id: &str, start_hour: u8) -> Result<bool> {
        let placement = ScheduledTime::new(start_hour, 0)?;
        let task = self.task_mut(task_id)?;
        if task.scheduled == Some(placement) {
            return Ok(false);
        }
        task.scheduled = Some(placement);
        Ok(true)
    }

    /// Clears a task's timetable placement, returning it to the backlog
    /// view. List order is untouched.
    pub fn unschedule(&mut self, task_id: &str) -> Result<bool> {
        let task = self.task_mut(task_id)?;
        Ok(task.scheduled.take().is_some())
    }

    /// Moves the task at `source` so it lands before the original item at
    /// `target`, compensating for the removal shifting later indices.
    ///
    /// Returns `false` for the equal-index no-op.
    pub fn move_task(&mut self, source: usize, target: usize) -> Result<bool> {
        let len = self.tasks.len();
        if source >= len {
            return Err(PlannerError::invalid_input(
                "source_index",
                format!("index {source} out of range for {len} tasks"),
            ));
        }
        if target > len {
            return Err(PlannerError::invalid_input(
                "target_index",
                format!("index {target} out of range for {len} tasks"),
            ));
        }
        if source == target {
            return Ok(false);
        }

        let task = self.tasks.remove(source);
        let insert_at = if source < target { target - 1 } else { target };
        self.tasks.insert(insert_at, task);
        Ok(true)
    }

    /// Tasks flagged as Big3, in sequence order.
    pub fn big3_tasks(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter().filter(|t| t.is_big3)
    }

    /// Tasks placed on the timetable, in sequence order.
    pub fn scheduled_tasks(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter().filter(|t| t.scheduled.is_some())
    }

    /// Backlog-only tasks with no timetable placement.
    pub fn unscheduled_tasks(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter().filter(|t| t.scheduled.is_none())
    }
}
