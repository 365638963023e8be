//! Task model definition and related functionality.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::error::{PlannerError, Result};

/// Default duration for newly created tasks, in minutes.
pub const DEFAULT_TIME_SPAN: u32 = 60;

/// Start minutes accepted by the timetable granularity.
pub const ALLOWED_START_MINUTES: [u8; 2] = [0, 30];

/// Placement of a task on the hourly timetable.
///
/// Absence of a `ScheduledTime` means the task lives only in the backlog
/// list. Hour and minute are validated on construction; the pair is stored
/// as two nullable columns on the persistence side.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledTime {
    /// Starting clock hour (0-23)
    pub start_hour: u8,

    /// Starting minute within the hour (0 or 30)
    pub start_minute: u8,
}

impl ScheduledTime {
    /// Creates a validated placement.
    pub fn new(start_hour: u8, start_minute: u8) -> Result<Self> {
        if start_hour > 23 {
            return Err(PlannerError::invalid_input(
                "start_hour",
                format!("must be between 0 and 23, got {start_hour}"),
            ));
        }
        if !ALLOWED_START_MINUTES.contains(&start_minute) {
            return Err(PlannerError::invalid_input(
                "start_minute",
                format!("must be one of {ALLOWED_START_MINUTES:?}, got {start_minute}"),
            ));
        }
        Ok(Self {
            start_hour,
            start_minute,
        })
    }

    /// Start of the placement in minutes since midnight.
    pub fn start_minutes(&self) -> u32 {
        u32::from(self.start_hour) * 60 + u32::from(self.start_minute)
    }
}

/// A single task owned by a planner record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Opaque client-generated identifier, unique within its record
    pub id: String,

    /// Title of the task (may be empty while the user is still typing)
    pub title: String,

    /// Duration in minutes (positive; the UI offers 60..300 in hour steps)
    pub time_span: u32,

    /// Whether this task is one of the day's Big3 priorities
    pub is_big3: bool,

    /// Timetable placement, or `None` for a backlog-only task
    #[serde(rename = "scheduledTime", skip_serializing_if = "Option::is_none", default)]
    pub scheduled: Option<ScheduledTime>,
}

impl Task {
    /// Creates a task with the standard defaults: one hour long, not a
    /// Big3 priority, unscheduled.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            time_span: DEFAULT_TIME_SPAN,
            is_big3: false,
            scheduled: None,
        }
    }

    /// Occupied interval `[start, end)` in minutes since midnight, or
    /// `None` when the task is unscheduled.
    ///
    /// The duration is unbounded above, so the end saturates instead of
    /// wrapping past `u32::MAX`.
    pub fn occupied_interval(&self) -> Option<(u32, u32)> {
        self.scheduled.map(|s| {
            let start = s.start_minutes();
            (start, start.saturating_add(self.time_span))
        })
    }
}

/// Generates an opaque task id from the current wall clock.
///
/// Nanosecond resolution keeps ids unique within a record even for
/// back-to-back creations in the same session.
pub fn generate_task_id() -> String {
    Timestamp::now().as_nanosecond().to_string()
}
