//! Planner record queries: date-keyed reads and full-replace writes.
//!
//! The write path deliberately trades write amplification for simplicity:
//! the parent row is upserted, every persisted child task is deleted, and
//! the client's current sequence is reinserted. After every save the
//! persisted child set exactly mirrors the in-memory set, with no orphan or
//! stale rows to reconcile.

use jiff::civil::Date;
use jiff::Timestamp;
use rusqlite::{params, types::Type, OptionalExtension};

use crate::{
    error::{DatabaseResultExt, PlannerError, Result},
    models::{PlannerRecord, ScheduledTime, Task},
};

// Optimized SQL queries as const strings for compile-time optimization
const UPSERT_PLANNER_SQL: &str = "INSERT INTO planners (date, notes, reflection, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5) \
     ON CONFLICT(date) DO UPDATE SET notes = excluded.notes, reflection = excluded.reflection, updated_at = excluded.updated_at";
const SELECT_PLANNER_SQL: &str = "SELECT id, notes, reflection FROM planners WHERE date = ?1";
const SELECT_PLANNER_ID_SQL: &str = "SELECT id FROM planners WHERE date = ?1";
const DELETE_PLANNER_TASKS_SQL: &str = "DELETE FROM tasks WHERE planner_id = ?1";
const INSERT_TASK_SQL: &str = "INSERT INTO tasks (planner_id, task_id, title, time_span, is_big3, scheduled_start_hour, scheduled_start_minute, position) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)";
const SELECT_TASKS_SQL: &str = "SELECT task_id, title, time_span, is_big3, scheduled_start_hour, scheduled_start_minute FROM tasks WHERE planner_id = ?1 ORDER BY position";
const DELETE_PLANNER_SQL: &str = "DELETE FROM planners WHERE date = ?1";

/// Validates a calendar-date key before it reaches any query.
///
/// A missing or malformed date is a client-input error, rejected before
/// any state change.
pub(crate) fn validate_date(date: &str) -> Result<()> {
    if date.is_empty() {
        return Err(PlannerError::invalid_input("date", "date key is required"));
    }
    date.parse::<Date>().map_err(|e| {
        PlannerError::invalid_input("date", format!("expected YYYY-MM-DD, got '{date}': {e}"))
    })?;
    Ok(())
}

impl super::Database {
    /// Helper function to construct a Task from a database row
    fn build_task_from_row(row: &rusqlite::Row) -> rusqlite::Result<Task> {
        let scheduled_hour: Option<u8> = row.get(4)?;
        let scheduled_minute: Option<u8> = row.get(5)?;

        // Unscheduled is stored as NULL in both columns; anything else is
        // a placement pair
        let scheduled = match (scheduled_hour, scheduled_minute) {
            (Some(hour), Some(minute)) => Some(ScheduledTime::new(hour, minute).map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(4, Type::Integer, Box::new(e))
            })?),
            _ => None,
        };

        Ok(Task {
            id: row.get(0)?,
            title: row.get(1)?,
            time_span: row.get::<_, i64>(2)? as u32,
            is_big3: row.get(3)?,
            scheduled,
        })
    }

    /// Retrieves the planner record for a date, or `None` when no record
    /// has been saved for that date yet. Absence is not an error; the
    /// consuming layer substitutes the empty-record factory.
    pub fn get_record(&self, date: &str) -> Result<Option<PlannerRecord>> {
        validate_date(date)?;

        let parent: Option<(i64, Option<String>, Option<String>)> = self
            .connection
            .query_row(SELECT_PLANNER_SQL, params![date], |row| {
                Ok((row.get(0)?, row.get(1)?, row.get(2)?))
            })
            .optional()
            .db_context("Failed to query planner record")?;

        let Some((planner_id, notes, reflection)) = parent else {
            return Ok(None);
        };

        let mut stmt = self
            .connection
            .prepare(SELECT_TASKS_SQL)
            .db_context("Failed to prepare task query")?;

        let tasks = stmt
            .query_map(params![planner_id], Self::build_task_from_row)
            .db_context("Failed to query tasks")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch tasks")?;

        Ok(Some(PlannerRecord {
            tasks,
            notes,
            reflection,
        }))
    }

    /// Replaces the persisted record for a date with the given in-memory
    /// state, creating the parent row if absent.
    ///
    /// One transaction: upsert the parent's scalar fields, delete every
    /// persisted child task, bulk-insert the current sequence preserving
    /// order. Last write received wins; there is no coordination between
    /// near-simultaneous writers for the same date.
    pub fn save_record(&mut self, date: &str, record: &PlannerRecord) -> Result<()> {
        validate_date(date)?;

        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let now = Timestamp::now().to_string();

        tx.execute(
            UPSERT_PLANNER_SQL,
            params![
                date,
                record.notes.as_deref(),
                record.reflection.as_deref(),
                &now,
                &now
            ],
        )
        .db_context("Failed to upsert planner record")?;

        let planner_id: i64 = tx
            .query_row(SELECT_PLANNER_ID_SQL, params![date], |row| row.get(0))
            .db_context("Failed to resolve planner id")?;

        tx.execute(DELETE_PLANNER_TASKS_SQL, params![planner_id])
            .db_context("Failed to delete persisted tasks")?;

        for (position, task) in record.tasks.iter().enumerate() {
            tx.execute(
                INSERT_TASK_SQL,
                params![
                    planner_id,
                    &task.id,
                    &task.title,
                    i64::from(task.time_span),
                    task.is_big3,
                    task.scheduled.map(|s| s.start_hour),
                    task.scheduled.map(|s| s.start_minute),
                    position as i64,
                ],
            )
            .db_context("Failed to insert task")?;
        }

        tx.commit().db_context("Failed to commit transaction")?;
        Ok(())
    }

    /// Deletes the record for a date along with all its child tasks.
    ///
    /// Deleting a date that has no record is a success (idempotent delete).
    pub fn delete_record(&mut self, date: &str) -> Result<()> {
        validate_date(date)?;

        self.connection
            .execute(DELETE_PLANNER_SQL, params![date])
            .db_context("Failed to delete planner record")?;

        Ok(())
    }
}
