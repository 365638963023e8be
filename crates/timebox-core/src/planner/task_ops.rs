//! Task-level operations for the Planner.
//!
//! Every operation here follows the client edit cycle: load the date's
//! record (or an empty one), apply the mutation against the in-memory
//! sequence, then write the whole record back. The in-memory mutation is
//! optimistic: a failed save is logged and reported, but never rolled
//! back; the next mutation's save is the de facto retry.

use log::warn;

use super::Planner;
use crate::{
    drag::DragController,
    error::Result,
    models::{generate_task_id, Big3Toggle, PlannerRecord, Task, DEFAULT_TIME_SPAN},
    params::{AddTask, ReorderTask, SaveRecord, ScheduleTask, SetNotes, TaskRef, UpdateTask},
};

impl Planner {
    /// Writes the mutated record back, logging a failed save before
    /// surfacing it.
    async fn persist(&self, date: &str, record: PlannerRecord) -> Result<()> {
        let result = self
            .save_record(&SaveRecord {
                date: date.to_string(),
                record,
            })
            .await;
        if let Err(ref e) = result {
            warn!("save for {date} failed after in-memory mutation: {e}");
        }
        result
    }

    /// Appends a new task with default fields to the end of a date's
    /// sequence and returns it.
    pub async fn add_task(&self, params: &AddTask) -> Result<Task> {
        let mut record = self.load_record(&params.date.clone().into()).await?;

        let mut task = Task::new(generate_task_id(), params.title.clone());
        task.time_span = params.time_span.unwrap_or(DEFAULT_TIME_SPAN);
        record.add_task(task.clone());

        self.persist(&params.date, record).await?;
        Ok(task)
    }

    /// Removes a task from a date's record.
    pub async fn remove_task(&self, params: &TaskRef) -> Result<Task> {
        let mut record = self.load_record(&params.date.clone().into()).await?;
        let removed = record.remove_task(&params.task_id)?;
        self.persist(&params.date, record).await?;
        Ok(removed)
    }

    /// Applies field-level edits to a task.
    pub async fn update_task(&self, params: &UpdateTask) -> Result<()> {
        let mut record = self.load_record(&params.date.clone().into()).await?;

        if let Some(ref title) = params.title {
            record.set_title(&params.task_id, title.clone())?;
        }
        if let Some(time_span) = params.time_span {
            record.set_time_span(&params.task_id, time_span)?;
        }

        self.persist(&params.date, record).await
    }

    /// Toggles a task's Big3 flag. A rejected toggle (limit reached)
    /// leaves both the in-memory and persisted state untouched.
    pub async fn toggle_big3(&self, params: &TaskRef) -> Result<Big3Toggle> {
        let mut record = self.load_record(&params.date.clone().into()).await?;
        let outcome = record.toggle_big3(&params.task_id)?;
        self.persist(&params.date, record).await?;
        Ok(outcome)
    }

    /// Runs a backlog reorder gesture: drag from `source_index`, drop at
    /// `target_index`. Returns whether the sequence changed.
    pub async fn reorder_task(&self, params: &ReorderTask) -> Result<bool> {
        let mut record = self.load_record(&params.date.clone().into()).await?;

        let task_id = record
            .tasks
            .get(params.source_index)
            .map(|t| t.id.clone())
            .unwrap_or_default();

        let mut drag = DragController::new();
        drag.begin_reorder(task_id, params.source_index);
        let moved = drag.drop_on_list(&mut record, params.target_index);
        drag.end();

        if moved? {
            self.persist(&params.date, record).await?;
            return Ok(true);
        }
        Ok(false)
    }

    /// Runs a timetable placement gesture: drop a task onto the block
    /// starting at the given hour. Redropping onto the task's current
    /// hour changes nothing and skips the save.
    pub async fn schedule_task(&self, params: &ScheduleTask) -> Result<bool> {
        let mut record = self.load_record(&params.date.clone().into()).await?;

        let mut drag = DragController::new();
        drag.begin_place(params.task_id.clone());
        let placed = drag.drop_on_block(&mut record, params.start_hour);
        drag.end();

        if placed? {
            self.persist(&params.date, record).await?;
            return Ok(true);
        }
        Ok(false)
    }

    /// Clears a task's timetable placement, returning it to the backlog.
    pub async fn unschedule_task(&self, params: &TaskRef) -> Result<bool> {
        let mut record = self.load_record(&params.date.clone().into()).await?;

        if record.unschedule(&params.task_id)? {
            self.persist(&params.date, record).await?;
            return Ok(true);
        }
        Ok(false)
    }

    /// Sets a record's notes and/or reflection text. `None` fields keep
    /// their current value.
    pub async fn set_notes(&self, params: &SetNotes) -> Result<()> {
        let mut record = self.load_record(&params.date.clone().into()).await?;

        if params.notes.is_some() {
            record.notes = params.notes.clone();
        }
        if params.reflection.is_some() {
            record.reflection = params.reflection.clone();
        }

        self.persist(&params.date, record).await
    }
}
